use super::*;

const NOW_MS: i64 = 1_750_000_000_000;

fn job(id: i64, title: &str, description: &str, requirements: &str) -> Job {
    Job {
        id,
        title: title.to_string(),
        description: description.to_string(),
        requirements: requirements.to_string(),
        preferred_skills: None,
        experience_level: "mid".to_string(),
        company_id: 1,
        created_by: 1,
        is_active: true,
        created_at: "2025-01-01T00:00:00".to_string(),
        updated_at: None,
    }
}

fn sample_jobs() -> Vec<Job> {
    let mut backend = job(1, "Senior Backend Engineer", "Rust services", "5y experience");
    backend.experience_level = "senior".to_string();

    let mut designer = job(2, "Product Designer", "Figma all day", "Portfolio required");
    designer.experience_level = "mid".to_string();

    // "senior" 只出现在 requirements 里
    let mut support = job(3, "Support Lead", "Customer happiness", "Mentors senior agents");
    support.experience_level = "lead".to_string();

    let mut skills = job(4, "Data Analyst", "Dashboards", "SQL");
    skills.preferred_skills = Some("SENIOR stakeholder management".to_string());

    vec![backend, designer, support, skills]
}

// =========================================================
// 搜索
// =========================================================

#[test]
fn search_matches_any_text_field_case_insensitively() {
    let jobs = sample_jobs();
    let hits = filter_jobs(&jobs, "senior", &JobFilters::default(), NOW_MS);
    let ids: Vec<i64> = hits.iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[test]
fn empty_term_matches_everything() {
    let jobs = sample_jobs();
    assert_eq!(filter_jobs(&jobs, "", &JobFilters::default(), NOW_MS).len(), 4);
    assert_eq!(filter_jobs(&jobs, "   ", &JobFilters::default(), NOW_MS).len(), 4);
}

#[test]
fn search_intersects_with_experience_filter() {
    let jobs = sample_jobs();
    let filters = JobFilters {
        experience_level: Some("senior".to_string()),
        ..Default::default()
    };
    let hits = filter_jobs(&jobs, "senior", &filters, NOW_MS);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
}

#[test]
fn active_filter_is_exact() {
    let mut jobs = sample_jobs();
    jobs[1].is_active = false;
    let filters = JobFilters {
        is_active: Some(false),
        ..Default::default()
    };
    let hits = filter_jobs(&jobs, "", &filters, NOW_MS);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);
}

// =========================================================
// 时间桶
// =========================================================

fn job_created_at(ts: &str) -> Job {
    let mut j = job(9, "t", "d", "r");
    j.created_at = ts.to_string();
    j
}

#[test]
fn date_buckets_are_rolling_windows() {
    // NOW_MS 往回 2 小时 / 3 天 / 20 天 / 40 天
    let hours2 = chrono::DateTime::from_timestamp_millis(NOW_MS - 2 * 3_600_000)
        .unwrap()
        .to_rfc3339();
    let days3 = chrono::DateTime::from_timestamp_millis(NOW_MS - 3 * 86_400_000)
        .unwrap()
        .to_rfc3339();
    let days20 = chrono::DateTime::from_timestamp_millis(NOW_MS - 20 * 86_400_000)
        .unwrap()
        .to_rfc3339();
    let days40 = chrono::DateTime::from_timestamp_millis(NOW_MS - 40 * 86_400_000)
        .unwrap()
        .to_rfc3339();

    let today = JobFilters { created: Some(DateBucket::Today), ..Default::default() };
    let week = JobFilters { created: Some(DateBucket::Week), ..Default::default() };
    let month = JobFilters { created: Some(DateBucket::Month), ..Default::default() };

    assert!(job_matches(&job_created_at(&hours2), "", &today, NOW_MS));
    assert!(!job_matches(&job_created_at(&days3), "", &today, NOW_MS));
    assert!(job_matches(&job_created_at(&days3), "", &week, NOW_MS));
    assert!(!job_matches(&job_created_at(&days20), "", &week, NOW_MS));
    assert!(job_matches(&job_created_at(&days20), "", &month, NOW_MS));
    assert!(!job_matches(&job_created_at(&days40), "", &month, NOW_MS));
}

#[test]
fn unparseable_created_at_never_matches_a_bucket() {
    let filters = JobFilters { created: Some(DateBucket::Month), ..Default::default() };
    assert!(!job_matches(&job_created_at("yesterday-ish"), "", &filters, NOW_MS));
}

#[test]
fn naive_timestamps_parse_as_utc() {
    assert_eq!(
        parse_timestamp_ms("1970-01-01T00:00:01"),
        Some(1000),
    );
    assert_eq!(
        parse_timestamp_ms("1970-01-01T00:00:01+00:00"),
        Some(1000),
    );
    assert!(parse_timestamp_ms("not a date").is_none());
}

#[test]
fn bucket_keys_round_trip() {
    for bucket in [DateBucket::Today, DateBucket::Week, DateBucket::Month] {
        assert_eq!(DateBucket::from_key(bucket.as_key()), Some(bucket));
    }
    assert_eq!(DateBucket::from_key("quarter"), None);
}

#[test]
fn filter_count_tracks_active_dimensions() {
    let filters = JobFilters {
        experience_level: Some("mid".to_string()),
        is_active: None,
        created: Some(DateBucket::Week),
    };
    assert_eq!(filters.active_count(), 2);
    assert!(!filters.is_empty());
    assert!(JobFilters::default().is_empty());
}
