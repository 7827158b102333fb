//! 职位列表的客户端筛选
//!
//! 纯函数：对已经取回的职位列表做不区分大小写的子串搜索，
//! 并与精确匹配的过滤器求交集。每次输入变化都整表重算，
//! 从不重新请求后端。

use crate::Job;

/// 创建时间桶，滚动窗口语义（相对 `now_ms`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBucket {
    /// 最近 24 小时
    Today,
    /// 最近 7 天
    Week,
    /// 最近 30 天
    Month,
}

impl DateBucket {
    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    /// 下拉框 value 与枚举的互转
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "today" => Some(Self::Today),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    fn window_ms(&self) -> i64 {
        match self {
            Self::Today => Self::DAY_MS,
            Self::Week => 7 * Self::DAY_MS,
            Self::Month => 30 * Self::DAY_MS,
        }
    }

    /// `created_at` 是否落在窗口内。时间戳解析失败时不匹配。
    fn contains(&self, created_at: &str, now_ms: i64) -> bool {
        match parse_timestamp_ms(created_at) {
            Some(ts) => now_ms - ts <= self.window_ms(),
            None => false,
        }
    }
}

/// 精确匹配过滤器集合，None 表示该维度不过滤
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilters {
    pub experience_level: Option<String>,
    pub is_active: Option<bool>,
    pub created: Option<DateBucket>,
}

impl JobFilters {
    pub fn is_empty(&self) -> bool {
        self.experience_level.is_none() && self.is_active.is_none() && self.created.is_none()
    }

    /// 激活的过滤器个数（界面上的角标用）
    pub fn active_count(&self) -> usize {
        [
            self.experience_level.is_some(),
            self.is_active.is_some(),
            self.created.is_some(),
        ]
        .iter()
        .filter(|&&on| on)
        .count()
    }
}

/// 后端时间戳转 Unix 毫秒。
/// FastAPI 序列化的 datetime 可能带时区（RFC 3339）也可能是裸的
/// naive 格式，两种都接受；naive 按 UTC 处理。
pub fn parse_timestamp_ms(value: &str) -> Option<i64> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }
    chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// 搜索词命中：标题 / 描述 / 要求 / 加分技能里的不区分大小写子串
fn matches_search(job: &Job, term_lower: &str) -> bool {
    if term_lower.is_empty() {
        return true;
    }
    job.title.to_lowercase().contains(term_lower)
        || job.description.to_lowercase().contains(term_lower)
        || job.requirements.to_lowercase().contains(term_lower)
        || job
            .preferred_skills
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(term_lower))
}

/// 单个职位是否同时满足搜索词与所有过滤器
pub fn job_matches(job: &Job, term: &str, filters: &JobFilters, now_ms: i64) -> bool {
    let term_lower = term.trim().to_lowercase();
    if !matches_search(job, &term_lower) {
        return false;
    }
    if let Some(level) = &filters.experience_level {
        if &job.experience_level != level {
            return false;
        }
    }
    if let Some(active) = filters.is_active {
        if job.is_active != active {
            return false;
        }
    }
    if let Some(bucket) = filters.created {
        if !bucket.contains(&job.created_at, now_ms) {
            return false;
        }
    }
    true
}

/// 整表筛选，保持原有顺序
pub fn filter_jobs(jobs: &[Job], term: &str, filters: &JobFilters, now_ms: i64) -> Vec<Job> {
    jobs.iter()
        .filter(|job| job_matches(job, term, filters, now_ms))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests;
