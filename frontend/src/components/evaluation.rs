//! 评估详情页
//!
//! 按 id 拉取完整评估。优势/不足/建议是后端拼接的多行文本，
//! 这里按换行拆成条目展示。

use cvalign_shared::Evaluation;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::candidate_list::score_color;
use crate::components::icons::ArrowLeft;
use crate::components::loading::Loading;
use crate::web::route::AppRoute;
use crate::web::router::Link;

/// 多行文本拆条目，空行丢弃
fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
fn ScoreCard(
    #[prop(into)] label: String,
    #[prop(into)] caption: String,
    score: f64,
    #[prop(default = false)] large: bool,
) -> impl IntoView {
    let size = if large { "w-24 h-24 text-3xl" } else { "w-16 h-16 text-xl" };
    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body items-center text-center gap-2">
                <div
                    class=format!(
                        "rounded-full flex items-center justify-center text-white font-bold {}",
                        size,
                    )
                    style=format!("background-color: {}", score_color(score))
                >
                    {format!("{:.0}", score)}
                </div>
                <h3 class="font-semibold">{label}</h3>
                <p class="text-xs opacity-60">{caption}</p>
            </div>
        </div>
    }
}

#[component]
fn AnalysisSection(
    #[prop(into)] title: String,
    #[prop(into)] marker: String,
    lines: Vec<String>,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body gap-2">
                <h2 class="font-semibold">{title}</h2>
                {lines
                    .into_iter()
                    .map(|line| {
                        view! {
                            <div class="text-sm flex gap-2">
                                <span>{marker.clone()}</span>
                                <span>{line}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn EvaluationDetail(
    /// 路由参数里的评估 id
    id: i64,
) -> impl IntoView {
    let api = StoredValue::new_local(use_api());

    let (evaluation, set_evaluation) = signal::<Option<Evaluation>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    {
        let api = api.get_value();
        spawn_local(async move {
            match api.evaluation(id).await {
                Ok(eval) => set_evaluation.set(Some(eval)),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    }

    view! {
        <div class="max-w-4xl mx-auto p-4 flex flex-col gap-4">
            <Show when=move || error.get().is_some()>
                <div class="alert alert-error text-sm py-2">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <Loading message="Loading evaluation..." /> }
            >
                {move || {
                    evaluation
                        .get()
                        .map(|eval| {
                            let display_name = eval
                                .candidate_name
                                .clone()
                                .unwrap_or_else(|| eval.cv_filename.clone());
                            view! {
                                <div class="flex items-start justify-between gap-4">
                                    <div>
                                        <h1 class="text-2xl font-bold">{display_name}</h1>
                                        <p class="text-sm opacity-60">
                                            {eval.candidate_email.clone().unwrap_or_default()}
                                        </p>
                                        <p class="text-sm opacity-60 mt-1">
                                            {format!(
                                                "CV: {} | Evaluated: {}",
                                                eval.cv_filename,
                                                eval.created_at
                                                    .split('T')
                                                    .next()
                                                    .unwrap_or(&eval.created_at),
                                            )}
                                        </p>
                                    </div>
                                    <Link
                                        to=AppRoute::JobDetail(eval.job_id).to_path()
                                        class="btn btn-ghost btn-sm gap-1"
                                    >
                                        <ArrowLeft attr:class="h-4 w-4" />
                                        "Back to Job"
                                    </Link>
                                </div>

                                <div class="grid md:grid-cols-4 gap-3">
                                    <ScoreCard
                                        label="Overall Score"
                                        caption="Comprehensive evaluation based on all criteria"
                                        score=eval.overall_score
                                        large=true
                                    />
                                    <ScoreCard
                                        label="Skills Match"
                                        caption="Technical and professional skills alignment"
                                        score=eval.skills_score
                                    />
                                    <ScoreCard
                                        label="Experience"
                                        caption="Relevant work experience and background"
                                        score=eval.experience_score
                                    />
                                    <ScoreCard
                                        label="Education"
                                        caption="Educational qualifications and certifications"
                                        score=eval.education_score
                                    />
                                </div>

                                <div class="card bg-base-100 shadow-sm">
                                    <div class="card-body gap-2">
                                        <h2 class="font-semibold">"Overall Feedback"</h2>
                                        <p class="text-sm whitespace-pre-line">
                                            {eval.feedback.clone()}
                                        </p>
                                    </div>
                                </div>

                                <div class="grid md:grid-cols-3 gap-3">
                                    <AnalysisSection
                                        title="Strengths"
                                        marker="+"
                                        lines=split_lines(&eval.strengths)
                                    />
                                    <AnalysisSection
                                        title="Areas for Improvement"
                                        marker="!"
                                        lines=split_lines(&eval.weaknesses)
                                    />
                                    <AnalysisSection
                                        title="Recommendations"
                                        marker=">"
                                        lines=split_lines(&eval.recommendations)
                                    />
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
