//! 候选人列表
//!
//! 按服务端返回的顺序展示（服务端已按总分降序排列），
//! 名次即列表序号。分数用统一的分档颜色呈现。

use cvalign_shared::Evaluation;
use leptos::prelude::*;

use crate::components::icons::{FileText, Trash2};
use crate::web::route::AppRoute;
use crate::web::router::Link;

/// 分数分档颜色（与评估详情页一致）
pub(crate) fn score_color(score: f64) -> &'static str {
    if score >= 80.0 {
        "#27ae60"
    } else if score >= 65.0 {
        "#f39c12"
    } else if score >= 50.0 {
        "#e67e22"
    } else {
        "#e74c3c"
    }
}

#[component]
pub fn CandidateList(
    /// 评估列表（已按总分降序）
    candidates: Signal<Vec<Evaluation>>,
    /// 是否显示删除按钮
    can_delete: Signal<bool>,
    /// 删除请求回调（参数是评估 id）
    #[prop(into)]
    on_delete: Callback<i64>,
) -> impl IntoView {
    let ranked = move || candidates.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <Show
            when=move || !candidates.get().is_empty()
            fallback=|| {
                view! {
                    <div class="text-center py-8 opacity-60">
                        <FileText attr:class="h-10 w-10 mx-auto mb-2" />
                        <p>"No candidates yet. Upload a CV to start evaluating."</p>
                    </div>
                }
            }
        >
            <div class="flex flex-col gap-3">
                <For each=ranked key=|(_, eval)| eval.id let:entry>
                    {
                        let (index, eval) = entry;
                        let eval_id = eval.id;
                        let display_name = eval
                            .candidate_name
                            .clone()
                            .unwrap_or_else(|| eval.cv_filename.clone());
                        view! {
                            <div class="card bg-base-100 shadow-sm">
                                <div class="card-body py-4 flex-row items-center gap-4">
                                    <div class="text-lg font-bold opacity-50 w-10">
                                        {format!("#{}", index + 1)}
                                    </div>
                                    <div class="flex-1 min-w-0">
                                        <div class="font-semibold truncate">{display_name}</div>
                                        <div class="text-sm opacity-60 truncate">
                                            {eval.candidate_email.clone().unwrap_or_default()}
                                        </div>
                                        <div class="text-xs opacity-50 flex gap-3 mt-1">
                                            <span>{format!("Skills: {:.0}", eval.skills_score)}</span>
                                            <span>
                                                {format!("Experience: {:.0}", eval.experience_score)}
                                            </span>
                                            <span>
                                                {format!("Education: {:.0}", eval.education_score)}
                                            </span>
                                        </div>
                                    </div>
                                    <div
                                        class="text-2xl font-bold"
                                        style=format!("color: {}", score_color(eval.overall_score))
                                    >
                                        {format!("{:.0}", eval.overall_score)}
                                    </div>
                                    <div class="flex gap-2">
                                        <Link
                                            to=AppRoute::Evaluation(eval_id).to_path()
                                            class="btn btn-sm btn-outline"
                                        >
                                            "View"
                                        </Link>
                                        <Show when=move || can_delete.get()>
                                            <button
                                                class="btn btn-sm btn-ghost text-error"
                                                title="Delete evaluation"
                                                on:click=move |_| on_delete.run(eval_id)
                                            >
                                                <Trash2 attr:class="h-4 w-4" />
                                            </button>
                                        </Show>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                </For>
            </div>
        </Show>
    }
}
