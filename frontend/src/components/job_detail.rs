//! 职位详情页
//!
//! 职位与候选人列表并行拉取，网络失败或 5xx 走统一重试策略，
//! 重试耗尽后展示错误和手动重试按钮。上传成功返回的是摘要，
//! 这里随即按 id 拉取完整评估并插到列表顶部。

use cvalign_shared::retry::RetryPolicy;
use cvalign_shared::{Evaluation, Job, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::candidate_list::CandidateList;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::cv_upload::CvUpload;
use crate::components::icons::ArrowLeft;
use crate::components::loading::Loading;
use crate::session::use_session;
use crate::web::route::{AppRoute, JOB_AUTHOR_ROLES};
use crate::web::router::Link;

const EVALUATION_DELETE_ROLES: [Role; 2] = [Role::Admin, Role::Recruiter];

#[component]
pub fn JobDetail(
    /// 路由参数里的职位 id
    id: i64,
) -> impl IntoView {
    let api = StoredValue::new_local(use_api());
    let ctx = use_session();

    let (job, set_job) = signal::<Option<Job>>(None);
    let (candidates, set_candidates) = signal::<Vec<Evaluation>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let (show_upload, set_show_upload) = signal(false);
    // 上传已受理、完整评估还在拉取中时的占位提示
    let (processing, set_processing) = signal::<Option<String>>(None);
    let (pending_delete, set_pending_delete) = signal::<Option<i64>>(None);

    let can_upload = ctx.has_role(&JOB_AUTHOR_ROLES);
    let can_delete = ctx.has_role(&EVALUATION_DELETE_ROLES);

    let fetch_all = move || {
        set_loading.set(true);
        set_error.set(None);
        let api = api.get_value();
        spawn_local(async move {
            let policy = RetryPolicy::default();
            let job_result = api.job_with_retry(id, policy).await;
            let candidates_result = api.job_candidates_with_retry(id, policy).await;

            match (job_result, candidates_result) {
                (Ok(j), Ok(list)) => {
                    set_job.set(Some(j));
                    set_candidates.set(list);
                }
                (Err(err), _) | (_, Err(err)) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    };
    fetch_all();

    let on_uploaded = move |resp: cvalign_shared::CvUploadResponse| {
        set_show_upload.set(false);
        set_processing.set(Some(resp.message.clone()));
        let api = api.get_value();
        spawn_local(async move {
            match api.evaluation(resp.evaluation_id).await {
                Ok(eval) => {
                    set_candidates.update(|list| list.insert(0, eval));
                    set_processing.set(None);
                }
                Err(err) => {
                    set_processing.set(None);
                    set_error.set(Some(err.to_string()));
                }
            }
        });
    };

    let on_confirm_delete = move |_| {
        let Some(eval_id) = pending_delete.get_untracked() else {
            return;
        };
        set_pending_delete.set(None);
        let api = api.get_value();
        spawn_local(async move {
            match api.delete_evaluation(eval_id).await {
                Ok(()) => {
                    set_candidates.update(|list| cvalign_shared::remove_evaluation(list, eval_id));
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="max-w-4xl mx-auto p-4 flex flex-col gap-4">
            <div>
                <Link to=AppRoute::Dashboard.to_path() class="btn btn-ghost btn-sm gap-1">
                    <ArrowLeft attr:class="h-4 w-4" />
                    "Back to Dashboard"
                </Link>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="alert alert-error text-sm py-2 flex justify-between">
                    <span>{move || error.get().unwrap_or_default()}</span>
                    <button class="btn btn-sm btn-outline" on:click=move |_| fetch_all()>
                        "Retry"
                    </button>
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <Loading message="Loading job details..." /> }
            >
                <Show when=move || job.get().is_some()>
                    {move || {
                        job.get()
                            .map(|j| {
                                view! {
                                    <div class="flex items-start justify-between gap-4">
                                        <div>
                                            <h1 class="text-2xl font-bold">{j.title.clone()}</h1>
                                            <div class="flex items-center gap-2 text-sm opacity-60 mt-1">
                                                <span class="badge badge-outline">
                                                    {j.experience_level.clone()}
                                                </span>
                                                <span>
                                                    {format!(
                                                        "Created: {}",
                                                        j.created_at
                                                            .split('T')
                                                            .next()
                                                            .unwrap_or(&j.created_at),
                                                    )}
                                                </span>
                                                <Show when={
                                                    let active = j.is_active;
                                                    move || active
                                                }>
                                                    <span class="badge badge-success badge-sm">
                                                        "Active"
                                                    </span>
                                                </Show>
                                            </div>
                                        </div>
                                        <Show when=move || can_upload.get()>
                                            <button
                                                class="btn btn-primary btn-sm"
                                                on:click=move |_| {
                                                    set_show_upload.update(|open| *open = !*open);
                                                }
                                            >
                                                {move || {
                                                    if show_upload.get() {
                                                        "Cancel Upload"
                                                    } else {
                                                        "Upload CV"
                                                    }
                                                }}
                                            </button>
                                        </Show>
                                    </div>

                                    <div class="card bg-base-100 shadow-sm">
                                        <div class="card-body gap-3">
                                            <div>
                                                <h2 class="font-semibold mb-1">"Job Description"</h2>
                                                <p class="text-sm whitespace-pre-line">
                                                    {j.description.clone()}
                                                </p>
                                            </div>
                                            <div>
                                                <h2 class="font-semibold mb-1">"Requirements"</h2>
                                                <p class="text-sm whitespace-pre-line">
                                                    {j.requirements.clone()}
                                                </p>
                                            </div>
                                            <Show when={
                                                let has_skills = j.preferred_skills.is_some();
                                                move || has_skills
                                            }>
                                                <div>
                                                    <h2 class="font-semibold mb-1">
                                                        "Preferred Skills"
                                                    </h2>
                                                    <p class="text-sm whitespace-pre-line">
                                                        {j.preferred_skills.clone().unwrap_or_default()}
                                                    </p>
                                                </div>
                                            </Show>
                                        </div>
                                    </div>
                                }
                            })
                    }}

                    <Show when=move || show_upload.get()>
                        <CvUpload job_id=id on_uploaded=on_uploaded />
                    </Show>

                    <Show when=move || processing.get().is_some()>
                        <div class="alert alert-info text-sm py-2">
                            <span class="loading loading-spinner loading-xs"></span>
                            {move || {
                                format!(
                                    "{} Fetching evaluation results...",
                                    processing.get().unwrap_or_default(),
                                )
                            }}
                        </div>
                    </Show>

                    <div class="flex flex-col gap-2">
                        <h2 class="font-semibold text-lg">
                            {move || format!("Candidates ({})", candidates.with(|c| c.len()))}
                        </h2>
                        <CandidateList
                            candidates=candidates.into()
                            can_delete=can_delete
                            on_delete=move |eval_id: i64| set_pending_delete.set(Some(eval_id))
                        />
                    </div>
                </Show>
            </Show>

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.get().is_some())
                title="Delete evaluation"
                message="Are you sure you want to remove this candidate evaluation?"
                on_confirm=on_confirm_delete
                on_cancel=move |_| set_pending_delete.set(None)
            />
        </div>
    }
}
