//! 职位看板
//!
//! 挂载时拉取全部职位，之后的搜索与过滤全部在客户端完成：
//! 搜索词防抖 300ms，过滤器变化立即生效，列表整表重算。
//! 删除有确认弹窗，成功后本地移除、不重新拉取。

use cvalign_shared::filter::{filter_jobs, DateBucket, JobFilters};
use cvalign_shared::{Job, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::loading::CardSkeleton;
use crate::components::icons::{Briefcase, Plus};
use crate::components::search_bar::SearchBar;
use crate::session::use_session;
use crate::web::route::{AppRoute, JOB_AUTHOR_ROLES};
use crate::web::router::Link;

const JOB_DELETE_ROLES: [Role; 2] = [Role::Admin, Role::Recruiter];

/// 卡片上的描述截断到 150 字符
fn truncate_description(text: &str) -> String {
    if text.chars().count() <= 150 {
        text.to_string()
    } else {
        let cut: String = text.chars().take(150).collect();
        format!("{}...", cut)
    }
}

/// 只取日期部分展示
fn created_date(created_at: &str) -> String {
    created_at
        .split('T')
        .next()
        .unwrap_or(created_at)
        .to_string()
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let api = StoredValue::new_local(use_api());
    let ctx = use_session();

    let (jobs, set_jobs) = signal::<Vec<Job>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let (term, set_term) = signal(String::new());
    let (filters, set_filters) = signal(JobFilters::default());
    let (pending_delete, set_pending_delete) = signal::<Option<i64>>(None);

    let can_create = ctx.has_role(&JOB_AUTHOR_ROLES);
    let can_delete = ctx.has_role(&JOB_DELETE_ROLES);

    let fetch_jobs = move || {
        set_loading.set(true);
        set_error.set(None);
        let api = api.get_value();
        spawn_local(async move {
            match api.jobs().await {
                Ok(list) => set_jobs.set(list),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    };
    fetch_jobs();

    // 每次搜索词或过滤器变化都整表重算
    let filtered = Signal::derive(move || {
        let now_ms = js_sys::Date::now() as i64;
        jobs.with(|all| filter_jobs(all, &term.get(), &filters.get(), now_ms))
    });

    let on_confirm_delete = move |_| {
        let Some(job_id) = pending_delete.get_untracked() else {
            return;
        };
        set_pending_delete.set(None);
        let api = api.get_value();
        spawn_local(async move {
            match api.delete_job(job_id).await {
                Ok(()) => set_jobs.update(|list| list.retain(|job| job.id != job_id)),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="max-w-6xl mx-auto p-4 flex flex-col gap-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">"Dashboard"</h1>
                <Show when=move || can_create.get()>
                    <Link to=AppRoute::CreateJob.to_path() class="btn btn-primary btn-sm gap-1">
                        <Plus attr:class="h-4 w-4" />
                        "Create New Job"
                    </Link>
                </Show>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="alert alert-error text-sm py-2 flex justify-between">
                    <span>{move || error.get().unwrap_or_default()}</span>
                    <button class="btn btn-sm btn-outline" on:click=move |_| fetch_jobs()>
                        "Retry"
                    </button>
                </div>
            </Show>

            <SearchBar
                placeholder="Search jobs by title, description or skills..."
                on_search=move |value: String| set_term.set(value)
            >
                <select
                    class="select select-bordered select-sm"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_filters.update(|f| {
                            f.experience_level = (!value.is_empty()).then_some(value);
                        });
                    }
                >
                    <option value="">"All Levels"</option>
                    <option value="entry">"Entry Level"</option>
                    <option value="mid">"Mid Level"</option>
                    <option value="senior">"Senior Level"</option>
                    <option value="lead">"Lead/Principal"</option>
                </select>
                <select
                    class="select select-bordered select-sm"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_filters.update(|f| {
                            f.is_active = match value.as_str() {
                                "active" => Some(true),
                                "inactive" => Some(false),
                                _ => None,
                            };
                        });
                    }
                >
                    <option value="">"All Statuses"</option>
                    <option value="active">"Active"</option>
                    <option value="inactive">"Inactive"</option>
                </select>
                <select
                    class="select select-bordered select-sm"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_filters.update(|f| f.created = DateBucket::from_key(&value));
                    }
                >
                    <option value="">"Any Time"</option>
                    <option value="today">"Last 24 Hours"</option>
                    <option value="week">"Last 7 Days"</option>
                    <option value="month">"Last 30 Days"</option>
                </select>
            </SearchBar>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                        </div>
                    }
                }
            >
                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=move || {
                        view! {
                            <div class="text-center py-12 opacity-60">
                                <Briefcase attr:class="h-12 w-12 mx-auto mb-3" />
                                <Show
                                    when=move || {
                                        jobs.with(|j| j.is_empty())
                                    }
                                    fallback=|| {
                                        view! {
                                            <p>"No jobs match your search or filters."</p>
                                        }
                                    }
                                >
                                    <h3 class="font-semibold">"No jobs available"</h3>
                                    <p>"Create your first job to start evaluating CVs"</p>
                                </Show>
                            </div>
                        }
                    }
                >
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                        <For each=move || filtered.get() key=|job| job.id let:job>
                            {
                                let job_id = job.id;
                                let is_active = job.is_active;
                                view! {
                                    <div class="card bg-base-100 shadow-md">
                                        <div class="card-body gap-2">
                                            <div class="flex items-start justify-between gap-2">
                                                <h3 class="card-title text-base">
                                                    {job.title.clone()}
                                                </h3>
                                                <span class="badge badge-outline">
                                                    {job.experience_level.clone()}
                                                </span>
                                            </div>
                                            <p class="text-sm opacity-70">
                                                {truncate_description(&job.description)}
                                            </p>
                                            <div class="flex items-center gap-2 text-xs opacity-60">
                                                <span>
                                                    {format!("Created: {}", created_date(&job.created_at))}
                                                </span>
                                                <Show when=move || is_active>
                                                    <span class="badge badge-success badge-sm">
                                                        "Active"
                                                    </span>
                                                </Show>
                                            </div>
                                            <div class="card-actions justify-end mt-2">
                                                <Link
                                                    to=AppRoute::JobDetail(job_id).to_path()
                                                    class="btn btn-primary btn-sm"
                                                >
                                                    "View Details"
                                                </Link>
                                                <Show when=move || can_delete.get()>
                                                    <button
                                                        class="btn btn-error btn-outline btn-sm"
                                                        on:click=move |_| {
                                                            set_pending_delete.set(Some(job_id));
                                                        }
                                                    >
                                                        "Delete"
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
            </Show>

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.get().is_some())
                title="Delete job"
                message="Are you sure you want to delete this job? All its evaluations will be removed."
                on_confirm=on_confirm_delete
                on_cancel=move |_| set_pending_delete.set(None)
            />
        </div>
    }
}
