//! 新建职位页
//!
//! 路由守卫已保证只有具备职位发布角色的用户能到达这里。
//! 必填字段用 required 属性由浏览器约束，空白加分技能按 None 发送。

use cvalign_shared::CreateJobRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::icons::ArrowLeft;
use crate::web::route::AppRoute;
use crate::web::router::{use_router, Link};

#[component]
pub fn CreateJob() -> impl IntoView {
    let api = StoredValue::new_local(use_api());
    let router = use_router();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (requirements, set_requirements) = signal(String::new());
    let (preferred_skills, set_preferred_skills) = signal(String::new());
    let (experience_level, set_experience_level) = signal("entry".to_string());

    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        set_submitting.set(true);
        set_error.set(None);
        let api = api.get_value();
        spawn_local(async move {
            let skills = preferred_skills.get_untracked();
            let request = CreateJobRequest {
                title: title.get_untracked(),
                description: description.get_untracked(),
                requirements: requirements.get_untracked(),
                preferred_skills: (!skills.trim().is_empty()).then_some(skills),
                experience_level: experience_level.get_untracked(),
            };
            match api.create_job(&request).await {
                Ok(_) => router.navigate(&AppRoute::Dashboard.to_path()),
                Err(err) => {
                    set_error.set(Some(err.to_string()));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="max-w-2xl mx-auto p-4 flex flex-col gap-4">
            <div>
                <Link to=AppRoute::Dashboard.to_path() class="btn btn-ghost btn-sm gap-1">
                    <ArrowLeft attr:class="h-4 w-4" />
                    "Back to Dashboard"
                </Link>
            </div>

            <h1 class="text-2xl font-bold">"Create New Job"</h1>

            <Show when=move || error.get().is_some()>
                <div class="alert alert-error text-sm py-2">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <form class="flex flex-col gap-3" on:submit=on_submit>
                <label class="form-control">
                    <span class="label-text mb-1">"Job Title *"</span>
                    <input
                        type="text"
                        class="input input-bordered"
                        placeholder="e.g. Senior Software Engineer"
                        required
                        prop:value=title
                        disabled=move || submitting.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>

                <label class="form-control">
                    <span class="label-text mb-1">"Experience Level *"</span>
                    <select
                        class="select select-bordered"
                        disabled=move || submitting.get()
                        on:change=move |ev| {
                            set_experience_level
                                .set(event_target_value(&ev));
                        }
                    >
                        <option value="entry" selected>"Entry Level"</option>
                        <option value="mid">"Mid Level"</option>
                        <option value="senior">"Senior Level"</option>
                        <option value="lead">"Lead/Principal"</option>
                    </select>
                </label>

                <label class="form-control">
                    <span class="label-text mb-1">"Job Description *"</span>
                    <textarea
                        class="textarea textarea-bordered h-28"
                        placeholder="Describe the role, responsibilities, and what the candidate will work on..."
                        required
                        prop:value=description
                        disabled=move || submitting.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="form-control">
                    <span class="label-text mb-1">"Requirements *"</span>
                    <textarea
                        class="textarea textarea-bordered h-28"
                        placeholder="List the essential qualifications, skills, and experience required..."
                        required
                        prop:value=requirements
                        disabled=move || submitting.get()
                        on:input=move |ev| set_requirements.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="form-control">
                    <span class="label-text mb-1">"Preferred Skills"</span>
                    <textarea
                        class="textarea textarea-bordered h-20"
                        placeholder="List any nice-to-have skills, certifications, or experience..."
                        prop:value=preferred_skills
                        disabled=move || submitting.get()
                        on:input=move |ev| set_preferred_skills.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <div class="flex justify-end gap-2">
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Creating..." } else { "Create Job" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
