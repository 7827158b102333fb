//! 注册页
//!
//! 公司列表在挂载时拉取。注册成功后自动登录，
//! 跳转由路由服务的认证监听完成。

use cvalign_shared::validate::{
    validate_company_choice, validate_confirm_password, validate_email, validate_full_name,
    validate_new_password,
};
use cvalign_shared::{Company, RegisterRequest, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::loading::Loading;
use crate::session::{self, use_session};
use crate::web::route::AppRoute;
use crate::web::router::Link;

fn parse_role(value: &str) -> Role {
    match value {
        "admin" => Role::Admin,
        "hiring_manager" => Role::HiringManager,
        _ => Role::Recruiter,
    }
}

#[component]
pub fn Register() -> impl IntoView {
    // 存进 StoredValue 让事件处理闭包保持 Copy，便于放进可重建的子视图
    let api = StoredValue::new_local(use_api());
    let ctx = use_session();

    let (companies, set_companies) = signal::<Vec<Company>>(Vec::new());
    let (loading_companies, set_loading_companies) = signal(true);

    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (role, set_role) = signal(Role::Recruiter);
    let (company_id, set_company_id) = signal(String::new());

    let (name_error, set_name_error) = signal::<Option<&'static str>>(None);
    let (email_error, set_email_error) = signal::<Option<&'static str>>(None);
    let (password_error, set_password_error) = signal::<Option<&'static str>>(None);
    let (confirm_error, set_confirm_error) = signal::<Option<&'static str>>(None);
    let (company_error, set_company_error) = signal::<Option<&'static str>>(None);

    let (submit_error, set_submit_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    // 挂载时拉取公司列表
    {
        let api = api.get_value();
        spawn_local(async move {
            match api.companies().await {
                Ok(list) => set_companies.set(list),
                Err(_) => set_submit_error.set(Some("Failed to load companies".to_string())),
            }
            set_loading_companies.set(false);
        });
    }

    let validate_all = move || {
        let n = validate_full_name(&full_name.get_untracked());
        let e = validate_email(&email.get_untracked());
        let p = validate_new_password(&password.get_untracked());
        let c = validate_confirm_password(&password.get_untracked(), &confirm.get_untracked());
        let co = validate_company_choice(&company_id.get_untracked());
        set_name_error.set(n);
        set_email_error.set(e);
        set_password_error.set(p);
        set_confirm_error.set(c);
        set_company_error.set(co);
        n.is_none() && e.is_none() && p.is_none() && c.is_none() && co.is_none()
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() || !validate_all() {
            return;
        }
        let Ok(company_id) = company_id.get_untracked().parse::<i64>() else {
            set_company_error.set(Some("Company is required"));
            return;
        };

        set_submitting.set(true);
        set_submit_error.set(None);
        let api = api.get_value();
        spawn_local(async move {
            let request = RegisterRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
                full_name: full_name.get_untracked(),
                role: role.get_untracked(),
                company_id,
            };
            if let Err(err) = session::register_and_login(&api, &ctx, request).await {
                set_submit_error.set(Some(err.to_string()));
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Show
            when=move || !loading_companies.get()
            fallback=|| view! { <Loading message="Loading registration form..." /> }
        >
            <div class="min-h-screen flex items-center justify-center bg-base-200 p-4">
                <div class="card bg-base-100 shadow-xl w-full max-w-lg">
                    <div class="card-body gap-4">
                        <h1 class="card-title text-2xl justify-center">"CV-Align"</h1>
                        <p class="text-center text-sm opacity-60">"Create Account"</p>

                        <Show when=move || submit_error.get().is_some()>
                            <div class="alert alert-error text-sm py-2">
                                {move || submit_error.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <form class="flex flex-col gap-3" on:submit=on_submit>
                            <label class="form-control">
                                <span class="label-text mb-1">"Full Name"</span>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    class:input-error=move || name_error.get().is_some()
                                    placeholder="Enter your full name"
                                    prop:value=full_name
                                    disabled=move || submitting.get()
                                    on:input=move |ev| set_full_name.set(event_target_value(&ev))
                                    on:blur=move |_| {
                                        set_name_error
                                            .set(validate_full_name(&full_name.get_untracked()));
                                    }
                                />
                                <span class="text-error text-xs mt-1">
                                    {move || name_error.get().unwrap_or("")}
                                </span>
                            </label>

                            <label class="form-control">
                                <span class="label-text mb-1">"Email"</span>
                                <input
                                    type="email"
                                    class="input input-bordered"
                                    class:input-error=move || email_error.get().is_some()
                                    placeholder="Enter your email"
                                    prop:value=email
                                    disabled=move || submitting.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    on:blur=move |_| {
                                        set_email_error.set(validate_email(&email.get_untracked()));
                                    }
                                />
                                <span class="text-error text-xs mt-1">
                                    {move || email_error.get().unwrap_or("")}
                                </span>
                            </label>

                            <label class="form-control">
                                <span class="label-text mb-1">"Password"</span>
                                <input
                                    type="password"
                                    class="input input-bordered"
                                    class:input-error=move || password_error.get().is_some()
                                    placeholder="Enter your password"
                                    prop:value=password
                                    disabled=move || submitting.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    on:blur=move |_| {
                                        set_password_error
                                            .set(validate_new_password(&password.get_untracked()));
                                    }
                                />
                                <span class="text-error text-xs mt-1">
                                    {move || password_error.get().unwrap_or("")}
                                </span>
                            </label>

                            <label class="form-control">
                                <span class="label-text mb-1">"Confirm Password"</span>
                                <input
                                    type="password"
                                    class="input input-bordered"
                                    class:input-error=move || confirm_error.get().is_some()
                                    placeholder="Confirm your password"
                                    prop:value=confirm
                                    disabled=move || submitting.get()
                                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                    on:blur=move |_| {
                                        set_confirm_error.set(validate_confirm_password(
                                            &password.get_untracked(),
                                            &confirm.get_untracked(),
                                        ));
                                    }
                                />
                                <span class="text-error text-xs mt-1">
                                    {move || confirm_error.get().unwrap_or("")}
                                </span>
                            </label>

                            <div class="grid grid-cols-2 gap-3">
                                <label class="form-control">
                                    <span class="label-text mb-1">"Role"</span>
                                    <select
                                        class="select select-bordered"
                                        disabled=move || submitting.get()
                                        on:change=move |ev| {
                                            let value = event_target_value(&ev);
                                            set_role.set(parse_role(&value));
                                        }
                                    >
                                        <option value="recruiter" selected>"Recruiter"</option>
                                        <option value="hiring_manager">"Hiring Manager"</option>
                                        <option value="admin">"Admin"</option>
                                    </select>
                                </label>

                                <label class="form-control">
                                    <span class="label-text mb-1">"Company"</span>
                                    <select
                                        class="select select-bordered"
                                        class:select-error=move || company_error.get().is_some()
                                        disabled=move || submitting.get()
                                        on:change=move |ev| {
                                            let value = event_target_value(&ev);
                                            set_company_error.set(validate_company_choice(&value));
                                            set_company_id.set(value);
                                        }
                                    >
                                        <option value="">"Select a company"</option>
                                        <For each=move || companies.get() key=|c| c.id let:company>
                                            <option value=company.id.to_string()>
                                                {company.name.clone()}
                                            </option>
                                        </For>
                                    </select>
                                    <span class="text-error text-xs mt-1">
                                        {move || company_error.get().unwrap_or("")}
                                    </span>
                                </label>
                            </div>

                            <button
                                type="submit"
                                class="btn btn-primary w-full"
                                disabled=move || submitting.get()
                            >
                                {move || {
                                    if submitting.get() {
                                        "Creating Account..."
                                    } else {
                                        "Create Account"
                                    }
                                }}
                            </button>
                        </form>

                        <p class="text-center text-sm">
                            "Already have an account? "
                            <Link to=AppRoute::Login.to_path() class="link link-primary">
                                "Sign in here"
                            </Link>
                        </p>
                    </div>
                </div>
            </div>
        </Show>
    }
}
