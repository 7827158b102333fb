//! 登录页
//!
//! 字段在失焦时校验，提交前再整体校验一遍；
//! 校验不通过不发请求。附带演示账号的一键填充。

use cvalign_shared::validate::{validate_email, validate_login_password};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::session::{self, use_session};
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn Login() -> impl IntoView {
    let api = use_api();
    let ctx = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal::<Option<&'static str>>(None);
    let (password_error, set_password_error) = signal::<Option<&'static str>>(None);
    let (submit_error, set_submit_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let validate_all = move || {
        let e = validate_email(&email.get_untracked());
        let p = validate_login_password(&password.get_untracked());
        set_email_error.set(e);
        set_password_error.set(p);
        e.is_none() && p.is_none()
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() || !validate_all() {
            return;
        }

        set_submitting.set(true);
        set_submit_error.set(None);
        let api = api.clone();
        spawn_local(async move {
            let result = session::login(
                &api,
                &ctx,
                email.get_untracked(),
                password.get_untracked(),
            )
            .await;
            // 成功时的跳转由路由服务的认证监听处理
            if let Err(err) = result {
                set_submit_error.set(Some(err.to_string()));
            }
            set_submitting.set(false);
        });
    };

    let fill_demo = move |demo_email: &'static str, demo_password: &'static str| {
        set_email.set(demo_email.to_string());
        set_password.set(demo_password.to_string());
        set_email_error.set(None);
        set_password_error.set(None);
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 p-4">
            <div class="card bg-base-100 shadow-xl w-full max-w-md">
                <div class="card-body gap-4">
                    <h1 class="card-title text-2xl justify-center">"CV-Align"</h1>
                    <p class="text-center text-sm opacity-60">"Sign in to your account"</p>

                    <Show when=move || submit_error.get().is_some()>
                        <div class="alert alert-error text-sm py-2">
                            {move || submit_error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form class="flex flex-col gap-3" on:submit=on_submit>
                        <label class="form-control">
                            <span class="label-text mb-1">"Email"</span>
                            <input
                                type="email"
                                class="input input-bordered"
                                class:input-error=move || email_error.get().is_some()
                                prop:value=email
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
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                on:blur=move |_| {
                                    set_password_error
                                        .set(validate_login_password(&password.get_untracked()));
                                }
                            />
                            <span class="text-error text-xs mt-1">
                                {move || password_error.get().unwrap_or("")}
                            </span>
                        </label>

                        <button
                            type="submit"
                            class="btn btn-primary w-full"
                            disabled=move || submitting.get()
                        >
                            {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>

                    <div class="divider text-xs opacity-60">"Demo Credentials"</div>
                    <div class="flex gap-2 justify-center">
                        <button
                            type="button"
                            class="btn btn-outline btn-sm"
                            on:click=move |_| fill_demo("admin@demo.com", "admin123")
                        >
                            "Use Admin Demo"
                        </button>
                        <button
                            type="button"
                            class="btn btn-outline btn-sm"
                            on:click=move |_| fill_demo("recruiter@demo.com", "recruiter123")
                        >
                            "Use Recruiter Demo"
                        </button>
                    </div>
                    <div class="text-xs opacity-60 text-center">
                        <p>"Admin: admin@demo.com / admin123"</p>
                        <p>"Recruiter: recruiter@demo.com / recruiter123"</p>
                    </div>

                    <p class="text-center text-sm">
                        "Don't have an account? "
                        <Link to=AppRoute::Register.to_path() class="link link-primary">
                            "Register"
                        </Link>
                    </p>
                    <p class="text-center text-sm">
                        <Link to=AppRoute::ForgotPassword.to_path() class="link">
                            "Forgot password?"
                        </Link>
                    </p>
                </div>
            </div>
        </div>
    }
}
