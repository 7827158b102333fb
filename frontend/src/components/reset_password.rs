//! 重置密码页
//!
//! 令牌来自邮件链接的 `?token=` 查询参数。缺失时直接给出
//! 失败提示而不渲染表单。

use cvalign_shared::validate::{validate_confirm_password, validate_new_password};
use cvalign_shared::PasswordResetConfirm;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::web::route::AppRoute;
use crate::web::router::{current_query_param, Link};

#[component]
pub fn ResetPassword() -> impl IntoView {
    let api = StoredValue::new_local(use_api());
    let token = StoredValue::new(current_query_param("token"));

    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (password_error, set_password_error) = signal::<Option<&'static str>>(None);
    let (confirm_error, set_confirm_error) = signal::<Option<&'static str>>(None);
    let (submit_error, set_submit_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);
    let (done, set_done) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let p = validate_new_password(&password.get_untracked());
        let c = validate_confirm_password(&password.get_untracked(), &confirm.get_untracked());
        set_password_error.set(p);
        set_confirm_error.set(c);
        if submitting.get_untracked() || p.is_some() || c.is_some() {
            return;
        }
        let Some(token) = token.get_value() else {
            return;
        };

        set_submitting.set(true);
        set_submit_error.set(None);
        let api = api.get_value();
        spawn_local(async move {
            let request = PasswordResetConfirm {
                token,
                new_password: password.get_untracked(),
            };
            match api.confirm_password_reset(&request).await {
                Ok(()) => set_done.set(true),
                Err(err) => set_submit_error.set(Some(err.to_string())),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 p-4">
            <div class="card bg-base-100 shadow-xl w-full max-w-md">
                <div class="card-body gap-4">
                    <h1 class="card-title text-2xl justify-center">"Set New Password"</h1>

                    <Show
                        when=move || token.get_value().is_some()
                        fallback=|| {
                            view! {
                                <div class="alert alert-error text-sm">
                                    "This reset link is invalid or incomplete. Please request a new one."
                                </div>
                                <p class="text-center text-sm">
                                    <Link
                                        to=AppRoute::ForgotPassword.to_path()
                                        class="link link-primary"
                                    >
                                        "Request a new link"
                                    </Link>
                                </p>
                            }
                        }
                    >
                        <Show
                            when=move || !done.get()
                            fallback=|| {
                                view! {
                                    <div class="alert alert-success text-sm">
                                        "Your password has been reset."
                                    </div>
                                    <p class="text-center text-sm">
                                        <Link to=AppRoute::Login.to_path() class="link link-primary">
                                            "Sign in with your new password"
                                        </Link>
                                    </p>
                                }
                            }
                        >
                            <Show when=move || submit_error.get().is_some()>
                                <div class="alert alert-error text-sm py-2">
                                    {move || submit_error.get().unwrap_or_default()}
                                </div>
                            </Show>

                            <form class="flex flex-col gap-3" on:submit=on_submit>
                                <label class="form-control">
                                    <span class="label-text mb-1">"New Password"</span>
                                    <input
                                        type="password"
                                        class="input input-bordered"
                                        class:input-error=move || password_error.get().is_some()
                                        prop:value=password
                                        disabled=move || submitting.get()
                                        on:input=move |ev| set_password.set(event_target_value(&ev))
                                        on:blur=move |_| {
                                            set_password_error.set(validate_new_password(
                                                &password.get_untracked(),
                                            ));
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

                                <button
                                    type="submit"
                                    class="btn btn-primary w-full"
                                    disabled=move || submitting.get()
                                >
                                    {move || {
                                        if submitting.get() { "Resetting..." } else { "Reset Password" }
                                    }}
                                </button>
                            </form>
                        </Show>
                    </Show>
                </div>
            </div>
        </div>
    }
}
