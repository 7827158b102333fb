//! 忘记密码页
//!
//! 提交邮箱后切换为"已发送"提示。后端对不存在的邮箱同样
//! 返回成功，避免账号枚举，这里只展示统一文案。

use cvalign_shared::validate::validate_email;
use cvalign_shared::PasswordResetRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn ForgotPassword() -> impl IntoView {
    let api = StoredValue::new_local(use_api());

    let (email, set_email) = signal(String::new());
    let (email_error, set_email_error) = signal::<Option<&'static str>>(None);
    let (submit_error, set_submit_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);
    let (sent, set_sent) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let err = validate_email(&email.get_untracked());
        set_email_error.set(err);
        if submitting.get_untracked() || err.is_some() {
            return;
        }

        set_submitting.set(true);
        set_submit_error.set(None);
        let api = api.get_value();
        spawn_local(async move {
            let request = PasswordResetRequest {
                email: email.get_untracked(),
            };
            match api.request_password_reset(&request).await {
                Ok(()) => set_sent.set(true),
                Err(err) => set_submit_error.set(Some(err.to_string())),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 p-4">
            <div class="card bg-base-100 shadow-xl w-full max-w-md">
                <div class="card-body gap-4">
                    <h1 class="card-title text-2xl justify-center">"Reset Password"</h1>

                    <Show
                        when=move || !sent.get()
                        fallback=move || {
                            view! {
                                <div class="alert alert-success text-sm">
                                    {move || {
                                        format!(
                                            "If an account exists for {}, a reset link has been sent.",
                                            email.get(),
                                        )
                                    }}
                                </div>
                                <p class="text-center text-sm">
                                    <Link to=AppRoute::Login.to_path() class="link link-primary">
                                        "Back to sign in"
                                    </Link>
                                </p>
                            }
                        }
                    >
                        <p class="text-center text-sm opacity-60">
                            "Enter your email and we will send you a reset link."
                        </p>

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
                                    placeholder="Enter your email"
                                    prop:value=email
                                    disabled=move || submitting.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    on:blur=move |_| {
                                        set_email_error
                                            .set(validate_email(&email.get_untracked()));
                                    }
                                />
                                <span class="text-error text-xs mt-1">
                                    {move || email_error.get().unwrap_or("")}
                                </span>
                            </label>

                            <button
                                type="submit"
                                class="btn btn-primary w-full"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Sending..." } else { "Send Reset Link" }}
                            </button>
                        </form>

                        <p class="text-center text-sm">
                            <Link to=AppRoute::Login.to_path() class="link">
                                "Back to sign in"
                            </Link>
                        </p>
                    </Show>
                </div>
            </div>
        </div>
    }
}
