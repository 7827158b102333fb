//! CV-Align 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型，含认证与角色守卫表）
//! - `web::router`: 路由服务（核心引擎）
//! - `session`: 会话状态管理（令牌 + 用户档案）
//! - `api`: 类型化的后端 API 客户端（统一的请求管线）
//! - `components`: 页面与共享组件层

mod api;
mod components {
    pub mod candidate_list;
    pub mod confirm_dialog;
    pub mod create_job;
    pub mod cv_upload;
    pub mod dashboard;
    pub mod evaluation;
    pub mod forgot_password;
    mod icons;
    pub mod job_detail;
    pub mod loading;
    pub mod login;
    pub mod navbar;
    pub mod register;
    pub mod reset_password;
    pub mod search_bar;
}
mod session;

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{CvAlignApi, api_base_url};
use crate::components::create_job::CreateJob;
use crate::components::dashboard::Dashboard;
use crate::components::evaluation::EvaluationDetail;
use crate::components::forgot_password::ForgotPassword;
use crate::components::job_detail::JobDetail;
use crate::components::login::Login;
use crate::components::navbar::Navbar;
use crate::components::register::Register;
use crate::components::reset_password::ResetPassword;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::{HttpClient, HttpMethod, HttpRequestBuilder, HttpResponse};
    pub use storage::LocalStorage;
    pub use timer::{Debounce, sleep};
}

use crate::session::{SessionContext, init_session};
use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <Login /> }.into_any(),
        AppRoute::Register => view! { <Register /> }.into_any(),
        AppRoute::ForgotPassword => view! { <ForgotPassword /> }.into_any(),
        AppRoute::ResetPassword => view! { <ResetPassword /> }.into_any(),
        AppRoute::Dashboard => view! { <Dashboard /> }.into_any(),
        AppRoute::CreateJob => view! { <CreateJob /> }.into_any(),
        AppRoute::JobDetail(id) => view! { <JobDetail id=id /> }.into_any(),
        AppRoute::Evaluation(id) => view! { <EvaluationDetail id=id /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

/// 顶层兜底界面：任何未处理的渲染错误都不应该白屏
#[component]
fn CrashFallback() -> impl IntoView {
    let reload = |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };
    let go_home = |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    };
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-4xl font-bold">"Oops! Something went wrong"</h1>
                    <p class="py-4 text-base-content/70">
                        "We're sorry, but something unexpected happened. \
                         Please try refreshing the page or contact support if the problem persists."
                    </p>
                    <div class="flex gap-2 justify-center">
                        <button class="btn btn-primary" on:click=reload>"Reload Page"</button>
                        <button class="btn btn-ghost" on:click=go_home>"Go to Dashboard"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话上下文
    let session_ctx = SessionContext::new();
    provide_context(session_ctx);

    // 2. 初始化会话状态（从 LocalStorage 加载，过期令牌视为不存在）
    init_session(&session_ctx);

    // 3. API 客户端：401 时通过显式回调通知会话层，
    //    导航由路由服务监听认证信号完成，避免隐藏的跨模块耦合
    let set_state = session_ctx.set_state;
    let api = CvAlignApi::new(
        api_base_url(),
        Arc::new(move || {
            set_state.update(|state| state.session = None);
        }),
    );
    provide_context(api);

    // 4. 认证 / 角色信号注入路由服务实现守卫（解耦！）
    let is_authenticated = session_ctx.is_authenticated_signal();
    let role = session_ctx.role_signal();

    view! {
        <Router is_authenticated=is_authenticated role=role>
            <Show when=move || is_authenticated.get()>
                <Navbar />
            </Show>
            <ErrorBoundary fallback=|_| view! { <CrashFallback /> }>
                <RouterOutlet matcher=route_matcher />
            </ErrorBoundary>
        </Router>
    }
}
