//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程，
//! 守卫检查认证信号与角色信号，两者都由外部注入实现解耦。

use cvalign_shared::Role;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 读取当前 URL 查询串中的某个参数（如 `/reset-password?token=...`）
pub fn current_query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由守卫判定结果：放行，或重定向到某个路由
fn guard(route: &AppRoute, is_auth: bool, role: Option<Role>) -> Option<AppRoute> {
    // 需要认证但未认证 -> 登录页
    if route.requires_auth() && !is_auth {
        web_sys::console::log_1(&"[Router] Access denied. Redirecting to login.".into());
        return Some(AppRoute::auth_failure_redirect());
    }
    // 已认证却访问登录/注册页 -> 看板
    if route.should_redirect_when_authenticated() && is_auth {
        web_sys::console::log_1(&"[Router] Already authenticated. Redirecting to dashboard.".into());
        return Some(AppRoute::auth_success_redirect());
    }
    // 角色不满足 -> 看板（界面层隐藏，后端仍独立校验）
    if let Some(required) = route.required_roles() {
        let allowed = role.map(|r| required.contains(&r)).unwrap_or(false);
        if !allowed {
            web_sys::console::log_1(&"[Router] Missing required role. Redirecting.".into());
            return Some(AppRoute::auth_success_redirect());
        }
    }
    None
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
    /// 当前用户角色（注入的信号）
    role: Signal<Option<Role>>,
}

impl RouterService {
    /// 创建新的路由服务
    fn new(is_authenticated: Signal<bool>, role: Signal<Option<Role>>) -> Self {
        // 初始化当前路由（从 URL 解析）
        let path = current_path();
        let initial_route = AppRoute::from_path(&path);
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
            role,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 处理 -> 加载
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    /// 直接按路由枚举导航（带参数的路由更方便）
    pub fn navigate_to(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    /// 导航到指定路由
    ///
    /// # Arguments
    /// * `use_push` - true 使用 pushState, false 使用 replaceState
    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();
        let role = self.role.get_untracked();

        let resolved = match guard(&target_route, is_auth, role) {
            Some(redirect) => redirect,
            None => target_route,
        };

        if use_push {
            push_history_state(&resolved.to_path());
        } else {
            replace_history_state(&resolved.to_path());
        }
        self.set_route.set(resolved);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;
        let role = self.role;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            // popstate 时也执行守卫逻辑
            match guard(
                &target_route,
                is_authenticated.get_untracked(),
                role.get_untracked(),
            ) {
                Some(redirect) => {
                    replace_history_state(&redirect.to_path());
                    set_route.set(redirect);
                }
                None => set_route.set(target_route),
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置认证状态变化时的自动重定向
    ///
    /// 登录成功 -> 离开登录页；登出或 401 强制下线 -> 离开受保护页。
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if is_auth {
                if route.should_redirect_when_authenticated() {
                    let redirect = AppRoute::auth_success_redirect();
                    push_history_state(&redirect.to_path());
                    set_route.set(redirect);
                    web_sys::console::log_1(
                        &"[Router] Auth state changed: logged in, redirecting to dashboard.".into(),
                    );
                }
            } else if route.requires_auth() {
                let redirect = AppRoute::auth_failure_redirect();
                push_history_state(&redirect.to_path());
                set_route.set(redirect);
                web_sys::console::log_1(
                    &"[Router] Auth state changed: logged out, redirecting to login.".into(),
                );
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>, role: Signal<Option<Role>>) -> RouterService {
    let router = RouterService::new(is_authenticated, role);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 当前角色信号
    role: Signal<Option<Role>>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated, role);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接：拦截点击走 History API，保留 href 语义
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    /// 附加的 class
    #[prop(optional, into)]
    class: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let to_clone = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&to_clone);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
