//! 会话状态管理
//!
//! 管理登录会话（令牌 + 缓存的用户档案），与路由系统解耦：
//! 路由服务通过注入的认证/角色信号来做守卫判断。
//! 持久化走共享层的 `SessionStore`，存储后端是 LocalStorage。

use cvalign_shared::error::ApiError;
use cvalign_shared::session::{Session, SessionStore};
use cvalign_shared::{LoginRequest, RegisterRequest, Role, User};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::CvAlignApi;
use crate::web::LocalStorage;

/// 浏览器实现的会话存储
pub type BrowserSession = SessionStore<LocalStorage>;

pub fn browser_session() -> BrowserSession {
    SessionStore::new(LocalStorage)
}

fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// 会话状态
#[derive(Clone, Default)]
pub struct SessionState {
    /// 当前会话（仅在认证成功后存在）
    pub session: Option<Session>,
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 会话状态（只读）
    pub state: ReadSignal<SessionState>,
    /// 设置会话状态（写入）
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// 认证状态信号（用于路由服务注入）。
    /// 读取时计算令牌过期：过期的会话视为不存在。
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| {
                s.session
                    .as_ref()
                    .is_some_and(|sess| cvalign_shared::session::is_token_live(&sess.token, now_ms()))
            })
        })
    }

    /// 角色信号（用于路由服务与界面的能力判断）
    pub fn role_signal(&self) -> Signal<Option<Role>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.session.as_ref().map(|sess| sess.user.role)))
    }

    /// 当前用户（导航栏显示用）
    pub fn user_signal(&self) -> Signal<Option<User>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.session.as_ref().map(|sess| sess.user.clone())))
    }

    /// 界面上的能力检查：对角色集合的成员测试
    pub fn has_role(&self, required: &'static [Role]) -> Signal<bool> {
        let role = self.role_signal();
        Signal::derive(move || role.get().map(|r| required.contains(&r)).unwrap_or(false))
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 初始化会话状态
///
/// 从 LocalStorage 恢复上次的会话；令牌已过期时按不存在处理
/// （存储不做清除，过期是读取时计算的）。
pub fn init_session(ctx: &SessionContext) {
    let store = browser_session();
    if store.is_authenticated(now_ms()) {
        if let Some(session) = store.get() {
            ctx.set_state.update(|state| state.session = Some(session));
        }
    }
}

/// 登录：取令牌 -> 先持久化 -> 用它拉取用户档案 -> 缓存档案。
/// 档案拉取失败时回滚令牌，会话保持未认证。
pub async fn login(
    api: &CvAlignApi,
    ctx: &SessionContext,
    email: String,
    password: String,
) -> Result<(), ApiError> {
    let token = api.login(&LoginRequest { email, password }).await?;
    let store = browser_session();
    store.set_token(&token.access_token);

    match api.me().await {
        Ok(user) => {
            store.set_user(&user);
            ctx.set_state.update(|state| {
                state.session = Some(Session {
                    token: token.access_token,
                    user,
                });
            });
            Ok(())
        }
        Err(err) => {
            store.clear();
            Err(err)
        }
    }
}

/// 注册成功后自动登录（与原客户端一致）
pub async fn register_and_login(
    api: &CvAlignApi,
    ctx: &SessionContext,
    request: RegisterRequest,
) -> Result<(), ApiError> {
    let email = request.email.clone();
    let password = request.password.clone();
    api.register(&request).await?;
    login(api, ctx, email, password).await
}

/// 注销并清除状态
///
/// 后端通知是尽力而为；导航由路由服务的认证状态监听自动处理。
pub fn logout(api: &CvAlignApi, ctx: &SessionContext) {
    let api = api.clone();
    spawn_local(async move {
        let _ = api.logout().await;
    });
    browser_session().clear();
    ctx.set_state.update(|state| state.session = None);
}
