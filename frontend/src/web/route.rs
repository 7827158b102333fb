//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、认证要求与角色要求。

use std::fmt::Display;

use cvalign_shared::Role;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面
    Login,
    /// 注册页面
    Register,
    /// 找回密码
    ForgotPassword,
    /// 重置密码（令牌在查询串 `?token=` 里）
    ResetPassword,
    /// 职位看板 (默认路由，需要认证)
    #[default]
    Dashboard,
    /// 新建职位 (需要认证 + 角色)
    CreateJob,
    /// 职位详情 (需要认证)
    JobDetail(i64),
    /// 候选人评估详情 (需要认证)
    Evaluation(i64),
    /// 页面未找到
    NotFound,
}

/// 允许创建职位的角色集合
pub const JOB_AUTHOR_ROLES: [Role; 3] = [Role::Admin, Role::Recruiter, Role::HiringManager];

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/dashboard" => Self::Dashboard,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/forgot-password" => Self::ForgotPassword,
            "/reset-password" => Self::ResetPassword,
            "/create-job" => Self::CreateJob,
            _ => {
                if let Some(id) = parse_id_segment(path, "/jobs/") {
                    Self::JobDetail(id)
                } else if let Some(id) = parse_id_segment(path, "/evaluation/") {
                    Self::Evaluation(id)
                } else {
                    Self::NotFound
                }
            }
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Dashboard => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::ForgotPassword => "/forgot-password".to_string(),
            Self::ResetPassword => "/reset-password".to_string(),
            Self::CreateJob => "/create-job".to_string(),
            Self::JobDetail(id) => format!("/jobs/{}", id),
            Self::Evaluation(id) => format!("/evaluation/{}", id),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::CreateJob | Self::JobDetail(_) | Self::Evaluation(_)
        )
    }

    /// 该路由要求的角色集合（None 表示只看认证不看角色）。
    /// 这只是界面层的隐藏，后端独立做权限校验。
    pub fn required_roles(&self) -> Option<&'static [Role]> {
        match self {
            Self::CreateJob => Some(&JOB_AUTHOR_ROLES),
            _ => None,
        }
    }

    /// 定义已认证用户是否应该离开此路由（如登录/注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// `/prefix/{id}` 形状的路径抽取 id，多余的段或非数字都算不匹配
fn parse_id_segment(path: &str, prefix: &str) -> Option<i64> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() || rest.contains('/') {
        return None;
    }
    rest.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_round_trips() {
        for route in [
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::ForgotPassword,
            AppRoute::ResetPassword,
            AppRoute::CreateJob,
            AppRoute::JobDetail(42),
            AppRoute::Evaluation(7),
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
        // Dashboard 有两个入口 path
        assert_eq!(AppRoute::from_path("/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        for path in ["/jobs/", "/jobs/abc", "/jobs/1/extra", "/evaluation/", "/nope"] {
            assert_eq!(AppRoute::from_path(path), AppRoute::NotFound, "{}", path);
        }
    }

    #[test]
    fn guard_table() {
        assert!(AppRoute::Dashboard.requires_auth());
        assert!(AppRoute::JobDetail(1).requires_auth());
        assert!(AppRoute::Evaluation(1).requires_auth());
        assert!(AppRoute::CreateJob.requires_auth());
        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::ForgotPassword.requires_auth());
        assert!(!AppRoute::ResetPassword.requires_auth());
    }

    #[test]
    fn role_gate_only_on_create_job() {
        let roles = AppRoute::CreateJob.required_roles().unwrap();
        assert!(roles.contains(&Role::Admin));
        assert!(roles.contains(&Role::Recruiter));
        assert!(roles.contains(&Role::HiringManager));
        assert!(!roles.contains(&Role::Unknown));

        assert!(AppRoute::Dashboard.required_roles().is_none());
        assert!(AppRoute::JobDetail(1).required_roles().is_none());
    }

    #[test]
    fn authenticated_users_leave_auth_pages() {
        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(AppRoute::Register.should_redirect_when_authenticated());
        assert!(!AppRoute::ForgotPassword.should_redirect_when_authenticated());
        assert!(!AppRoute::Dashboard.should_redirect_when_authenticated());
    }
}
