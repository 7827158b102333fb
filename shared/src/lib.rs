//! CV-Align 共享领域层
//!
//! 不依赖 DOM / web_sys 的纯逻辑：领域模型、会话与 JWT 解码、
//! 路由守卫谓词、职位筛选、文件与表单校验、错误分类与重试策略。
//! 全部可在宿主机上直接 `cargo test`。

use serde::{Deserialize, Serialize};

pub mod error;
pub mod filter;
pub mod retry;
pub mod session;
pub mod upload;
pub mod validate;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中保存 JWT 的键
pub const STORAGE_TOKEN_KEY: &str = "token";
/// LocalStorage 中缓存用户信息的键（JSON）
pub const STORAGE_USER_KEY: &str = "user";
/// 默认后端地址（开发环境）
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 用户角色，固定枚举。
///
/// 权限判断一律是对该字段的集合成员测试，后端未知的角色
/// 反序列化为 `Unknown`，不会使整个用户对象解析失败。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Recruiter,
    HiringManager,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Recruiter => "recruiter",
            Role::HiringManager => "hiring_manager",
            Role::Unknown => "unknown",
        }
    }

    /// 界面显示用的人类可读名称
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Recruiter => "Recruiter",
            Role::HiringManager => "Hiring Manager",
            Role::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub company_id: i64,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub settings: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub requirements: String,
    #[serde(default)]
    pub preferred_skills: Option<String>,
    pub experience_level: String,
    pub company_id: i64,
    pub created_by: i64,
    pub is_active: bool,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// 候选人评估记录。分数按约定落在 [0,100]，客户端不强制。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: i64,
    pub job_id: i64,
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub candidate_email: Option<String>,
    pub cv_filename: String,
    pub overall_score: f64,
    pub skills_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub feedback: String,
    pub strengths: String,
    pub weaknesses: String,
    pub recommendations: String,
    pub created_at: String,
}

/// 按 id 从候选人列表中删除一条评估，其余顺序（服务端的总分
/// 降序）保持不变
pub fn remove_evaluation(list: &mut Vec<Evaluation>, id: i64) {
    list.retain(|eval| eval.id != id);
}

// =========================================================
// 请求 / 响应载荷 (Request & Response Payloads)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` 的响应，`token_type` 恒为 "bearer"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
    pub company_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetConfirm {
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    pub requirements: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_skills: Option<String>,
    pub experience_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCompanyRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<String>,
}

/// `POST /evaluations/{jobId}/upload` 返回的是摘要而非完整记录，
/// 完整评估需随后 `GET /evaluations/{id}` 获取。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvUploadResponse {
    pub message: String,
    pub evaluation_id: i64,
    pub overall_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_known_values() {
        let r: Role = serde_json::from_str("\"hiring_manager\"").unwrap();
        assert_eq!(r, Role::HiringManager);
    }

    #[test]
    fn role_falls_back_to_unknown() {
        let r: Role = serde_json::from_str("\"intern\"").unwrap();
        assert_eq!(r, Role::Unknown);
    }

    #[test]
    fn job_accepts_missing_optional_fields() {
        let json = r#"{
            "id": 1, "title": "Senior Engineer", "description": "d",
            "requirements": "r", "experience_level": "senior",
            "company_id": 2, "created_by": 3, "is_active": true,
            "created_at": "2025-05-01T10:00:00"
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert!(job.preferred_skills.is_none());
        assert!(job.updated_at.is_none());
    }

    fn eval(id: i64) -> Evaluation {
        Evaluation {
            id,
            job_id: 1,
            candidate_name: None,
            candidate_email: None,
            cv_filename: format!("cv_{}.pdf", id),
            overall_score: 0.0,
            skills_score: 0.0,
            experience_score: 0.0,
            education_score: 0.0,
            feedback: String::new(),
            strengths: String::new(),
            weaknesses: String::new(),
            recommendations: String::new(),
            created_at: "2025-05-01T10:00:00".to_string(),
        }
    }

    #[test]
    fn remove_evaluation_drops_exactly_one_id_and_keeps_order() {
        let mut list = vec![eval(3), eval(1), eval(2)];
        remove_evaluation(&mut list, 1);
        let ids: Vec<i64> = list.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2]);

        // 不存在的 id 是空操作
        remove_evaluation(&mut list, 99);
        assert_eq!(list.len(), 2);
    }
}
