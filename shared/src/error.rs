//! API 错误分类模块
//!
//! 客户端视角的错误只有两个维度：有没有拿到响应（`status`），
//! 以及给用户看什么（`message`）。后端约定把人类可读的原因放在
//! JSON 的 `detail` 字段里，缺失时退回通用文案。

use std::fmt;

/// 一次后端调用的失败结果。
///
/// `status == None` 表示没有收到响应（网络层失败）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    /// 网络层失败（请求未到达或响应未返回）
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// 从非 2xx 响应构造：优先取响应体 JSON 的 `detail` 字段
    pub fn from_status_body(status: u16, body: &str) -> Self {
        let message = extract_detail(body)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        Self {
            status: Some(status),
            message,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status == Some(403)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }

    /// 重试策略的判据：只有网络失败和 5xx 值得重试，
    /// 4xx（鉴权 / 权限 / 不存在）立即上报。
    pub fn is_retryable(&self) -> bool {
        match self.status {
            None => true,
            Some(code) => (500..600).contains(&code),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "{} (HTTP {})", self.message, code),
            None => write!(f, "{} (no response)", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

/// 从响应体里提取约定的 `detail` 字段。
/// 响应体不是 JSON、或 `detail` 不是字符串时返回 None。
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(|d| d.as_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_is_extracted() {
        let err = ApiError::from_status_body(400, r#"{"detail": "Email already registered"}"#);
        assert_eq!(err.message, "Email already registered");
        assert_eq!(err.status, Some(400));
    }

    #[test]
    fn non_json_body_falls_back_to_generic_message() {
        let err = ApiError::from_status_body(502, "<html>Bad Gateway</html>");
        assert_eq!(err.message, "Request failed with status 502");
    }

    #[test]
    fn non_string_detail_falls_back() {
        let err = ApiError::from_status_body(422, r#"{"detail": [{"loc": ["email"]}]}"#);
        assert_eq!(err.message, "Request failed with status 422");
    }

    #[test]
    fn retryable_classification() {
        assert!(ApiError::network("timeout").is_retryable());
        assert!(ApiError::from_status_body(500, "").is_retryable());
        assert!(ApiError::from_status_body(503, "").is_retryable());
        assert!(!ApiError::from_status_body(401, "").is_retryable());
        assert!(!ApiError::from_status_body(403, "").is_retryable());
        assert!(!ApiError::from_status_body(404, "").is_retryable());
    }

    #[test]
    fn status_helpers() {
        assert!(ApiError::from_status_body(401, "").is_unauthorized());
        assert!(ApiError::from_status_body(403, "").is_forbidden());
        assert!(ApiError::from_status_body(404, "").is_not_found());
    }
}
