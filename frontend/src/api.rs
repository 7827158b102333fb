//! 类型化的后端 API 客户端
//!
//! 所有领域调用共用一条请求管线：出站自动附加 Bearer 令牌，
//! 入站统一处理 401（清会话 + 触发注入的回调，由路由层决定去向）。
//! 各方法只是"资源操作 -> 一次 HTTP 调用"的纯翻译，不含业务逻辑。

use std::sync::Arc;

use serde::de::DeserializeOwned;
use web_sys::FormData;

use cvalign_shared::error::ApiError;
use cvalign_shared::retry::{RetryPolicy, with_retry};
use cvalign_shared::{
    Company, CreateCompanyRequest, CreateJobRequest, CvUploadResponse, DEFAULT_API_URL,
    Evaluation, Job, LoginRequest, PasswordChangeRequest, PasswordResetConfirm,
    PasswordResetRequest, RegisterRequest, TokenResponse, User,
};

use crate::session::browser_session;
use crate::web::{HttpClient, HttpMethod, HttpRequestBuilder, HttpResponse, sleep};
use leptos::prelude::use_context;

/// API 根地址：编译期环境变量 `CVALIGN_API_URL`，缺省为本地开发后端
pub fn api_base_url() -> String {
    option_env!("CVALIGN_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

#[derive(Clone)]
pub struct CvAlignApi {
    base_url: String,
    /// 收到 401 时触发（除清存储外的反应交给外部，避免隐藏耦合）
    on_unauthorized: Arc<dyn Fn() + Send + Sync>,
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> CvAlignApi {
    use_context::<CvAlignApi>().expect("CvAlignApi should be provided")
}

impl CvAlignApi {
    pub fn new(base_url: String, on_unauthorized: Arc<dyn Fn() + Send + Sync>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            on_unauthorized,
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 出站拦截：有令牌就带上 Bearer 凭据
    fn request(&self, method: HttpMethod, path: &str) -> HttpRequestBuilder {
        let builder = HttpClient::request(method, &self.url(path));
        match browser_session().token() {
            Some(token) => builder.bearer(&token),
            None => builder,
        }
    }

    /// 入站拦截：401 全局下线；非 2xx 提取 `detail` 字段转为 ApiError
    async fn execute(&self, builder: HttpRequestBuilder) -> Result<HttpResponse, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        if status == 401 {
            web_sys::console::warn_1(&"[Api] 401 received, clearing session.".into());
            browser_session().clear();
            (self.on_unauthorized)();
        }

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status_body(status, &body));
        }
        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        builder: HttpRequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.execute(builder).await?;
        let status = response.status();
        response.json::<T>().await.map_err(|e| ApiError {
            status: Some(status),
            message: format!("Invalid response body: {}", e),
        })
    }

    async fn fetch_unit(&self, builder: HttpRequestBuilder) -> Result<(), ApiError> {
        self.execute(builder).await.map(|_| ())
    }

    fn json_body<T: serde::Serialize>(
        builder: HttpRequestBuilder,
        payload: &T,
    ) -> Result<HttpRequestBuilder, ApiError> {
        builder
            .json(payload)
            .map_err(|e| ApiError::network(e.to_string()))
    }

    // =========================================================
    // 认证 (auth)
    // =========================================================

    pub async fn login(&self, credentials: &LoginRequest) -> Result<TokenResponse, ApiError> {
        let builder = Self::json_body(self.request(HttpMethod::Post, "/auth/login"), credentials)?;
        self.fetch_json(builder).await
    }

    pub async fn register(&self, data: &RegisterRequest) -> Result<User, ApiError> {
        let builder = Self::json_body(self.request(HttpMethod::Post, "/auth/register"), data)?;
        self.fetch_json(builder).await
    }

    /// 当前登录用户的档案
    pub async fn me(&self) -> Result<User, ApiError> {
        self.fetch_json(self.request(HttpMethod::Get, "/auth/me")).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.fetch_unit(self.request(HttpMethod::Post, "/auth/logout")).await
    }

    pub async fn request_password_reset(
        &self,
        data: &PasswordResetRequest,
    ) -> Result<(), ApiError> {
        let builder = Self::json_body(
            self.request(HttpMethod::Post, "/auth/password-reset-request"),
            data,
        )?;
        self.fetch_unit(builder).await
    }

    pub async fn confirm_password_reset(
        &self,
        data: &PasswordResetConfirm,
    ) -> Result<(), ApiError> {
        let builder = Self::json_body(
            self.request(HttpMethod::Post, "/auth/password-reset-confirm"),
            data,
        )?;
        self.fetch_unit(builder).await
    }

    #[allow(dead_code)]
    pub async fn change_password(&self, data: &PasswordChangeRequest) -> Result<(), ApiError> {
        let builder = Self::json_body(
            self.request(HttpMethod::Post, "/auth/change-password"),
            data,
        )?;
        self.fetch_unit(builder).await
    }

    // =========================================================
    // 职位 (jobs)
    // =========================================================

    pub async fn jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.fetch_json(self.request(HttpMethod::Get, "/jobs")).await
    }

    pub async fn create_job(&self, data: &CreateJobRequest) -> Result<Job, ApiError> {
        let builder = Self::json_body(self.request(HttpMethod::Post, "/jobs"), data)?;
        self.fetch_json(builder).await
    }

    pub async fn job(&self, id: i64) -> Result<Job, ApiError> {
        self.fetch_json(self.request(HttpMethod::Get, &format!("/jobs/{}", id)))
            .await
    }

    /// 职位详情页的取数走统一重试策略：网络失败或 5xx 才重试
    pub async fn job_with_retry(&self, id: i64, policy: RetryPolicy) -> Result<Job, ApiError> {
        let api = self.clone();
        with_retry(
            policy,
            move || {
                let api = api.clone();
                async move { api.job(id).await }
            },
            sleep,
        )
        .await
    }

    #[allow(dead_code)]
    pub async fn update_job(&self, id: i64, data: &CreateJobRequest) -> Result<Job, ApiError> {
        let builder =
            Self::json_body(self.request(HttpMethod::Put, &format!("/jobs/{}", id)), data)?;
        self.fetch_json(builder).await
    }

    pub async fn delete_job(&self, id: i64) -> Result<(), ApiError> {
        self.fetch_unit(self.request(HttpMethod::Delete, &format!("/jobs/{}", id)))
            .await
    }

    // =========================================================
    // 评估 (evaluations)
    // =========================================================

    /// 上传 CV，multipart 单文件字段 `file`。
    /// 返回的是摘要，完整评估需随后按 id 拉取。
    pub async fn upload_cv(
        &self,
        job_id: i64,
        file: &web_sys::File,
    ) -> Result<CvUploadResponse, ApiError> {
        let form = FormData::new()
            .map_err(|_| ApiError::network("Could not build multipart form"))?;
        form.append_with_blob("file", file)
            .map_err(|_| ApiError::network("Could not attach file to form"))?;

        let builder = self
            .request(HttpMethod::Post, &format!("/evaluations/{}/upload", job_id))
            .form(form);
        self.fetch_json(builder).await
    }

    pub async fn evaluation(&self, id: i64) -> Result<Evaluation, ApiError> {
        self.fetch_json(self.request(HttpMethod::Get, &format!("/evaluations/{}", id)))
            .await
    }

    pub async fn job_candidates(&self, job_id: i64) -> Result<Vec<Evaluation>, ApiError> {
        self.fetch_json(self.request(
            HttpMethod::Get,
            &format!("/evaluations/job/{}/candidates", job_id),
        ))
        .await
    }

    pub async fn job_candidates_with_retry(
        &self,
        job_id: i64,
        policy: RetryPolicy,
    ) -> Result<Vec<Evaluation>, ApiError> {
        let api = self.clone();
        with_retry(
            policy,
            move || {
                let api = api.clone();
                async move { api.job_candidates(job_id).await }
            },
            sleep,
        )
        .await
    }

    pub async fn delete_evaluation(&self, id: i64) -> Result<(), ApiError> {
        self.fetch_unit(self.request(HttpMethod::Delete, &format!("/evaluations/{}", id)))
            .await
    }

    // =========================================================
    // 用户与公司 (users)
    // =========================================================

    #[allow(dead_code)]
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.fetch_json(self.request(HttpMethod::Get, "/users/me")).await
    }

    #[allow(dead_code)]
    pub async fn company_users(&self) -> Result<Vec<User>, ApiError> {
        self.fetch_json(self.request(HttpMethod::Get, "/users")).await
    }

    pub async fn companies(&self) -> Result<Vec<Company>, ApiError> {
        self.fetch_json(self.request(HttpMethod::Get, "/users/companies"))
            .await
    }

    #[allow(dead_code)]
    pub async fn create_company(&self, data: &CreateCompanyRequest) -> Result<Company, ApiError> {
        let builder = Self::json_body(self.request(HttpMethod::Post, "/users/companies"), data)?;
        self.fetch_json(builder).await
    }
}
