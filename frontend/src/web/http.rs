//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 替代 `gloo-net`，提供简洁的 HTTP 客户端接口。
//! 支持 JSON 与 multipart（FormData）两种请求体。

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, Response};

/// HTTP 请求方法
#[derive(Debug, Clone, Copy)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// HTTP 错误类型
#[derive(Debug)]
pub enum HttpError {
    /// 请求构建失败
    RequestBuildFailed(String),
    /// 网络请求失败
    NetworkError(String),
    /// 响应解析失败
    ResponseParseFailed(String),
}

impl core::fmt::Display for HttpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HttpError::RequestBuildFailed(msg) => write!(f, "Failed to build request: {}", msg),
            HttpError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            HttpError::ResponseParseFailed(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

/// 请求体：JSON 字符串或浏览器原生 FormData
enum Body {
    Text(String),
    Form(FormData),
}

/// HTTP 响应封装
pub struct HttpResponse {
    inner: Response,
}

impl HttpResponse {
    /// 获取 HTTP 状态码
    pub fn status(&self) -> u16 {
        self.inner.status()
    }

    /// 检查响应是否成功 (2xx)
    pub fn ok(&self) -> bool {
        self.inner.ok()
    }

    /// 获取响应体文本
    pub async fn text(self) -> Result<String, HttpError> {
        let promise = self
            .inner
            .text()
            .map_err(|e| HttpError::ResponseParseFailed(format!("{:?}", e)))?;

        let text = JsFuture::from(promise)
            .await
            .map_err(|e| HttpError::ResponseParseFailed(format!("{:?}", e)))?;

        text.as_string()
            .ok_or_else(|| HttpError::ResponseParseFailed("body is not a string".to_string()))
    }

    /// 响应体按 JSON 反序列化
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, HttpError> {
        let text = self.text().await?;
        serde_json::from_str(&text).map_err(|e| HttpError::ResponseParseFailed(e.to_string()))
    }
}

/// HTTP 请求构建器
pub struct HttpRequestBuilder {
    url: String,
    method: HttpMethod,
    headers: Vec<(String, String)>,
    body: Option<Body>,
}

impl HttpRequestBuilder {
    fn new(url: String, method: HttpMethod) -> Self {
        Self {
            url,
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    /// 添加请求头
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    /// 附加 Bearer 凭据
    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", &format!("Bearer {}", token))
    }

    /// 设置 JSON 请求体（自动带 Content-Type）
    pub fn json<T: Serialize>(mut self, payload: &T) -> Result<Self, HttpError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| HttpError::RequestBuildFailed(e.to_string()))?;
        self.body = Some(Body::Text(body));
        Ok(self.header("Content-Type", "application/json"))
    }

    /// 设置 multipart 请求体。
    /// 不手动设置 Content-Type，浏览器会自动生成 boundary。
    pub fn form(mut self, form: FormData) -> Self {
        self.body = Some(Body::Form(form));
        self
    }

    /// 发送请求
    pub async fn send(self) -> Result<HttpResponse, HttpError> {
        let headers = Headers::new()
            .map_err(|e| HttpError::RequestBuildFailed(format!("Headers::new: {:?}", e)))?;

        for (key, value) in &self.headers {
            headers
                .set(key, value)
                .map_err(|e| HttpError::RequestBuildFailed(format!("Headers::set: {:?}", e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(self.method.as_str());
        opts.set_headers(&headers.into());

        match &self.body {
            Some(Body::Text(body)) => opts.set_body(&JsValue::from_str(body)),
            Some(Body::Form(form)) => opts.set_body(form.as_ref()),
            None => {}
        }

        let request = Request::new_with_str_and_init(&self.url, &opts)
            .map_err(|e| HttpError::RequestBuildFailed(format!("{:?}", e)))?;

        let window = web_sys::window()
            .ok_or_else(|| HttpError::NetworkError("no window object".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| HttpError::NetworkError(format!("{:?}", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| HttpError::ResponseParseFailed(format!("not a Response: {:?}", e)))?;

        Ok(HttpResponse { inner: response })
    }
}

/// 轻量级 HTTP 客户端
pub struct HttpClient;

impl HttpClient {
    /// 创建指定方法的请求
    pub fn request(method: HttpMethod, url: &str) -> HttpRequestBuilder {
        HttpRequestBuilder::new(url.to_string(), method)
    }
}
