// storefront-client/src/http/oneshot.rs
// Oneshot HTTP 客户端 - 内存通信
//
// 需要启用 "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::config::{DEFAULT_API_PREFIX, join_url};
use crate::{ClientError, ClientResult};

use super::{FileUpload, HttpClient, encode_query};

/// Oneshot HTTP 客户端 (内存调用)
///
/// Drives an axum `Router` directly through `tower::ServiceExt::oneshot`,
/// with the same error mapping as [`super::NetworkHttpClient`]. Suited to
/// embedding the backend in-process and to tests.
///
/// ```ignore
/// let router: Router = build_backend();
/// let client = OneshotHttpClient::new(router);
/// let health: serde_json::Value = client.get("health").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    prefix: String,
    token: Option<String>,
}

impl OneshotHttpClient {
    /// 创建新的 Oneshot HTTP 客户端
    pub fn new(router: Router) -> Self {
        Self {
            router,
            prefix: DEFAULT_API_PREFIX.to_string(),
            token: None,
        }
    }

    /// Override the API prefix routes are mounted under
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// 设置认证 token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn uri(&self, path: &str, query: &[(String, String)]) -> String {
        let path = join_url(&self.prefix, path);
        let path = if path.starts_with('/') { path } else { format!("/{}", path) };
        if query.is_empty() {
            path
        } else {
            format!("{}?{}", path, encode_query(query))
        }
    }

    /// 构建请求
    fn build_request(
        &self,
        method: Method,
        uri: String,
        content_type: Option<String>,
        body: Body,
    ) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = &self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    fn json_request<B: serde::Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let bytes = serde_json::to_vec(body)?;
        self.build_request(
            method,
            self.uri(path, &[]),
            Some("application/json".to_string()),
            Body::from(bytes),
        )
    }

    /// 执行请求, 返回成功响应的 body
    async fn execute(&self, request: Request<Body>) -> ClientResult<Vec<u8>> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes);
            return Err(ClientError::from_status(status, &text));
        }
        Ok(body_bytes.to_vec())
    }

    async fn execute_json<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let bytes = self.execute(request).await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }
}

/// Single-part `multipart/form-data` body carrying `file`
fn multipart_body(boundary: &str, file: &FileUpload) -> Vec<u8> {
    let mut body = Vec::with_capacity(file.bytes.len() + 256);
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            file.file_name.replace('"', "")
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", file.content_type).as_bytes());
    body.extend_from_slice(&file.bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
    body
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<T> {
        let request = self.build_request(Method::GET, self.uri(path, query), None, Body::empty())?;
        self.execute_json(request).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.json_request(Method::POST, path, body)?;
        self.execute_json(request).await
    }

    async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.json_request(Method::PATCH, path, body)?;
        self.execute_json(request).await
    }

    async fn post_empty(&self, path: &str) -> ClientResult<()> {
        let request = self.build_request(Method::POST, self.uri(path, &[]), None, Body::empty())?;
        self.execute(request).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = self.build_request(Method::DELETE, self.uri(path, &[]), None, Body::empty())?;
        self.execute(request).await?;
        Ok(())
    }

    async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::DELETE, self.uri(path, &[]), None, Body::empty())?;
        self.execute_json(request).await
    }

    async fn post_file<T: DeserializeOwned>(&self, path: &str, file: &FileUpload) -> ClientResult<T> {
        let boundary = format!("storefront-{}", uuid::Uuid::new_v4().simple());
        let body = multipart_body(&boundary, file);
        let request = self.build_request(
            Method::POST,
            self.uri(path, &[]),
            Some(format!("multipart/form-data; boundary={}", boundary)),
            Body::from(body),
        )?;
        self.execute_json(request).await
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
