// storefront-client/src/http/mod.rs
// HTTP 传输层 - trait 与实现

mod network;
#[cfg(feature = "in-process")]
mod oneshot;

pub use network::NetworkHttpClient;
#[cfg(feature = "in-process")]
pub use oneshot::OneshotHttpClient;

use crate::ClientResult;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Query parameters in send order; repeated keys are allowed
pub type QueryParams = Vec<(String, String)>;

/// File sent as the `file` field of a multipart upload
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// HTTP 客户端 trait
///
/// Paths are relative to the API prefix (e.g. `"catalog/products"`).
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get_query<T: DeserializeOwned>(&self, path: &str, query: &[(String, String)])
        -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    /// POST without body; the response body is ignored
    async fn post_empty(&self, path: &str) -> ClientResult<()>;
    /// DELETE; the response body is ignored
    async fn delete(&self, path: &str) -> ClientResult<()>;
    /// DELETE for endpoints that answer with the updated resource
    async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post_file<T: DeserializeOwned>(&self, path: &str, file: &FileUpload)
        -> ClientResult<T>;
    fn token(&self) -> Option<&str>;

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.get_query(path, &[]).await
    }
}

/// Percent-encode one path segment (slugs and ids)
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Encode query parameters as `k=v&k=v`
pub(crate) fn encode_query(query: &[(String, String)]) -> String {
    query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
