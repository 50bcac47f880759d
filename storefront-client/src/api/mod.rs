//! Typed endpoint wrappers
//!
//! `StorefrontClient` wraps any [`HttpClient`] and exposes one method per
//! backend endpoint. Catalog endpoints live in `catalog.rs`, admin endpoints
//! in `admin.rs`.

mod admin;
mod catalog;

use crate::http::{HttpClient, NetworkHttpClient};
use crate::{ClientConfig, ClientResult};

/// Health probe response (`GET /health`)
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Storefront API client over a pluggable transport
#[derive(Debug, Clone)]
pub struct StorefrontClient<C: HttpClient> {
    http: C,
}

impl StorefrontClient<NetworkHttpClient> {
    /// Network client built from configuration
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(NetworkHttpClient::new(config)?))
    }
}

impl<C: HttpClient> StorefrontClient<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// Underlying transport
    pub fn http(&self) -> &C {
        &self.http
    }

    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    /// `GET /health`
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        self.http.get("health").await
    }
}
