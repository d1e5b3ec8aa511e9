//! HTTP client helpers for tests.

use rerank::gateway::{HealthResponse, ReadyResponse};
use rerank::{RankedDocument, ScoredDocument};
use serde::Serialize;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    pub async fn rerank(
        &self,
        query: &str,
        documents: &[&str],
    ) -> Result<Vec<ScoredDocument>, TestClientError> {
        let body = serde_json::json!({ "query": query, "documents": documents });
        self.post_json("/rerank", &body).await
    }

    pub async fn rerank_top(
        &self,
        query: &str,
        documents: &[&str],
        top_k: usize,
    ) -> Result<Vec<RankedDocument>, TestClientError> {
        let body = serde_json::json!({ "query": query, "documents": documents, "top_k": top_k });
        self.post_json("/rerank/top", &body).await
    }

    /// Posts an arbitrary body and returns the raw status code.
    pub async fn post_raw(&self, path: &str, body: &serde_json::Value) -> Result<u16, TestClientError> {
        let resp = self.client.post(self.url(path)).json(body).send().await?;
        Ok(resp.status().as_u16())
    }

    /// Posts an arbitrary body, optionally without a content type.
    pub async fn post_text(
        &self,
        path: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> Result<u16, TestClientError> {
        let mut request = self.client.post(self.url(path)).body(body.to_string());
        if let Some(content_type) = content_type {
            request = request.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        Ok(request.send().await?.status().as_u16())
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, TestClientError>
    where
        B: Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let resp = self.client.post(self.url(path)).json(body).send().await?;

        match resp.status().as_u16() {
            200 => Ok(resp.json().await?),
            422 => Err(TestClientError::InvalidRequest(resp.text().await?)),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/healthz")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }

    pub async fn ready(&self) -> Result<ReadyResponse, TestClientError> {
        let resp = self.client.get(self.url("/ready")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0} - Body: {1}")]
    UnexpectedStatus(u16, String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
