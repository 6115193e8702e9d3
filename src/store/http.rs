//! HTTP implementation of the document store client.
//!
//! Talks to the hosted document service's REST surface:
//!
//! - `GET    {base}/collections/{name}/documents`       - list all
//! - `POST   {base}/collections/{name}/documents`       - create, returns id
//! - `PATCH  {base}/collections/{name}/documents/{id}`  - partial update
//!
//! The session's bearer token is attached when one exists. The store's own
//! consistency model governs concurrent writers; this client issues one
//! request at a time and never retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::{Document, DocumentStore};
use crate::domain::ToolFields;
use crate::error::{Result, TroveError};

/// Default hosted store endpoint.
const DEFAULT_BASE_URL: &str = "https://docstore.trove.dev/v1";

/// Default collection holding tool records.
const DEFAULT_COLLECTION: &str = "tools";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the HTTP store client.
#[derive(Debug, Clone)]
pub struct HttpStoreConfig {
    pub base_url: String,
    pub collection: String,
    pub timeout: Duration,
}

impl Default for HttpStoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HttpStoreConfig {
    /// Create a config for a specific collection.
    pub fn with_collection(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            ..Default::default()
        }
    }
}

/// Response body of a successful create.
#[derive(Debug, Deserialize)]
struct CreateResponse {
    id: String,
}

/// Response body of a list request.
#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    documents: Vec<Document>,
}

/// HTTP document store client.
pub struct HttpStore {
    client: Client,
    config: HttpStoreConfig,
    token: Option<String>,
}

impl HttpStore {
    /// Create a new client. `token` is the externally-issued session token,
    /// if the user is signed in.
    pub fn new(config: HttpStoreConfig, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TroveError::Store(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            token,
        })
    }

    /// URL of the collection's documents endpoint.
    fn documents_url(&self) -> String {
        format!(
            "{}/collections/{}/documents",
            self.config.base_url.trim_end_matches('/'),
            self.config.collection
        )
    }

    /// URL of one document.
    fn document_url(&self, id: &str) -> String {
        format!("{}/{}", self.documents_url(), id)
    }

    /// Attach the bearer token when signed in.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Map a non-success status to a store error, reading the body for context.
    async fn check(response: reqwest::Response, id: Option<&str>) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND
            && let Some(id) = id
        {
            return Err(TroveError::DocumentNotFound(id.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        Err(TroveError::Store(format!(
            "store returned {}: {}",
            status, body
        )))
    }
}

#[async_trait]
impl DocumentStore for HttpStore {
    async fn list(&self) -> Result<Vec<Document>> {
        let request = self.authorize(self.client.get(self.documents_url()));
        let response = request
            .send()
            .await
            .map_err(|e| TroveError::Store(format!("list request failed: {}", e)))?;
        let response = Self::check(response, None).await?;

        let body: ListResponse = response
            .json()
            .await
            .map_err(|e| TroveError::Store(format!("invalid list response: {}", e)))?;
        Ok(body.documents)
    }

    async fn create(&self, fields: &ToolFields) -> Result<String> {
        let body = serde_json::json!({ "fields": fields });
        let request = self.authorize(self.client.post(self.documents_url()).json(&body));
        let response = request
            .send()
            .await
            .map_err(|e| TroveError::Store(format!("create request failed: {}", e)))?;
        let response = Self::check(response, None).await?;

        let created: CreateResponse = response
            .json()
            .await
            .map_err(|e| TroveError::Store(format!("invalid create response: {}", e)))?;
        Ok(created.id)
    }

    async fn patch(&self, id: &str, fields: &ToolFields) -> Result<()> {
        let body = serde_json::json!({ "fields": fields });
        let request = self.authorize(self.client.patch(self.document_url(id)).json(&body));
        let response = request
            .send()
            .await
            .map_err(|e| TroveError::Store(format!("patch request failed: {}", e)))?;
        Self::check(response, Some(id)).await?;
        Ok(())
    }
}
