//! Centavo API client implementation

use std::num::NonZeroU32;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::{debug, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::api::{AuthApi, TransactionApi};
use super::models::{
    AuthResponse, CreateTransactionRequest, LoginRequest, RegisterRequest, Transaction,
    UploadReceiptResponse,
};
use crate::error::{ApiError, ConfigError, Result};
use crate::session::SessionStore;
use crate::token;

/// Path segment of the REST API on the configured host
const API_SEGMENT: &str = "api";

/// Client-side ceiling on request rate
const RATE_LIMIT_PER_SECOND: u32 = 10;

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Centavo API client
///
/// Reads the bearer token from the session store on every request, so a
/// login performed through one client is visible to the next call.
pub struct CentavoClient {
    http: HttpClient,
    base_url: Url,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    session: Arc<dyn SessionStore>,
}

impl CentavoClient {
    /// Create a client for `api_host` (e.g. `https://api.example.com`)
    pub fn new(api_host: &str, session: Arc<dyn SessionStore>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(
            NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN),
        );

        let mut base_url = Url::parse(api_host)
            .map_err(|e| ConfigError::Invalid(format!("API host '{}': {}", api_host, e)))?;
        base_url
            .path_segments_mut()
            .map_err(|_| ConfigError::Invalid(format!("API host '{}' cannot be a base URL", api_host)))?
            .pop_if_empty()
            .push(API_SEGMENT);

        Ok(Self {
            http,
            base_url,
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
            session,
        })
    }

    /// Base URL all endpoint paths are appended to
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Endpoint URL below the API base; each segment is percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // The base was checked to be a hierarchical URL in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.endpoint(segments);
        debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    /// Stored token, if it is still usable
    fn bearer_token(&self) -> Option<String> {
        match self.session.token() {
            Ok(Some(token)) if !token::is_expired(&token) => Some(token),
            Ok(Some(_)) => {
                debug!("Stored token is expired; sending request without credentials");
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Could not read session store: {}", e);
                None
            }
        }
    }

    /// Send a request, attaching the bearer token when `authorized`.
    ///
    /// A 401 answered to a request that carried a token ends the session.
    async fn execute(&self, builder: RequestBuilder, authorized: bool) -> Result<Response> {
        self.rate_limiter.until_ready().await;

        let token = if authorized { self.bearer_token() } else { None };
        let builder = match &token {
            Some(t) => builder.bearer_auth(t),
            None => builder,
        };

        let response = builder.send().await.map_err(ApiError::from)?;
        debug!("Response status {}", response.status());

        if response.status() == StatusCode::UNAUTHORIZED && token.is_some() {
            warn!("Server rejected the stored token; clearing session");
            if let Err(e) = self.session.clear() {
                warn!("Failed to clear session store: {}", e);
            }
        }

        Ok(response)
    }

    /// Decode a successful JSON body or map the failure status
    async fn json_or_error<T: DeserializeOwned>(response: Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(status_error(response).await.into());
        }

        let data = response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;
        Ok(data)
    }

    async fn authenticate(&self, action: &str, body: &impl serde::Serialize) -> Result<AuthResponse> {
        let builder = self.request(Method::POST, &["auth", action]).json(body);
        let response = self.execute(builder, false).await?;

        match response.status() {
            status if status.is_success() => Self::json_or_error(response).await,
            StatusCode::BAD_REQUEST
            | StatusCode::UNAUTHORIZED
            | StatusCode::FORBIDDEN
            | StatusCode::CONFLICT
            | StatusCode::UNPROCESSABLE_ENTITY => {
                let body = response.text().await.unwrap_or_default();
                let message = if body.trim().is_empty() {
                    "The server rejected the credentials".to_string()
                } else {
                    body
                };
                Err(ApiError::AuthFailed(message).into())
            }
            _ => Err(status_error(response).await.into()),
        }
    }
}

/// An id usable as one path segment; dot segments would resolve elsewhere
fn transaction_segment(id: &str) -> Result<&str> {
    match id {
        "" | "." | ".." => Err(ApiError::NotFound(format!("Transaction '{}'", id)).into()),
        _ => Ok(id),
    }
}

/// Map a non-success response to an [`ApiError`]
async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => {
            let error_msg = response
                .text()
                .await
                .ok()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "Resource not found".to_string());
            ApiError::NotFound(error_msg)
        }
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60);
            ApiError::RateLimit(Duration::from_secs(retry_after))
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Bad request".to_string());
            ApiError::BadRequest(error_msg)
        }
        status if status.is_server_error() => {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| format!("Server error: {}", status));
            ApiError::ServerError(error_msg)
        }
        _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    }
}

/// Content type for an uploaded receipt, from its extension
fn receipt_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl AuthApi for CentavoClient {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        self.authenticate("register", request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.authenticate("login", request).await
    }
}

#[async_trait]
impl TransactionApi for CentavoClient {
    async fn create_transaction(&self, request: &CreateTransactionRequest) -> Result<Transaction> {
        let builder = self.request(Method::POST, &["transactions"]).json(request);
        let response = self.execute(builder, true).await?;
        Self::json_or_error(response).await
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let builder = self.request(Method::GET, &["transactions"]);
        let response = self.execute(builder, true).await?;
        let transactions: Option<Vec<Transaction>> = Self::json_or_error(response).await?;
        Ok(transactions.unwrap_or_default())
    }

    async fn get_transaction(&self, id: &str) -> Result<Transaction> {
        let builder = self.request(Method::GET, &["transactions", transaction_segment(id)?]);
        let response = self.execute(builder, true).await?;
        let transaction: Option<Transaction> = Self::json_or_error(response).await?;
        transaction.ok_or_else(|| ApiError::NotFound(format!("Transaction {}", id)).into())
    }

    async fn delete_transaction(&self, id: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, &["transactions", transaction_segment(id)?]);
        let response = self.execute(builder, true).await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(status_error(response).await.into())
        }
    }

    async fn transaction_reports(&self) -> Result<Vec<Transaction>> {
        let builder = self.request(Method::GET, &["transactions", "reports"]);
        let response = self.execute(builder, true).await?;
        let transactions: Option<Vec<Transaction>> = Self::json_or_error(response).await?;
        Ok(transactions.unwrap_or_default())
    }

    async fn upload_receipt(&self, file: &Path) -> Result<String> {
        let bytes = tokio::fs::read(file).await?;
        let file_name = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("receipt")
            .to_string();

        debug!("Uploading receipt {} ({} bytes)", file_name, bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(receipt_mime(file))
            .map_err(ApiError::from)?;
        let form = Form::new().part("file", part);

        let builder = self.request(Method::POST, &["transactions", "upload"]).multipart(form);
        let response = self.execute(builder, true).await?;
        let upload: UploadReceiptResponse = Self::json_or_error(response).await?;

        upload
            .secure_url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ApiError::InvalidResponse("No receipt URL returned".to_string()).into())
    }
}
