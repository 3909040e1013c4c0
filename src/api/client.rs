use crate::api::errors::ApiError;
use crate::config::ApiConfig;
use crate::workflow::{ActionRequest, Job, User};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Backend operations the workflow controller depends on
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait JobsApi: Send + Sync {
    /// `GET /jobs/:id`
    async fn fetch_job(&self, job_id: &str) -> Result<Job, ApiError>;

    /// `GET /users`
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// `POST /jobs/:id/<action>` with the action's payload as body
    async fn submit_action(&self, job_id: &str, request: &ActionRequest) -> Result<(), ApiError>;
}

// The backend answers either with the bare record or wrapped in `data`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Bare(T),
    Wrapped { data: T },
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Bare(inner) | Envelope::Wrapped { data: inner } => inner,
        }
    }
}

/// `reqwest`-backed client for the field-operations REST API.
///
/// One request per call: no retry, no caching, no deduplication.
#[derive(Debug, Clone)]
pub struct HttpJobsApi {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpJobsApi {
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = Url::parse(trimmed)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base())
            .ok_or_else(|| ApiError::InvalidBaseUrl(trimmed.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url,
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(
            &config.base_url,
            config.token.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Appends percent-encoded path segments to the base URL.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // http(s) base URLs always have path segments
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: &Url) -> RequestBuilder {
        let builder = self.http.request(method, url.clone());
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, url: &Url) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // An unreadable body is treated as an empty one.
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::rejected(status.as_u16(), &body);
        warn!(url = %url, status = status.as_u16(), error = %err, "Request rejected");
        Err(err)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.url(segments);
        debug!(url = %url, "GET");

        let response = self.send(self.request(Method::GET, &url), &url).await?;
        let body = response.text().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_str::<Envelope<T>>(&body)
            .map(Envelope::into_inner)
            .map_err(|source| ApiError::Decode {
                url: url.to_string(),
                source,
            })
    }
}

#[async_trait]
impl JobsApi for HttpJobsApi {
    async fn fetch_job(&self, job_id: &str) -> Result<Job, ApiError> {
        self.get_json(&["jobs", job_id]).await
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json(&["users"]).await
    }

    async fn submit_action(&self, job_id: &str, request: &ActionRequest) -> Result<(), ApiError> {
        let url = self.url(&request.path_segments(job_id));
        debug!(url = %url, action = %request.kind(), "POST");

        self.send(self.request(Method::POST, &url).json(request), &url)
            .await?;
        Ok(())
    }
}
