// src/core/service_client.rs
//! HTTP client for the jobs API - JSON over HTTPS, bearer auth on everything but login

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, trace};

use crate::error::ApiError;
use crate::filters::JobQuery;
use crate::types::response::{
    JobDetailsResponse, JobsResponse, LoginErrorResponse, LoginRequest, LoginResponse,
    ProfileResponse,
};
use crate::types::{JobDetailsPayload, JobSummary, Profile};

const LOGIN_ENDPOINT: &str = "/login";
const PROFILE_ENDPOINT: &str = "/profile";
const JOBS_ENDPOINT: &str = "/jobs";
const JOBS_SEGMENT: &str = "jobs";

/// Operations the screens need from the backend.
#[async_trait]
pub trait JobsApi: Send + Sync {
    /// Exchange credentials for a bearer token
    async fn login(&self, credentials: &LoginRequest) -> Result<String, ApiError>;

    async fn profile(&self, token: &str) -> Result<Profile, ApiError>;

    async fn jobs(&self, token: &str, query: &JobQuery) -> Result<Vec<JobSummary>, ApiError>;

    async fn job_details(&self, token: &str, job_id: &str) -> Result<JobDetailsPayload, ApiError>;
}

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
    base: Url,
}

impl ServiceClient {
    /// Create new service client. No timeout unless one is configured.
    pub fn new(base_url: &str, timeout_seconds: Option<u64>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        let base_url = base_url.trim_end_matches('/').to_string();
        let base = Url::parse(&base_url)
            .with_context(|| format!("Invalid API base URL: {}", base_url))?;
        if base.cannot_be_a_base() {
            bail!("API base URL cannot carry a path: {}", base_url);
        }

        Ok(Self {
            client,
            base_url,
            base,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// `<base>/jobs/<id>` with the id percent-encoded as a single segment
    fn job_url(&self, job_id: &str) -> Result<Url, ApiError> {
        // the url crate silently drops dot segments
        if job_id.is_empty() || job_id == "." || job_id == ".." {
            return Err(ApiError::InvalidRequest(format!("job id {:?}", job_id)));
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidRequest(format!("base URL {}", self.base)))?
            .pop_if_empty()
            .push(JOBS_SEGMENT)
            .push(job_id);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            ApiError::from(e)
        })?;
        trace!("Response status from {}: {}", url, response.status());
        Ok(response)
    }

    /// Authenticated GET returning a decoded 2xx body
    async fn get_authorized<R>(
        &self,
        url: &str,
        token: &str,
        query: Option<&JobQuery>,
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let mut request = self.client.get(url).bearer_auth(token);
        if let Some(query) = query {
            request = request.query(&query.to_pairs());
        }

        let response = self.send(request, url).await?;
        let status = response.status();
        if status.is_success() {
            response.json::<R>().await.map_err(|e| {
                error!("Failed to parse response from {}: {}", url, e);
                ApiError::Decode(e.to_string())
            })
        } else {
            Err(status_error(status, response).await)
        }
    }
}

async fn status_error(status: StatusCode, response: Response) -> ApiError {
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    error!("Jobs API error {}: {}", status, body);
    ApiError::Status {
        status: status.as_u16(),
        body,
    }
}

#[async_trait]
impl JobsApi for ServiceClient {
    async fn login(&self, credentials: &LoginRequest) -> Result<String, ApiError> {
        let url = self.url(LOGIN_ENDPOINT);
        info!("Logging in as {}", credentials.username);

        let response = self
            .send(self.client.post(&url).json(credentials), &url)
            .await?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        if status.is_success() {
            let login: LoginResponse =
                serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
            info!("Login succeeded for {}", credentials.username);
            Ok(login.jwt_token)
        } else {
            match serde_json::from_str::<LoginErrorResponse>(&body) {
                Ok(rejection) => {
                    info!("Login rejected: {}", rejection.error_msg);
                    Err(ApiError::Rejected(rejection.error_msg))
                }
                Err(_) => {
                    error!("Login failed with status {}: {}", status, body);
                    Err(ApiError::Status {
                        status: status.as_u16(),
                        body,
                    })
                }
            }
        }
    }

    async fn profile(&self, token: &str) -> Result<Profile, ApiError> {
        let url = self.url(PROFILE_ENDPOINT);
        debug!("Fetching profile: {}", url);
        let response: ProfileResponse = self.get_authorized(&url, token, None).await?;
        Ok(response.profile_details)
    }

    async fn jobs(&self, token: &str, query: &JobQuery) -> Result<Vec<JobSummary>, ApiError> {
        let url = self.url(JOBS_ENDPOINT);
        debug!("Fetching jobs: {} {:?}", url, query);
        let response: JobsResponse = self.get_authorized(&url, token, Some(query)).await?;
        info!("Fetched {} jobs", response.jobs.len());
        Ok(response.jobs)
    }

    async fn job_details(&self, token: &str, job_id: &str) -> Result<JobDetailsPayload, ApiError> {
        let url = self.job_url(job_id)?;
        debug!("Fetching job details: {}", url);
        let response: JobDetailsResponse =
            self.get_authorized(url.as_str(), token, None).await?;
        Ok(JobDetailsPayload {
            job: response.job_details,
            similar_jobs: response.similar_jobs,
        })
    }
}
