//! Reqwest-backed [`JobsApi`].
//!
//! Owns transport details only: URL building, bearer headers, timeout and
//! status mapping, and JSON decoding into domain types.

use super::dto::{
    JobDetailsEnvelopeDto, JobsEnvelopeDto, LoginFailureDto, LoginSuccessDto, ProfileEnvelopeDto,
};
use super::{ApiConfig, ApiError, Credentials, JobsApi};
use crate::auth::Token;
use crate::domain::{JobDetailsPage, JobId, JobQuery, JobSummary, Profile};
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

/// HTTP client for the job board.
#[derive(Debug, Clone)]
pub struct HttpJobsApi {
    client: Client,
    base_url: Url,
}

impl HttpJobsApi {
    /// Build a client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: with_trailing_slash(config.base_url.clone()),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Transport(format!("base URL cannot hold a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `GET` with a bearer token, decoding a 2xx JSON body into `D`.
    async fn get_json<D: DeserializeOwned>(&self, url: Url, token: &Token) -> Result<D, ApiError> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, token.bearer_header())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Request failed");
            return Err(map_status_error(status));
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        decode(&body)
    }
}

#[async_trait]
impl JobsApi for HttpJobsApi {
    #[instrument(skip(self))]
    async fn login(&self, credentials: &Credentials) -> Result<Token, ApiError> {
        let url = self.endpoint(&["login"])?;
        debug!(%url, "POST");
        let response = self
            .client
            .post(url)
            .json(credentials)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if status.is_success() {
            let success: LoginSuccessDto = decode(&body)?;
            return Ok(Token::new(success.jwt_token));
        }

        match serde_json::from_slice::<LoginFailureDto>(&body) {
            Ok(failure) => {
                warn!(status = status.as_u16(), error_msg = %failure.error_msg, "Login rejected");
                Err(ApiError::Rejected(failure.error_msg))
            }
            Err(_) => Err(map_status_error(status)),
        }
    }

    #[instrument(skip(self, token))]
    async fn fetch_profile(&self, token: &Token) -> Result<Profile, ApiError> {
        let url = self.endpoint(&["profile"])?;
        let envelope: ProfileEnvelopeDto = self.get_json(url, token).await?;
        Ok(envelope.profile_details.into())
    }

    #[instrument(skip(self, token))]
    async fn fetch_jobs(&self, token: &Token, query: &JobQuery) -> Result<Vec<JobSummary>, ApiError> {
        let mut url = self.endpoint(&["jobs"])?;
        url.set_query(Some(&query.query_string()));
        let envelope: JobsEnvelopeDto = self.get_json(url, token).await?;
        Ok(envelope.jobs.into_iter().map(JobSummary::from).collect())
    }

    #[instrument(skip(self, token))]
    async fn fetch_job_details(&self, token: &Token, job_id: &JobId) -> Result<JobDetailsPage, ApiError> {
        let url = self.endpoint(&["jobs", job_id.0.as_str()])?;
        let envelope: JobDetailsEnvelopeDto = self.get_json(url, token).await?;
        Ok(envelope.into())
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn decode<D: DeserializeOwned>(body: &[u8]) -> Result<D, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout(error.to_string())
    } else {
        ApiError::Transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode) -> ApiError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            ApiError::Timeout(format!("status {}", status.as_u16()))
        }
        _ => ApiError::Status {
            status: status.as_u16(),
        },
    }
}
