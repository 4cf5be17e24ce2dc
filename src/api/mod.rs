//! # Jobs API
//!
//! The network boundary of the client. Controllers talk to the [`JobsApi`]
//! trait only; [`HttpJobsApi`] is the `reqwest` implementation and [`mock`]
//! provides the in-memory ones used by tests.
//!
//! ## Endpoints
//!
//! | Method | Path | Auth | Success body |
//! |--------|------|------|--------------|
//! | `POST` | `/login` | none | `{jwt_token}` |
//! | `GET` | `/profile` | Bearer | `{profile_details}` |
//! | `GET` | `/jobs?employment_type=&minimum_package=&search=` | Bearer | `{jobs}` |
//! | `GET` | `/jobs/:jobId` | Bearer | `{job_details, similar_jobs}` |
//!
//! Any non-2xx status or transport failure is an [`ApiError`]. Only `/login`
//! failures carry a structured body (`{error_msg}`).

pub mod dto;
pub mod error;
pub mod http;
pub mod mock;

pub use error::*;
pub use http::*;

use crate::auth::Token;
use crate::domain::{JobDetailsPage, JobId, JobQuery, JobSummary, Profile};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://apis.ccbp.in/";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Username/password pair posted to `/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Where and how to reach the API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        Self { base_url, timeout }
    }
}

/// The remote job board.
///
/// Every method except [`JobsApi::login`] takes the bearer token explicitly:
/// the caller reads it from the gate at issuance time.
#[async_trait]
pub trait JobsApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<Token, ApiError>;

    async fn fetch_profile(&self, token: &Token) -> Result<Profile, ApiError>;

    async fn fetch_jobs(&self, token: &Token, query: &JobQuery) -> Result<Vec<JobSummary>, ApiError>;

    async fn fetch_job_details(&self, token: &Token, job_id: &JobId) -> Result<JobDetailsPage, ApiError>;
}
