//! Command-line and environment configuration.
//!
//! Connection settings fall back to environment variables so the same binary
//! can be pointed at a local stub server without flags:
//!
//! | Flag | Env | Default |
//! |------|-----|---------|
//! | `--base-url` | `JOBS_API_BASE_URL` | `https://apis.ccbp.in/` |
//! | `--timeout-secs` | `JOBS_REQUEST_TIMEOUT_SECS` | `30` |
//! | `--token-file` | `JOBS_TOKEN_FILE` | in-memory store |

use crate::api::{ApiConfig, Credentials, DEFAULT_BASE_URL};
use crate::domain::{EmploymentType, JobId, SalaryRange};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "jobs-cli", version, about = "Search the job board from the terminal")]
pub struct Config {
    /// API root the endpoints are resolved against
    #[arg(long, env = "JOBS_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Per-request timeout in seconds
    #[arg(long, env = "JOBS_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Persist the session token in this file instead of in memory
    #[arg(long, env = "JOBS_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,

    /// Log in as this user before searching
    #[arg(long, short)]
    pub username: Option<String>,

    #[arg(long, env = "JOBS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Free-text search
    #[arg(long, default_value = "")]
    pub search: String,

    /// Employment types, comma separated (FULLTIME,PARTTIME,FREELANCE,INTERNSHIP)
    #[arg(long = "employment-type", value_delimiter = ',')]
    pub employment_types: Vec<EmploymentType>,

    /// Minimum package id (1000000, 2000000, 3000000, 4000000)
    #[arg(long)]
    pub salary_range: Option<SalaryRange>,

    /// Show this posting; defaults to the first search result
    #[arg(long)]
    pub job_id: Option<String>,

    /// Clear the stored token and exit
    #[arg(long)]
    pub logout: bool,
}

impl Config {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.base_url.clone(), Duration::from_secs(self.timeout_secs))
    }

    /// Login credentials, when both halves were given.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(Credentials::new(username, password)),
            _ => None,
        }
    }

    pub fn job_id(&self) -> Option<JobId> {
        self.job_id.as_deref().map(JobId::from)
    }
}
