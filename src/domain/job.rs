//! Job postings as the controllers see them.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for a job posting.
///
/// Opaque to the client: it comes from the server in a [`JobSummary`] and
/// travels back in the `/jobs/:jobId` path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the job list.
///
/// `package_per_annum` is absent for entries of the similar-jobs list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub company_logo_url: String,
    pub location: String,
    pub employment_type: String,
    pub package_per_annum: Option<String>,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeAtCompany {
    pub description: String,
    pub image_url: String,
}

/// Full posting: the summary fields plus skills and company details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetails {
    pub summary: JobSummary,
    /// Server order, never re-sorted.
    pub skills: Vec<Skill>,
    /// Some postings carry no company section.
    pub life_at_company: Option<LifeAtCompany>,
    pub company_website_url: String,
}

/// Payload of `GET /jobs/:jobId`: the posting and its related postings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetailsPage {
    pub job: JobDetails,
    /// Server order, never re-sorted.
    pub similar_jobs: Vec<JobSummary>,
}
