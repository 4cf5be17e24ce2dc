//! Commands and completions of the job search screen.

use crate::api::ApiError;
use crate::domain::{EmploymentType, JobId, JobSummary, Profile, SalaryRange};
use crate::framework::Ticket;

/// User intents on the search screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCommand {
    /// Gate check, then load profile and job list together.
    Initialize,
    SetSearchQuery(String),
    ToggleEmploymentType {
        employment_type: EmploymentType,
        included: bool,
    },
    SetSalaryRange(SalaryRange),
    /// Re-issue whichever fetches are currently failed.
    Retry,
    SelectJob(JobId),
}

/// Results of fetches issued by the search controller.
#[derive(Debug)]
pub enum SearchCompletion {
    Profile(Ticket, Result<Profile, ApiError>),
    Jobs(Ticket, Result<Vec<JobSummary>, ApiError>),
}
