//! Commands and completions of the job details screen.

use crate::api::ApiError;
use crate::domain::{JobDetailsPage, JobId};
use crate::framework::Ticket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsCommand {
    /// Load the posting named by the route.
    Initialize(JobId),
    Retry,
    GoBack,
}

#[derive(Debug)]
pub enum DetailsCompletion {
    Detail(Ticket, Result<JobDetailsPage, ApiError>),
}
