//! View-model of the job details screen.

use crate::domain::{JobDetailsPage, JobId};
use crate::framework::{FetchLifecycle, FetchState};

#[derive(Debug, Clone, PartialEq)]
pub struct JobDetailsView {
    pub authenticated: bool,
    /// `None` until the screen has been initialized with a route id.
    pub job_id: Option<JobId>,
    pub detail: FetchLifecycle<JobDetailsPage>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailsPanel<'a> {
    Loading,
    Failed,
    /// Posting, skills and similar jobs, in server order.
    Ready(&'a JobDetailsPage),
}

impl JobDetailsView {
    pub fn panel(&self) -> DetailsPanel<'_> {
        match self.detail.state() {
            FetchState::Idle | FetchState::Loading => DetailsPanel::Loading,
            FetchState::Error(_) => DetailsPanel::Failed,
            FetchState::Success(page) => DetailsPanel::Ready(page),
        }
    }
}
