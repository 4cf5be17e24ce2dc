//! Controller implementation for the job details screen.

use super::actions::{DetailsCommand, DetailsCompletion};
use super::view::JobDetailsView;
use crate::api::JobsApi;
use crate::auth::AuthGate;
use crate::domain::{JobDetailsPage, JobId, Navigation};
use crate::framework::{Controller, FetchLifecycle, Fetcher, Settlement};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct JobDetailsController {
    gate: AuthGate,
    api: Arc<dyn JobsApi>,
    job_id: Option<JobId>,
    detail: FetchLifecycle<JobDetailsPage>,
}

impl JobDetailsController {
    pub fn new(gate: AuthGate, api: Arc<dyn JobsApi>) -> Self {
        Self {
            gate,
            api,
            job_id: None,
            detail: FetchLifecycle::new(),
        }
    }

    fn issue_detail(&mut self, job_id: JobId, fetcher: &mut Fetcher<DetailsCompletion>) -> Navigation {
        let Some(token) = self.gate.token() else {
            info!("Not authenticated, redirecting to login");
            return Navigation::RedirectToLogin;
        };
        let api = self.api.clone();
        let ticket = fetcher.run(
            &mut self.detail,
            async move { api.fetch_job_details(&token, &job_id).await },
            DetailsCompletion::Detail,
        );
        debug!(%ticket, "Job details fetch issued");
        Navigation::Stay
    }
}

impl Controller for JobDetailsController {
    type Command = DetailsCommand;
    type Completion = DetailsCompletion;
    type View = JobDetailsView;

    fn handle_command(&mut self, command: DetailsCommand, fetcher: &mut Fetcher<DetailsCompletion>) -> Navigation {
        match command {
            DetailsCommand::Initialize(job_id) => {
                self.job_id = Some(job_id.clone());
                self.issue_detail(job_id, fetcher)
            }
            DetailsCommand::Retry => match self.job_id.clone() {
                Some(job_id) if self.detail.is_error() => self.issue_detail(job_id, fetcher),
                _ => Navigation::Stay,
            },
            DetailsCommand::GoBack => Navigation::Back,
        }
    }

    fn handle_completion(&mut self, completion: DetailsCompletion) {
        let DetailsCompletion::Detail(ticket, result) = completion;
        match &result {
            Ok(page) => debug!(
                %ticket,
                skills = page.job.skills.len(),
                similar = page.similar_jobs.len(),
                "Job details received"
            ),
            Err(error) => warn!(%ticket, %error, "Job details fetch failed"),
        }
        if self.detail.settle(ticket, result) == Settlement::Applied {
            info!(%ticket, status = ?self.detail.status(), "Job details settled");
        }
    }

    fn view(&self) -> JobDetailsView {
        JobDetailsView {
            authenticated: self.gate.can_enter(),
            job_id: self.job_id.clone(),
            detail: self.detail.clone(),
        }
    }
}
