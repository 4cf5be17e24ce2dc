//! Controller implementation for the job search screen.

use super::actions::{SearchCommand, SearchCompletion};
use super::view::JobSearchView;
use crate::api::JobsApi;
use crate::auth::{AuthGate, Token};
use crate::domain::{FilterState, JobSummary, Navigation, Profile};
use crate::framework::{Controller, FetchLifecycle, Fetcher, Settlement};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Owns the filter and the two fetch lifecycles of the search screen.
///
/// Filters only ever drive the job list. The profile is fetched on
/// initialize and on retry after its own failure.
pub struct JobSearchController {
    gate: AuthGate,
    api: Arc<dyn JobsApi>,
    filter: FilterState,
    profile: FetchLifecycle<Profile>,
    jobs: FetchLifecycle<Vec<JobSummary>>,
}

impl JobSearchController {
    pub fn new(gate: AuthGate, api: Arc<dyn JobsApi>) -> Self {
        Self {
            gate,
            api,
            filter: FilterState::new(),
            profile: FetchLifecycle::new(),
            jobs: FetchLifecycle::new(),
        }
    }

    fn issue_profile(&mut self, token: Token, fetcher: &mut Fetcher<SearchCompletion>) {
        let api = self.api.clone();
        let ticket = fetcher.run(
            &mut self.profile,
            async move { api.fetch_profile(&token).await },
            SearchCompletion::Profile,
        );
        debug!(%ticket, "Profile fetch issued");
    }

    fn issue_jobs(&mut self, token: Token, fetcher: &mut Fetcher<SearchCompletion>) {
        let api = self.api.clone();
        let query = self.filter.to_query();
        debug!(?query, "Job list fetch");
        let ticket = fetcher.run(
            &mut self.jobs,
            async move { api.fetch_jobs(&token, &query).await },
            SearchCompletion::Jobs,
        );
        debug!(%ticket, "Job list fetch issued");
    }

    /// Re-issues the job list after a filter change.
    fn refresh_jobs(&mut self, fetcher: &mut Fetcher<SearchCompletion>) -> Navigation {
        match self.gate.token() {
            Some(token) => {
                self.issue_jobs(token, fetcher);
                Navigation::Stay
            }
            None => {
                warn!("Token missing, job list not refreshed");
                Navigation::RedirectToLogin
            }
        }
    }
}

impl Controller for JobSearchController {
    type Command = SearchCommand;
    type Completion = SearchCompletion;
    type View = JobSearchView;

    fn handle_command(&mut self, command: SearchCommand, fetcher: &mut Fetcher<SearchCompletion>) -> Navigation {
        match command {
            SearchCommand::Initialize => {
                let Some(token) = self.gate.token() else {
                    info!("Not authenticated, redirecting to login");
                    return Navigation::RedirectToLogin;
                };
                self.issue_profile(token.clone(), fetcher);
                self.issue_jobs(token, fetcher);
                Navigation::Stay
            }
            SearchCommand::SetSearchQuery(text) => {
                self.filter.set_search_query(text);
                self.refresh_jobs(fetcher)
            }
            SearchCommand::ToggleEmploymentType {
                employment_type,
                included,
            } => {
                self.filter.toggle_employment_type(employment_type, included);
                self.refresh_jobs(fetcher)
            }
            SearchCommand::SetSalaryRange(range) => {
                self.filter.set_salary_range(range);
                self.refresh_jobs(fetcher)
            }
            SearchCommand::Retry => {
                let retry_profile = self.profile.is_error();
                let retry_jobs = self.jobs.is_error();
                if !retry_profile && !retry_jobs {
                    return Navigation::Stay;
                }
                let Some(token) = self.gate.token() else {
                    return Navigation::RedirectToLogin;
                };
                if retry_profile {
                    self.issue_profile(token.clone(), fetcher);
                }
                if retry_jobs {
                    self.issue_jobs(token, fetcher);
                }
                Navigation::Stay
            }
            SearchCommand::SelectJob(job_id) => Navigation::JobDetails(job_id),
        }
    }

    fn handle_completion(&mut self, completion: SearchCompletion) {
        match completion {
            SearchCompletion::Profile(ticket, result) => {
                if let Err(error) = &result {
                    warn!(%ticket, %error, "Profile fetch failed");
                }
                if self.profile.settle(ticket, result) == Settlement::Applied {
                    info!(%ticket, status = ?self.profile.status(), "Profile settled");
                }
            }
            SearchCompletion::Jobs(ticket, result) => {
                match &result {
                    Ok(jobs) => debug!(%ticket, count = jobs.len(), "Job list received"),
                    Err(error) => warn!(%ticket, %error, "Job list fetch failed"),
                }
                if self.jobs.settle(ticket, result) == Settlement::Applied {
                    info!(%ticket, status = ?self.jobs.status(), "Job list settled");
                }
            }
        }
    }

    fn view(&self) -> JobSearchView {
        JobSearchView {
            authenticated: self.gate.can_enter(),
            filter: self.filter.clone(),
            profile: self.profile.clone(),
            jobs: self.jobs.clone(),
        }
    }
}
