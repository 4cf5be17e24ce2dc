use crate::clients::controller_handle::ControllerHandle;
use crate::domain::{EmploymentType, JobId, Navigation, SalaryRange};
use crate::framework::{ControllerClient, FrameworkError};
use crate::job_search::{JobSearchController, SearchCommand};
use tracing::{debug, instrument};

/// Client for interacting with the job search controller.
#[derive(Clone)]
pub struct JobSearchClient {
    inner: ControllerClient<JobSearchController>,
}

impl JobSearchClient {
    pub fn new(inner: ControllerClient<JobSearchController>) -> Self {
        Self { inner }
    }

    /// Mounts the screen: redirects when signed out, otherwise loads profile and jobs.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> Result<Navigation, FrameworkError> {
        debug!("Sending request");
        self.inner.send(SearchCommand::Initialize).await
    }

    #[instrument(skip(self))]
    pub async fn set_search_query(&self, text: &str) -> Result<Navigation, FrameworkError> {
        debug!("Sending request");
        self.inner.send(SearchCommand::SetSearchQuery(text.to_string())).await
    }

    #[instrument(skip(self))]
    pub async fn toggle_employment_type(
        &self,
        employment_type: EmploymentType,
        included: bool,
    ) -> Result<Navigation, FrameworkError> {
        debug!("Sending request");
        self.inner
            .send(SearchCommand::ToggleEmploymentType {
                employment_type,
                included,
            })
            .await
    }

    #[instrument(skip(self))]
    pub async fn set_salary_range(&self, range: SalaryRange) -> Result<Navigation, FrameworkError> {
        debug!("Sending request");
        self.inner.send(SearchCommand::SetSalaryRange(range)).await
    }

    #[instrument(skip(self))]
    pub async fn retry(&self) -> Result<Navigation, FrameworkError> {
        debug!("Sending request");
        self.inner.send(SearchCommand::Retry).await
    }

    #[instrument(skip(self))]
    pub async fn select_job(&self, job_id: JobId) -> Result<Navigation, FrameworkError> {
        self.inner.send(SearchCommand::SelectJob(job_id)).await
    }
}

impl ControllerHandle<JobSearchController> for JobSearchClient {
    fn inner(&self) -> &ControllerClient<JobSearchController> {
        &self.inner
    }
}
