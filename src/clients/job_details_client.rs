use crate::clients::controller_handle::ControllerHandle;
use crate::domain::{JobId, Navigation};
use crate::framework::{ControllerClient, FrameworkError};
use crate::job_details::{DetailsCommand, JobDetailsController};
use tracing::{debug, instrument};

/// Client for interacting with the job details controller.
#[derive(Clone)]
pub struct JobDetailsClient {
    inner: ControllerClient<JobDetailsController>,
}

impl JobDetailsClient {
    pub fn new(inner: ControllerClient<JobDetailsController>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn initialize(&self, job_id: JobId) -> Result<Navigation, FrameworkError> {
        debug!("Sending request");
        self.inner.send(DetailsCommand::Initialize(job_id)).await
    }

    #[instrument(skip(self))]
    pub async fn retry(&self) -> Result<Navigation, FrameworkError> {
        debug!("Sending request");
        self.inner.send(DetailsCommand::Retry).await
    }

    #[instrument(skip(self))]
    pub async fn go_back(&self) -> Result<Navigation, FrameworkError> {
        debug!("Sending request");
        self.inner.send(DetailsCommand::GoBack).await
    }
}

impl ControllerHandle<JobDetailsController> for JobDetailsClient {
    fn inner(&self) -> &ControllerClient<JobDetailsController> {
        &self.inner
    }
}
