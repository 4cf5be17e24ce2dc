use crate::api::JobsApi;
use crate::auth::{AuthGate, TokenStore};
use crate::clients::{JobDetailsClient, JobSearchClient};
use crate::domain::Navigation;
use crate::framework::FrameworkError;
use crate::login::LoginForm;
use crate::{job_details, job_search};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The runtime orchestrator of the job board client.
///
/// `JobBoard` is responsible for:
/// - **Dependency Wiring**: one token store and one API shared by every screen
/// - **Lifecycle Management**: spawning a controller actor per opened screen
///   and waiting for all of them on shutdown
///
/// # Example
///
/// ```ignore
/// let mut board = JobBoard::new(api, store);
/// board.login_form().submit(credentials).await?;
///
/// let search = board.open_job_search();
/// search.initialize().await?;
/// // ... use the screen ...
///
/// drop(search);
/// board.shutdown().await?;
/// ```
pub struct JobBoard {
    api: Arc<dyn JobsApi>,
    store: Arc<dyn TokenStore>,
    gate: AuthGate,

    /// Task handles for all running controllers (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl JobBoard {
    pub fn new(api: Arc<dyn JobsApi>, store: Arc<dyn TokenStore>) -> Self {
        Self {
            gate: AuthGate::new(store.clone()),
            api,
            store,
            handles: Vec::new(),
        }
    }

    pub fn gate(&self) -> &AuthGate {
        &self.gate
    }

    pub fn login_form(&self) -> LoginForm {
        LoginForm::new(self.api.clone(), self.store.clone())
    }

    /// Protected home route.
    pub fn home(&self) -> Navigation {
        self.gate.check()
    }

    /// The home view's "Find Jobs" action.
    pub fn find_jobs(&self) -> Navigation {
        match self.gate.check() {
            Navigation::Stay => Navigation::Jobs,
            redirect => redirect,
        }
    }

    /// Spawns a job search controller and returns its client.
    pub fn open_job_search(&mut self) -> JobSearchClient {
        let (actor, client) = job_search::new(self.gate.clone(), self.api.clone());
        self.handles.push(tokio::spawn(actor.run()));
        client
    }

    /// Spawns a job details controller and returns its client.
    pub fn open_job_details(&mut self) -> JobDetailsClient {
        let (actor, client) = job_details::new(self.gate.clone(), self.api.clone());
        self.handles.push(tokio::spawn(actor.run()));
        client
    }

    /// Gracefully shuts down every controller this board spawned.
    ///
    /// A controller stops once all of its clients are dropped, so callers must
    /// drop the clients they were handed before awaiting this. Fetches still in
    /// flight at that point are cancelled, not awaited.
    pub async fn shutdown(self) -> Result<(), FrameworkError> {
        info!(controllers = self.handles.len(), "Shutting down job board...");

        for handle in self.handles {
            // If the task panicked, this will return an Err
            if let Err(e) = handle.await {
                error!("Controller task failed: {:?}", e);
                return Err(FrameworkError::TaskFailed(e.to_string()));
            }
        }

        info!("Job board shutdown complete.");
        Ok(())
    }
}
