//! Job search screen: filters, profile card and job list.

pub mod actions;
pub mod controller;
pub mod view;

pub use actions::*;
pub use controller::*;
pub use view::*;

use crate::api::JobsApi;
use crate::auth::AuthGate;
use crate::clients::JobSearchClient;
use crate::framework::ControllerActor;
use std::sync::Arc;

/// Creates a new job search actor and its client.
pub fn new(gate: AuthGate, api: Arc<dyn JobsApi>) -> (ControllerActor<JobSearchController>, JobSearchClient) {
    let (actor, generic_client) = ControllerActor::new(JobSearchController::new(gate, api), 32);
    (actor, JobSearchClient::new(generic_client))
}
