//! Job details screen: one posting plus similar postings.

pub mod actions;
pub mod controller;
pub mod view;

pub use actions::*;
pub use controller::*;
pub use view::*;

use crate::api::JobsApi;
use crate::auth::AuthGate;
use crate::clients::JobDetailsClient;
use crate::framework::ControllerActor;
use std::sync::Arc;

/// Creates a new job details actor and its client.
pub fn new(gate: AuthGate, api: Arc<dyn JobsApi>) -> (ControllerActor<JobDetailsController>, JobDetailsClient) {
    let (actor, generic_client) = ControllerActor::new(JobDetailsController::new(gate, api), 8);
    (actor, JobDetailsClient::new(generic_client))
}
