//! # Generic Messages
//!
//! Requests sent from a [`ControllerClient`](super::ControllerClient) to its
//! [`ControllerActor`](super::ControllerActor).

use super::controller::Controller;
use super::error::FrameworkError;
use crate::domain::Navigation;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by controllers.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// - **Command**: a user intent, answered with the resulting [`Navigation`].
/// - **View**: read the current view-model through the actor's queue, so the
///   answer reflects every command sent before it.
pub enum ControllerRequest<C: Controller> {
    Command {
        command: C::Command,
        respond_to: Response<Navigation>,
    },
    View {
        respond_to: Response<C::View>,
    },
}
