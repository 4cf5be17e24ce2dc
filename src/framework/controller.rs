//! # The Controller Trait
//!
//! The business-logic half of a [`ControllerActor`](super::ControllerActor).

use super::actor::Fetcher;
use crate::domain::Navigation;
use std::fmt::Debug;

/// State and behavior of one screen, driven by a [`ControllerActor`](super::ControllerActor).
///
/// # Architecture Note
/// Implementors are plain synchronous state machines. They never await:
/// network work is handed to the [`Fetcher`], which runs it in a separate task
/// and feeds the outcome back through [`Controller::handle_completion`]. The
/// actor therefore stays responsive to new commands while requests are in
/// flight, and the controller's state needs no locks.
///
/// The associated types keep each screen's vocabulary separate: a job-details
/// command cannot be sent to the search controller.
pub trait Controller: Send + 'static {
    /// User intents (set a filter, retry, select a job, ...).
    type Command: Send + Debug + 'static;

    /// Results of fetches issued through the [`Fetcher`].
    type Completion: Send + 'static;

    /// Snapshot published to observers after every state change.
    type View: Clone + Send + Sync + 'static;

    /// Applies one command and returns where the user should go next.
    fn handle_command(
        &mut self,
        command: Self::Command,
        fetcher: &mut Fetcher<Self::Completion>,
    ) -> Navigation;

    /// Applies a finished fetch.
    fn handle_completion(&mut self, completion: Self::Completion);

    /// Current view-model.
    fn view(&self) -> Self::View;
}
