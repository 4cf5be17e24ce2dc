//! # Generic Client
//!
//! The handle through which the rest of the application talks to a
//! [`ControllerActor`](super::ControllerActor).

use super::controller::Controller;
use super::error::FrameworkError;
use super::message::ControllerRequest;
use crate::domain::Navigation;
use tokio::sync::{mpsc, oneshot, watch};

/// A type-safe client for interacting with a `ControllerActor`.
///
/// * **Cloneable**: holds only a sender and a view receiver.
/// * **Two read paths**: [`view`](Self::view) asks the actor (ordered after
///   earlier commands), [`wait_for`](Self::wait_for) watches published
///   snapshots.
pub struct ControllerClient<C: Controller> {
    sender: mpsc::Sender<ControllerRequest<C>>,
    views: watch::Receiver<C::View>,
}

impl<C: Controller> Clone for ControllerClient<C> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            views: self.views.clone(),
        }
    }
}

impl<C: Controller> ControllerClient<C> {
    pub fn new(sender: mpsc::Sender<ControllerRequest<C>>, views: watch::Receiver<C::View>) -> Self {
        Self { sender, views }
    }

    /// Sends a command and returns the navigation it produced.
    pub async fn send(&self, command: C::Command) -> Result<Navigation, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ControllerRequest::Command {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ControllerClosed)?;
        response.await.map_err(|_| FrameworkError::ControllerDropped)?
    }

    /// Current view-model, as seen after every previously sent command.
    pub async fn view(&self) -> Result<C::View, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ControllerRequest::View { respond_to })
            .await
            .map_err(|_| FrameworkError::ControllerClosed)?;
        response.await.map_err(|_| FrameworkError::ControllerDropped)?
    }

    /// Waits until a published view satisfies `predicate` and returns it.
    pub async fn wait_for(
        &self,
        predicate: impl FnMut(&C::View) -> bool,
    ) -> Result<C::View, FrameworkError> {
        let mut views = self.views.clone();
        let view = views
            .wait_for(predicate)
            .await
            .map_err(|_| FrameworkError::ControllerClosed)?;
        Ok((*view).clone())
    }
}
