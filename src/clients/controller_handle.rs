use crate::framework::{Controller, ControllerClient, FrameworkError};
use async_trait::async_trait;

/// Trait for screen-specific clients to inherit the common read operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// reading and awaiting view-models.
#[async_trait]
pub trait ControllerHandle<C: Controller>: Send + Sync {
    /// Access the inner generic ControllerClient.
    fn inner(&self) -> &ControllerClient<C>;

    /// Current view-model, ordered after every command sent before it.
    #[tracing::instrument(skip(self))]
    async fn view(&self) -> Result<C::View, FrameworkError> {
        tracing::debug!("Sending request");
        self.inner().view().await
    }

    /// Waits until the published view satisfies `predicate`.
    async fn wait_for<P>(&self, predicate: P) -> Result<C::View, FrameworkError>
    where
        P: FnMut(&C::View) -> bool + Send,
    {
        self.inner().wait_for(predicate).await
    }
}
