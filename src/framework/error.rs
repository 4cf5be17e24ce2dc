//! # Framework Errors
//!
//! Failures of the controller plumbing itself. Fetch failures never show up
//! here: they are data, stored in a [`FetchLifecycle`](super::FetchLifecycle).

/// Errors that can occur within the controller framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Controller closed")]
    ControllerClosed,
    #[error("Controller dropped response channel")]
    ControllerDropped,
    #[error("Controller task failed: {0}")]
    TaskFailed(String),
}
