//! Generic controller framework.
//!
//! Each screen of the client is a [`Controller`] driven by a
//! [`ControllerActor`]: one task owns the screen's state, commands arrive
//! over a channel, remote fetches run in their own tasks and report back with
//! a [`Ticket`], and every change is published as a view-model.
//!
//! # Main Components
//!
//! - [`Controller`] - Trait that screen state machines implement
//! - [`ControllerActor`] - Generic actor that drives a controller
//! - [`ControllerClient`] - Type-safe handle for sending commands and reading views
//! - [`FetchLifecycle`] - Idle/Loading/Success/Error with latest-issued-wins settlement
//! - [`FrameworkError`] - Plumbing errors

pub mod actor;
pub mod client;
pub mod controller;
pub mod error;
pub mod lifecycle;
pub mod message;

// Re-export core types for convenience
pub use actor::{ControllerActor, Fetcher};
pub use client::ControllerClient;
pub use controller::Controller;
pub use error::FrameworkError;
pub use lifecycle::{FetchLifecycle, FetchState, FetchStatus, Settlement, Ticket};
pub use message::{ControllerRequest, Response};
