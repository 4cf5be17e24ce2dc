//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`JobBoard`] - Wires the token store and API into screen controllers and shuts them down
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod job_board;
pub mod tracing;

pub use job_board::*;
pub use tracing::*;
