//! Pure data structures shared by the API layer and the controllers.
//!
//! Nothing in here performs I/O. The wire format lives in [`crate::api::dto`]
//! and converts into these types at the transport boundary.

pub mod filter;
pub mod job;
pub mod navigation;
pub mod profile;

pub use filter::*;
pub use job::*;
pub use navigation::*;
pub use profile::*;
