//! Type-safe wrappers around [`ControllerClient`](crate::framework::ControllerClient).

pub mod controller_handle;
pub mod job_details_client;
pub mod job_search_client;

pub use controller_handle::*;
pub use job_details_client::*;
pub use job_search_client::*;
