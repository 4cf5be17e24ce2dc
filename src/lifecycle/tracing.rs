//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate for the whole client.
//!
//! ## Configuration
//!
//! Compact format, no crate/module prefix (`with_target(false)`), verbosity
//! from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Controller Lifecycle**: `Controller started` / `Shutdown` with `controller_type`
//! - **Commands**: every command at `debug`, with its payload
//! - **Fetches**: issuance with its ticket, settlement status at `info`,
//!   failures at `warn`, stale responses at `debug`
//! - **HTTP**: one span per API call, the request URL at `debug`
//! - **Token store**: writes and removals (never the token itself)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run -- --search python
//!
//! # Show commands, queries and discarded responses
//! RUST_LOG=debug cargo run -- --search python
//!
//! # Only the HTTP layer
//! RUST_LOG=job_board::api=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=debug`**, typing "a" then "ab" quickly:
//!
//! ```text
//! DEBUG Command controller_type="JobSearchController" command=SetSearchQuery("a")
//! DEBUG Job list fetch issued ticket=#2
//! DEBUG Command controller_type="JobSearchController" command=SetSearchQuery("ab")
//! DEBUG Job list fetch issued ticket=#3
//!  INFO Job list settled ticket=#3 status=Success
//! DEBUG Discarding stale response ticket=#2 latest=3
//! ```

/// Installs the global `tracing` subscriber.
///
/// Panics if a global subscriber is already set, so call it once from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // controller_type identifies the source instead
        .compact()
        .init();
}
