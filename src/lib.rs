#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Job Board
//!
//! > **An actor-driven job-search client.**
//!
//! The crate signs a user in, lets them browse and filter job postings, and
//! shows the details of one posting together with similar postings. It does
//! no rendering: every screen is exposed as a view-model that a terminal,
//! a GUI or a test can draw however it likes.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why actors for screens?
//!
//! A search screen has one piece of state (the filters) and two remote
//! resources (profile and job list) that load independently, fail
//! independently and may be re-requested while a previous request is still in
//! flight. Putting each screen in its own task gives:
//! - **No locks**: commands and fetch results are applied one at a time.
//! - **Responsiveness**: fetches run in their own tasks, so the screen keeps
//!   accepting commands while the network is slow.
//! - **Ordering**: every fetch carries a ticket, and only the latest one may
//!   update the screen.
//!
//! ## 🚀 Core Concepts
//!
//! ### Fetch lifecycles
//! Every remote resource is a [`FetchLifecycle`](framework::FetchLifecycle):
//! `Idle → Loading → Success | Error`. Data exists only in `Success`, error
//! information only in `Error`; the enum makes anything else unrepresentable.
//!
//! ### The gate
//! [`AuthGate`](auth::AuthGate) is consulted on every screen mount, on every
//! fetch and on every published view. A missing or expired token never
//! produces an error state; it produces [`Navigation::RedirectToLogin`](domain::Navigation::RedirectToLogin).
//!
//! ### Mocking
//! Controllers only see the [`JobsApi`](api::JobsApi) trait. Tests swap in the
//! in-memory implementations from [`api::mock`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: The generic [`ControllerActor`](framework::ControllerActor) loop,
//!   its client, and the fetch lifecycle state machine.
//! - **Key items**: [`Controller`](framework::Controller), [`Fetcher`](framework::Fetcher).
//!
//! ### 2. The Screens ([`job_search`], [`job_details`], [`login`])
//! - **Role**: Concrete controllers and their view-models.
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: Domain-specific handles such as [`JobSearchClient`](clients::JobSearchClient).
//!
//! ### 4. The Boundary ([`api`], [`auth`])
//! - **Role**: HTTP transport, wire format, token storage.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! - **Role**: [`JobBoard`](lifecycle::JobBoard) wires everything together and shuts it down.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- -u rahul --password rahul@2021 \
//!     --employment-type FULLTIME,PARTTIME --salary-range 1000000 --search python
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod domain;
pub mod framework;
pub mod job_details;
pub mod job_search;
pub mod lifecycle;
pub mod login;
