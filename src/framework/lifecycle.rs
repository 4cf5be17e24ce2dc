//! # Fetch Lifecycle
//!
//! The state machine behind every remote resource a controller shows:
//!
//! ```text
//!   Idle ──begin──▶ Loading ──settle(Ok)──▶ Success(data)
//!                      ▲    ──settle(Err)─▶ Error(info)
//!                      └──────begin─────────────┘
//! ```
//!
//! `begin` is legal from any state and always wipes the previous payload or
//! error. There is no cancel transition.
//!
//! ## Latest-issued-wins
//!
//! Each `begin` hands out a fresh [`Ticket`]. A settlement is applied only if
//! it carries the most recently issued ticket; anything older is discarded
//! and counted, so a slow response to an old query can never overwrite the
//! answer to a newer one.

use crate::api::ApiError;
use std::fmt;
use tracing::debug;

/// Payload-free view of a [`FetchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Status plus payload. Data exists only in `Success`, error info only in
/// `Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Error(ApiError),
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of [`FetchLifecycle::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchLifecycle<T> {
    state: FetchState<T>,
    issued: u64,
    discarded: u64,
}

impl<T> Default for FetchLifecycle<T> {
    fn default() -> Self {
        Self {
            state: FetchState::Idle,
            issued: 0,
            discarded: 0,
        }
    }
}

impl<T> FetchLifecycle<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to `Loading` and issues the ticket the eventual result must carry.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.state = FetchState::Loading;
        Ticket(self.issued)
    }

    /// Applies a completed fetch, unless a newer request has been issued since.
    pub fn settle(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> Settlement {
        if ticket.0 != self.issued {
            self.discarded += 1;
            debug!(%ticket, latest = self.issued, "Discarding stale response");
            return Settlement::Stale;
        }
        self.state = match result {
            Ok(data) => FetchState::Success(data),
            Err(error) => FetchState::Error(error),
        };
        Settlement::Applied
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn status(&self) -> FetchStatus {
        match self.state {
            FetchState::Idle => FetchStatus::Idle,
            FetchState::Loading => FetchStatus::Loading,
            FetchState::Success(_) => FetchStatus::Success,
            FetchState::Error(_) => FetchStatus::Error,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.state {
            FetchState::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.state, FetchState::Error(_))
    }

    /// How many requests have been issued so far.
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// How many completions were dropped for being stale.
    pub fn discarded(&self) -> u64 {
        self.discarded
    }
}
