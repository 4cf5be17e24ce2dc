//! # Authentication Gate
//!
//! Protected views (home, job search, job details) ask the [`AuthGate`]
//! before doing anything that needs a credential. The gate is a pure read of
//! the injected [`TokenStore`]: it never writes, never retries, and is cheap
//! enough to call on every render.
//!
//! Tokens can expire or be cleared between two user actions, so controllers
//! go through [`AuthGate::token`] at every fetch issuance rather than caching
//! the answer from mount time.

pub mod token;

pub use token::*;

use crate::domain::Navigation;
use std::sync::Arc;

/// Decides whether a protected view may proceed.
#[derive(Clone)]
pub struct AuthGate {
    store: Arc<dyn TokenStore>,
}

impl AuthGate {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// `false` when there is no live token.
    pub fn can_enter(&self) -> bool {
        self.store.get_token().is_some()
    }

    /// The live token to attach to an outgoing request.
    pub fn token(&self) -> Option<Token> {
        self.store.get_token()
    }

    /// Gate check expressed as a navigation signal.
    pub fn check(&self) -> Navigation {
        if self.can_enter() {
            Navigation::Stay
        } else {
            Navigation::RedirectToLogin
        }
    }
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("authenticated", &self.can_enter())
            .finish()
    }
}
