//! # Login & Logout
//!
//! The only writer of the [`TokenStore`]. A successful `/login` stores the
//! returned token for [`TOKEN_TTL_DAYS`](crate::auth::TOKEN_TTL_DAYS) days and
//! sends the user home; a rejection surfaces the server's `error_msg`
//! verbatim so the form can show it under the submit button.

use crate::api::{ApiError, Credentials, JobsApi};
use crate::auth::{default_ttl, TokenStore, TokenStoreError};
use crate::domain::Navigation;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Error)]
pub enum LoginError {
    /// `/login` refused the credentials; the message is shown as-is.
    #[error("{0}")]
    Rejected(String),

    #[error("Login request failed: {0}")]
    Request(ApiError),

    #[error(transparent)]
    Store(#[from] TokenStoreError),
}

impl From<ApiError> for LoginError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Rejected(message) => Self::Rejected(message),
            other => Self::Request(other),
        }
    }
}

/// The login view.
#[derive(Clone)]
pub struct LoginForm {
    api: Arc<dyn JobsApi>,
    store: Arc<dyn TokenStore>,
}

impl LoginForm {
    pub fn new(api: Arc<dyn JobsApi>, store: Arc<dyn TokenStore>) -> Self {
        Self { api, store }
    }

    /// An already signed-in user never sees the form.
    pub fn check_existing(&self) -> Navigation {
        if self.store.get_token().is_some() {
            Navigation::Home
        } else {
            Navigation::Stay
        }
    }

    #[instrument(skip(self))]
    pub async fn submit(&self, credentials: Credentials) -> Result<Navigation, LoginError> {
        let token = self.api.login(&credentials).await.map_err(|error| {
            warn!(%error, "Login failed");
            LoginError::from(error)
        })?;
        self.store.set_token(token, default_ttl())?;
        info!(username = %credentials.username, "Logged in");
        Ok(Navigation::Home)
    }

    /// Forgets the stored token and returns to the login view.
    #[instrument(skip(self))]
    pub fn logout(&self) -> Result<Navigation, LoginError> {
        self.store.clear()?;
        info!("Logged out");
        Ok(Navigation::RedirectToLogin)
    }
}
