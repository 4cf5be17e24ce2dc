//! # Mock APIs & Testing Guide
//!
//! Two in-memory [`JobsApi`] implementations for driving controllers in tests
//! without a network.
//!
//! ## When to use which
//!
//! | Feature | [`MockJobsApi`] | [`create_mock_api`] |
//! |---------|-----------------|---------------------|
//! | **Style** | Fluent expectations, answered immediately | Each request surfaces on a channel with a responder |
//! | **Ordering control** | None | Full: answer requests in any order, or never |
//! | **Use Case** | Happy paths, error injection | Races, stale responses, in-flight `Loading` states |
//!
//! ## Pattern 1: Fluent expectations
//!
//! ```rust
//! use job_board::api::mock::MockJobsApi;
//! use job_board::api::{ApiError, JobsApi};
//! use job_board::auth::Token;
//! use job_board::domain::JobQuery;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockJobsApi::new();
//!     mock.expect_jobs().return_ok(vec![]);
//!     mock.expect_jobs().return_err(ApiError::Status { status: 500 });
//!
//!     let token = Token::new("t");
//!     assert_eq!(mock.fetch_jobs(&token, &JobQuery::default()).await, Ok(vec![]));
//!     assert!(mock.fetch_jobs(&token, &JobQuery::default()).await.is_err());
//!     mock.verify();
//! }
//! ```
//!
//! ## Pattern 2: Channel-driven responses
//!
//! ```rust
//! use job_board::api::mock::{create_mock_api, expect_jobs};
//! use job_board::api::JobsApi;
//! use job_board::auth::Token;
//! use job_board::domain::JobQuery;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (api, mut requests) = create_mock_api();
//!     let call = tokio::spawn(async move {
//!         api.fetch_jobs(&Token::new("t"), &JobQuery::default()).await
//!     });
//!
//!     let (_token, _query, responder) = expect_jobs(&mut requests).await.unwrap();
//!     responder.send(Ok(vec![])).unwrap();
//!     assert_eq!(call.await.unwrap(), Ok(vec![]));
//! }
//! ```

use super::{ApiError, Credentials, JobsApi};
use crate::auth::Token;
use crate::domain::{JobDetailsPage, JobId, JobQuery, JobSummary, Profile};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A request the mock received, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Login { username: String },
    Profile { token: Token },
    Jobs { token: Token, query: JobQuery },
    JobDetails { token: Token, job_id: JobId },
}

#[derive(Default)]
struct Expectations {
    login: VecDeque<Result<Token, ApiError>>,
    profile: VecDeque<Result<Profile, ApiError>>,
    jobs: VecDeque<Result<Vec<JobSummary>, ApiError>>,
    job_details: VecDeque<Result<JobDetailsPage, ApiError>>,
    calls: Vec<RecordedCall>,
}

impl Expectations {
    fn remaining(&self) -> usize {
        self.login.len() + self.profile.len() + self.jobs.len() + self.job_details.len()
    }
}

/// A mock API with per-endpoint expectation queues.
///
/// Expectations for one endpoint are consumed in order; endpoints are
/// independent, so concurrently issued fetches can arrive in any order. A
/// call with no queued expectation answers `ApiError::Transport`.
#[derive(Clone, Default)]
pub struct MockJobsApi {
    state: Arc<Mutex<Expectations>>,
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<T> {
    state: Arc<Mutex<Expectations>>,
    push: fn(&mut Expectations, Result<T, ApiError>),
}

impl<T> ExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push_result(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        self.push_result(Err(error));
    }

    fn push_result(self, result: Result<T, ApiError>) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        (self.push)(&mut *state, result);
    }
}

impl MockJobsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_login(&self) -> ExpectationBuilder<Token> {
        self.builder(|state, result| state.login.push_back(result))
    }

    pub fn expect_profile(&self) -> ExpectationBuilder<Profile> {
        self.builder(|state, result| state.profile.push_back(result))
    }

    pub fn expect_jobs(&self) -> ExpectationBuilder<Vec<JobSummary>> {
        self.builder(|state, result| state.jobs.push_back(result))
    }

    pub fn expect_job_details(&self) -> ExpectationBuilder<JobDetailsPage> {
        self.builder(|state, result| state.job_details.push_back(result))
    }

    /// Every request received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.lock().remaining();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn builder<T>(&self, push: fn(&mut Expectations, Result<T, ApiError>)) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            state: self.state.clone(),
            push,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Expectations> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn answer<T>(
        &self,
        call: RecordedCall,
        pop: impl FnOnce(&mut Expectations) -> Option<Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        let mut state = self.lock();
        let endpoint = format!("{:?}", call);
        state.calls.push(call);
        pop(&mut *state).unwrap_or_else(|| Err(ApiError::Transport(format!("unexpected request: {endpoint}"))))
    }
}

#[async_trait]
impl JobsApi for MockJobsApi {
    async fn login(&self, credentials: &Credentials) -> Result<Token, ApiError> {
        let call = RecordedCall::Login {
            username: credentials.username.clone(),
        };
        self.answer(call, |state| state.login.pop_front())
    }

    async fn fetch_profile(&self, token: &Token) -> Result<Profile, ApiError> {
        let call = RecordedCall::Profile { token: token.clone() };
        self.answer(call, |state| state.profile.pop_front())
    }

    async fn fetch_jobs(&self, token: &Token, query: &JobQuery) -> Result<Vec<JobSummary>, ApiError> {
        let call = RecordedCall::Jobs {
            token: token.clone(),
            query: query.clone(),
        };
        self.answer(call, |state| state.jobs.pop_front())
    }

    async fn fetch_job_details(&self, token: &Token, job_id: &JobId) -> Result<JobDetailsPage, ApiError> {
        let call = RecordedCall::JobDetails {
            token: token.clone(),
            job_id: job_id.clone(),
        };
        self.answer(call, |state| state.job_details.pop_front())
    }
}

// =============================================================================
// CHANNEL-DRIVEN MOCK
// =============================================================================

/// One-shot channel the test uses to answer a captured request.
pub type Responder<T> = oneshot::Sender<Result<T, ApiError>>;

/// A request captured by [`ChannelJobsApi`], waiting for the test to answer.
#[derive(Debug)]
pub enum ApiRequest {
    Login {
        credentials: Credentials,
        respond_to: Responder<Token>,
    },
    Profile {
        token: Token,
        respond_to: Responder<Profile>,
    },
    Jobs {
        token: Token,
        query: JobQuery,
        respond_to: Responder<Vec<JobSummary>>,
    },
    JobDetails {
        token: Token,
        job_id: JobId,
        respond_to: Responder<JobDetailsPage>,
    },
}

/// A [`JobsApi`] that forwards every call to a channel the test controls.
#[derive(Clone)]
pub struct ChannelJobsApi {
    sender: mpsc::UnboundedSender<ApiRequest>,
}

/// Creates a mock API and the receiver on which its requests arrive.
///
/// # Testing Strategy
/// The call stays pending until the test sends on the request's responder,
/// so tests decide exactly when and in which order responses land. Dropping a
/// responder fails the call with `ApiError::Transport`.
pub fn create_mock_api() -> (ChannelJobsApi, mpsc::UnboundedReceiver<ApiRequest>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (ChannelJobsApi { sender }, receiver)
}

impl ChannelJobsApi {
    async fn roundtrip<T>(
        &self,
        build: impl FnOnce(Responder<T>) -> ApiRequest,
    ) -> Result<T, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .map_err(|_| ApiError::Transport("mock api closed".to_string()))?;
        response
            .await
            .map_err(|_| ApiError::Transport("mock responder dropped".to_string()))?
    }
}

#[async_trait]
impl JobsApi for ChannelJobsApi {
    async fn login(&self, credentials: &Credentials) -> Result<Token, ApiError> {
        let credentials = credentials.clone();
        self.roundtrip(|respond_to| ApiRequest::Login {
            credentials,
            respond_to,
        })
        .await
    }

    async fn fetch_profile(&self, token: &Token) -> Result<Profile, ApiError> {
        let token = token.clone();
        self.roundtrip(|respond_to| ApiRequest::Profile { token, respond_to })
            .await
    }

    async fn fetch_jobs(&self, token: &Token, query: &JobQuery) -> Result<Vec<JobSummary>, ApiError> {
        let token = token.clone();
        let query = query.clone();
        self.roundtrip(|respond_to| ApiRequest::Jobs {
            token,
            query,
            respond_to,
        })
        .await
    }

    async fn fetch_job_details(&self, token: &Token, job_id: &JobId) -> Result<JobDetailsPage, ApiError> {
        let token = token.clone();
        let job_id = job_id.clone();
        self.roundtrip(|respond_to| ApiRequest::JobDetails {
            token,
            job_id,
            respond_to,
        })
        .await
    }
}

/// Helper to verify that the next request is a Login request
pub async fn expect_login(
    receiver: &mut mpsc::UnboundedReceiver<ApiRequest>,
) -> Option<(Credentials, Responder<Token>)> {
    match receiver.recv().await {
        Some(ApiRequest::Login {
            credentials,
            respond_to,
        }) => Some((credentials, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is a Profile request
pub async fn expect_profile(
    receiver: &mut mpsc::UnboundedReceiver<ApiRequest>,
) -> Option<(Token, Responder<Profile>)> {
    match receiver.recv().await {
        Some(ApiRequest::Profile { token, respond_to }) => Some((token, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is a Jobs request
pub async fn expect_jobs(
    receiver: &mut mpsc::UnboundedReceiver<ApiRequest>,
) -> Option<(Token, JobQuery, Responder<Vec<JobSummary>>)> {
    match receiver.recv().await {
        Some(ApiRequest::Jobs {
            token,
            query,
            respond_to,
        }) => Some((token, query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is a JobDetails request
pub async fn expect_job_details(
    receiver: &mut mpsc::UnboundedReceiver<ApiRequest>,
) -> Option<(Token, JobId, Responder<JobDetailsPage>)> {
    match receiver.recv().await {
        Some(ApiRequest::JobDetails {
            token,
            job_id,
            respond_to,
        }) => Some((token, job_id, respond_to)),
        _ => None,
    }
}
