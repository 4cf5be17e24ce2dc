#![allow(dead_code)]

use job_board::api::mock::{ApiRequest, Responder};
use job_board::api::ApiError;
use job_board::auth::{MemoryTokenStore, Token};
use job_board::domain::{
    JobDetails, JobDetailsPage, JobId, JobQuery, JobSummary, LifeAtCompany, Profile, Skill,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub fn signed_in(token: &str) -> Arc<MemoryTokenStore> {
    Arc::new(MemoryTokenStore::with_token(Token::new(token)))
}

/// Fails the test instead of hanging when an expected event never happens.
pub async fn within<F: Future>(future: F) -> F::Output {
    tokio::time::timeout(Duration::from_secs(2), future)
        .await
        .expect("timed out")
}

pub fn profile() -> Profile {
    Profile {
        name: "Rahul Attuluri".to_string(),
        title: "Lead Software Developer and AI-ML expert".to_string(),
        avatar_url: "https://assets.ccbp.in/frontend/react-js/male-avatar-img.png".to_string(),
    }
}

pub fn job(id: &str, title: &str) -> JobSummary {
    JobSummary {
        id: JobId::from(id),
        title: title.to_string(),
        description: format!("{title} role"),
        company_logo_url: format!("https://img/{id}.png"),
        location: "Hyderabad".to_string(),
        employment_type: "Full Time".to_string(),
        package_per_annum: Some("14 LPA".to_string()),
        rating: 4.0,
    }
}

pub fn details_page(id: &str) -> JobDetailsPage {
    JobDetailsPage {
        job: JobDetails {
            summary: job(id, "Backend Engineer"),
            skills: vec![
                Skill {
                    name: "Docker".to_string(),
                    image_url: "https://img/docker.png".to_string(),
                },
                Skill {
                    name: "Go".to_string(),
                    image_url: "https://img/go.png".to_string(),
                },
            ],
            life_at_company: Some(LifeAtCompany {
                description: "Flexible hours".to_string(),
                image_url: "https://img/life.png".to_string(),
            }),
            company_website_url: "https://example.com".to_string(),
        },
        similar_jobs: vec![job("s2", "Frontend Engineer"), job("s1", "Data Engineer")],
    }
}

/// The profile and job list requests issued on mount.
///
/// Both fetches start together, so they can reach the mock in either order.
pub struct MountRequests {
    pub profile_token: Token,
    pub profile: Responder<Profile>,
    pub jobs_token: Token,
    pub jobs_query: JobQuery,
    pub jobs: Responder<Vec<JobSummary>>,
}

pub async fn expect_mount(requests: &mut mpsc::UnboundedReceiver<ApiRequest>) -> MountRequests {
    let mut profile = None;
    let mut jobs = None;
    while profile.is_none() || jobs.is_none() {
        match within(requests.recv()).await {
            Some(ApiRequest::Profile { token, respond_to }) => profile = Some((token, respond_to)),
            Some(ApiRequest::Jobs {
                token,
                query,
                respond_to,
            }) => jobs = Some((token, query, respond_to)),
            other => panic!("Unexpected request on mount: {other:?}"),
        }
    }
    let (profile_token, profile) = profile.unwrap();
    let (jobs_token, jobs_query, jobs) = jobs.unwrap();
    MountRequests {
        profile_token,
        profile,
        jobs_token,
        jobs_query,
        jobs,
    }
}

pub fn server_error() -> ApiError {
    ApiError::Status { status: 500 }
}
