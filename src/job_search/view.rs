//! View-model of the job search screen.

use crate::domain::{EmploymentType, FilterState, JobSummary, Profile, SalaryRange};
use crate::framework::{FetchLifecycle, FetchState};

/// Everything the search screen renders, as of one state change.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSearchView {
    /// Gate result at publication time.
    pub authenticated: bool,
    pub filter: FilterState,
    pub profile: FetchLifecycle<Profile>,
    pub jobs: FetchLifecycle<Vec<JobSummary>>,
}

/// What the profile card shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfilePanel<'a> {
    Loading,
    /// Retry affordance.
    Failed,
    Ready(&'a Profile),
}

/// What the job list area shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JobsPanel<'a> {
    Loading,
    /// Failure view with a retry affordance.
    Failed,
    /// The request succeeded with an empty list.
    NoJobs,
    Jobs(&'a [JobSummary]),
}

/// One checkbox or radio button of the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub id: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl JobSearchView {
    // Idle only exists before the first fetch goes out; it renders like Loading.
    pub fn profile_panel(&self) -> ProfilePanel<'_> {
        match self.profile.state() {
            FetchState::Idle | FetchState::Loading => ProfilePanel::Loading,
            FetchState::Error(_) => ProfilePanel::Failed,
            FetchState::Success(profile) => ProfilePanel::Ready(profile),
        }
    }

    pub fn jobs_panel(&self) -> JobsPanel<'_> {
        match self.jobs.state() {
            FetchState::Idle | FetchState::Loading => JobsPanel::Loading,
            FetchState::Error(_) => JobsPanel::Failed,
            FetchState::Success(jobs) if jobs.is_empty() => JobsPanel::NoJobs,
            FetchState::Success(jobs) => JobsPanel::Jobs(jobs),
        }
    }

    pub fn employment_type_options(&self) -> Vec<FilterOption> {
        EmploymentType::ALL
            .into_iter()
            .map(|option| FilterOption {
                id: option.id(),
                label: option.label(),
                selected: self.filter.employment_types().contains(&option),
            })
            .collect()
    }

    pub fn salary_range_options(&self) -> Vec<FilterOption> {
        SalaryRange::ALL
            .into_iter()
            .map(|option| FilterOption {
                id: option.id(),
                label: option.label(),
                selected: self.filter.salary_range() == Some(option),
            })
            .collect()
    }
}
