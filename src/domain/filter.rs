//! # Filter State
//!
//! The query the user controls on the job search view: free-text search,
//! an employment-type multi-select and a salary-range single-select.
//!
//! [`FilterState`] is owned by the job search controller. The fetch layer only
//! ever sees the serialized [`JobQuery`] built from it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

/// A filter option id that matches no known employment type or salary range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown filter option: {0}")]
pub struct UnknownFilterOption(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "FULLTIME")]
    FullTime,
    #[serde(rename = "PARTTIME")]
    PartTime,
    #[serde(rename = "FREELANCE")]
    Freelance,
    #[serde(rename = "INTERNSHIP")]
    Internship,
}

impl EmploymentType {
    /// Every option, in the order the filter panel lists them.
    pub const ALL: [Self; 4] = [
        Self::FullTime,
        Self::PartTime,
        Self::Freelance,
        Self::Internship,
    ];

    /// Wire id used in the `employment_type` query parameter.
    pub fn id(self) -> &'static str {
        match self {
            Self::FullTime => "FULLTIME",
            Self::PartTime => "PARTTIME",
            Self::Freelance => "FREELANCE",
            Self::Internship => "INTERNSHIP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full Time",
            Self::PartTime => "Part Time",
            Self::Freelance => "Freelance",
            Self::Internship => "Internship",
        }
    }
}

impl Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for EmploymentType {
    type Err = UnknownFilterOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownFilterOption(s.to_string()))
    }
}

/// Minimum package floor, in rupees per annum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SalaryRange {
    TenLpa,
    TwentyLpa,
    ThirtyLpa,
    FortyLpa,
}

impl SalaryRange {
    pub const ALL: [Self; 4] = [
        Self::TenLpa,
        Self::TwentyLpa,
        Self::ThirtyLpa,
        Self::FortyLpa,
    ];

    /// Wire id used in the `minimum_package` query parameter.
    pub fn id(self) -> &'static str {
        match self {
            Self::TenLpa => "1000000",
            Self::TwentyLpa => "2000000",
            Self::ThirtyLpa => "3000000",
            Self::FortyLpa => "4000000",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TenLpa => "10 LPA and above",
            Self::TwentyLpa => "20 LPA and above",
            Self::ThirtyLpa => "30 LPA and above",
            Self::FortyLpa => "40 LPA and above",
        }
    }
}

impl Display for SalaryRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SalaryRange {
    type Err = UnknownFilterOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.id() == wanted)
            .ok_or_else(|| UnknownFilterOption(s.to_string()))
    }
}

/// The user-controlled job list query.
///
/// The employment-type set cannot hold duplicates and at most one salary
/// range is ever selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    search_query: String,
    employment_types: BTreeSet<EmploymentType>,
    salary_range: Option<SalaryRange>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn employment_types(&self) -> &BTreeSet<EmploymentType> {
        &self.employment_types
    }

    pub fn salary_range(&self) -> Option<SalaryRange> {
        self.salary_range
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    /// Adds or removes one employment type. Returns whether the set changed.
    ///
    /// Including an already-selected type (or excluding an unselected one) is
    /// a no-op, not an error.
    pub fn toggle_employment_type(&mut self, employment_type: EmploymentType, included: bool) -> bool {
        if included {
            self.employment_types.insert(employment_type)
        } else {
            self.employment_types.remove(&employment_type)
        }
    }

    /// Replaces the selected salary range, deselecting any previous one.
    pub fn set_salary_range(&mut self, salary_range: SalaryRange) {
        self.salary_range = Some(salary_range);
    }

    /// Serializes the current selection into job list query parameters.
    pub fn to_query(&self) -> JobQuery {
        JobQuery {
            employment_type: self
                .employment_types
                .iter()
                .map(|employment_type| employment_type.id())
                .collect::<Vec<_>>()
                .join(","),
            minimum_package: self
                .salary_range
                .map(|range| range.id().to_string())
                .unwrap_or_default(),
            search: self.search_query.clone(),
        }
    }
}

/// Query parameters of `GET /jobs`.
///
/// An empty field means "no constraint" for that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobQuery {
    /// Comma-joined employment type ids.
    pub employment_type: String,
    /// Selected salary range id.
    pub minimum_package: String,
    /// Search text as typed.
    pub search: String,
}

impl JobQuery {
    /// Renders `employment_type=..&minimum_package=..&search=..`.
    ///
    /// Ids are emitted as-is (commas stay literal); only the search text is
    /// form-encoded.
    pub fn query_string(&self) -> String {
        let search: String = url::form_urlencoded::byte_serialize(self.search.as_bytes()).collect();
        format!(
            "employment_type={}&minimum_package={}&search={}",
            self.employment_type, self.minimum_package, search
        )
    }
}
