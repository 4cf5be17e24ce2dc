//! Wire format of the job board API.
//!
//! These mirror the JSON bodies field-for-field and convert into the
//! [`crate::domain`] types. Nothing outside [`crate::api`] should see them.

use crate::domain::{JobDetails, JobDetailsPage, JobId, JobSummary, LifeAtCompany, Profile, Skill};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginSuccessDto {
    pub jwt_token: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginFailureDto {
    pub error_msg: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileEnvelopeDto {
    pub profile_details: ProfileDto,
}

#[derive(Debug, Deserialize)]
pub struct ProfileDto {
    pub name: String,
    pub profile_image_url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub short_bio: Option<String>,
}

impl From<ProfileDto> for Profile {
    fn from(dto: ProfileDto) -> Self {
        Self {
            name: dto.name,
            title: dto.title.or(dto.short_bio).unwrap_or_default(),
            avatar_url: dto.profile_image_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct JobsEnvelopeDto {
    pub jobs: Vec<JobDto>,
}

#[derive(Debug, Deserialize)]
pub struct JobDto {
    pub id: String,
    pub title: String,
    pub job_description: String,
    pub company_logo_url: String,
    pub location: String,
    pub employment_type: String,
    #[serde(default)]
    pub package_per_annum: Option<String>,
    pub rating: f64,
}

impl From<JobDto> for JobSummary {
    fn from(dto: JobDto) -> Self {
        Self {
            id: JobId(dto.id),
            title: dto.title,
            description: dto.job_description,
            company_logo_url: dto.company_logo_url,
            location: dto.location,
            employment_type: dto.employment_type,
            package_per_annum: dto.package_per_annum,
            rating: dto.rating,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SkillDto {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
pub struct LifeAtCompanyDto {
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
pub struct JobDetailsDto {
    #[serde(flatten)]
    pub summary: JobDto,
    #[serde(default)]
    pub skills: Vec<SkillDto>,
    #[serde(default)]
    pub life_at_company: Option<LifeAtCompanyDto>,
    pub company_website_url: String,
}

#[derive(Debug, Deserialize)]
pub struct JobDetailsEnvelopeDto {
    pub job_details: JobDetailsDto,
    #[serde(default)]
    pub similar_jobs: Vec<JobDto>,
}

impl From<JobDetailsEnvelopeDto> for JobDetailsPage {
    fn from(dto: JobDetailsEnvelopeDto) -> Self {
        let details = dto.job_details;
        Self {
            job: JobDetails {
                summary: details.summary.into(),
                skills: details
                    .skills
                    .into_iter()
                    .map(|skill| Skill {
                        name: skill.name,
                        image_url: skill.image_url,
                    })
                    .collect(),
                life_at_company: details.life_at_company.map(|life| LifeAtCompany {
                    description: life.description,
                    image_url: life.image_url,
                }),
                company_website_url: details.company_website_url,
            },
            similar_jobs: dto.similar_jobs.into_iter().map(JobSummary::from).collect(),
        }
    }
}
