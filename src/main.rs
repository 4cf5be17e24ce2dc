//! # jobs-cli
//!
//! Terminal front end for the job board:
//! 1.  Log in (or reuse a stored token).
//! 2.  Open the search screen and apply the filters given on the command line.
//! 3.  Open the details screen for `--job-id` or the first result.

use clap::Parser;
use job_board::api::HttpJobsApi;
use job_board::auth::{FileTokenStore, MemoryTokenStore, TokenStore};
use job_board::clients::ControllerHandle;
use job_board::config::Config;
use job_board::domain::{JobSummary, Navigation};
use job_board::job_details::{DetailsPanel, JobDetailsView};
use job_board::job_search::{JobSearchView, JobsPanel, ProfilePanel};
use job_board::lifecycle::{setup_tracing, JobBoard};
use std::sync::Arc;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let config = Config::parse();

    let api = HttpJobsApi::new(&config.api_config()).map_err(|e| e.to_string())?;
    let store: Arc<dyn TokenStore> = match &config.token_file {
        Some(path) => Arc::new(FileTokenStore::new(path)),
        None => Arc::new(MemoryTokenStore::new()),
    };
    info!(base_url = %api.base_url(), "Starting jobs-cli");
    let mut board = JobBoard::new(Arc::new(api), store);

    let form = board.login_form();
    if config.logout {
        form.logout().map_err(|e| e.to_string())?;
        println!("Logged out.");
        return Ok(());
    }
    if form.check_existing() != Navigation::Home {
        if let Some(credentials) = config.credentials() {
            async { form.submit(credentials).await }
                .instrument(tracing::info_span!("login"))
                .await
                .map_err(|e| e.to_string())?;
        }
    }

    // =====================================================================
    // Search
    // =====================================================================

    if board.find_jobs() != Navigation::Jobs {
        return Err("Not logged in: pass --username and --password".to_string());
    }
    let search = board.open_job_search();
    if search.initialize().await.map_err(|e| e.to_string())? == Navigation::RedirectToLogin {
        return Err("Not logged in: pass --username and --password".to_string());
    }
    if !config.search.is_empty() {
        search
            .set_search_query(&config.search)
            .await
            .map_err(|e| e.to_string())?;
    }
    for employment_type in &config.employment_types {
        search
            .toggle_employment_type(*employment_type, true)
            .await
            .map_err(|e| e.to_string())?;
    }
    if let Some(range) = config.salary_range {
        search.set_salary_range(range).await.map_err(|e| e.to_string())?;
    }

    let view = search
        .wait_for(|view| !view.profile.is_loading() && !view.jobs.is_loading())
        .await
        .map_err(|e| e.to_string())?;
    print_search(&view);

    let selected = config
        .job_id()
        .or_else(|| view.jobs.data().and_then(|jobs| jobs.first()).map(|job| job.id.clone()));
    let Some(job_id) = selected else {
        drop(search);
        return board.shutdown().await.map_err(|e| e.to_string());
    };

    // =====================================================================
    // Details
    // =====================================================================

    let Navigation::JobDetails(job_id) = search.select_job(job_id).await.map_err(|e| e.to_string())? else {
        return Err("Unexpected navigation from job selection".to_string());
    };
    let details = board.open_job_details();
    details
        .initialize(job_id)
        .await
        .map_err(|e| e.to_string())?;
    let view = details
        .wait_for(|view| !view.detail.is_loading())
        .await
        .map_err(|e| e.to_string())?;
    print_details(&view);

    drop(search);
    drop(details);
    board.shutdown().await.map_err(|e| e.to_string())
}

fn print_search(view: &JobSearchView) {
    match view.profile_panel() {
        ProfilePanel::Ready(profile) => println!("{} | {}", profile.name, profile.title),
        ProfilePanel::Failed => warn!("Profile unavailable"),
        ProfilePanel::Loading => {}
    }

    let employment: Vec<_> = view
        .employment_type_options()
        .into_iter()
        .filter(|option| option.selected)
        .map(|option| option.label)
        .collect();
    println!(
        "Filters: search={:?} employment=[{}] salary={}",
        view.filter.search_query(),
        employment.join(", "),
        view.filter.salary_range().map(|range| range.label()).unwrap_or("any"),
    );

    match view.jobs_panel() {
        JobsPanel::Jobs(jobs) => jobs.iter().for_each(print_summary),
        JobsPanel::NoJobs => println!("No Jobs Found"),
        JobsPanel::Failed => println!("Oops! Something went wrong. Try again later."),
        JobsPanel::Loading => {}
    }
}

fn print_summary(job: &JobSummary) {
    println!(
        "[{}] {} ({:.1}) - {} - {} - {}",
        job.id,
        job.title,
        job.rating,
        job.location,
        job.employment_type,
        job.package_per_annum.as_deref().unwrap_or("-"),
    );
}

fn print_details(view: &JobDetailsView) {
    match view.panel() {
        DetailsPanel::Ready(page) => {
            print_summary(&page.job.summary);
            println!("{}", page.job.summary.description);
            println!("Visit: {}", page.job.company_website_url);
            let skills: Vec<_> = page.job.skills.iter().map(|skill| skill.name.as_str()).collect();
            println!("Skills: {}", skills.join(", "));
            if let Some(life) = &page.job.life_at_company {
                println!("Life at company: {}", life.description);
            }
            println!("Similar jobs:");
            page.similar_jobs.iter().for_each(print_summary);
        }
        DetailsPanel::Failed => println!("Oops! Something went wrong. Try again later."),
        DetailsPanel::Loading => {}
    }
}
