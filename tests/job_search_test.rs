mod common;

use common::{expect_mount, job, profile, server_error, signed_in, within};
use job_board::api::mock::{create_mock_api, expect_jobs};
use job_board::auth::{MemoryTokenStore, Token, TokenStore};
use job_board::clients::ControllerHandle;
use job_board::domain::{EmploymentType, JobId, Navigation, SalaryRange};
use job_board::framework::FetchStatus;
use job_board::job_search::{JobsPanel, ProfilePanel};
use job_board::lifecycle::JobBoard;
use std::sync::Arc;

#[tokio::test]
async fn test_signed_out_user_is_redirected_without_fetching() {
    let (api, _requests) = create_mock_api();
    let mut board = JobBoard::new(Arc::new(api), Arc::new(MemoryTokenStore::new()));
    let search = board.open_job_search();

    let navigation = search.initialize().await.unwrap();
    assert_eq!(navigation, Navigation::RedirectToLogin);

    let view = search.view().await.unwrap();
    assert!(!view.authenticated);
    assert_eq!(view.profile.issued(), 0);
    assert_eq!(view.jobs.issued(), 0);
    assert_eq!(view.jobs.status(), FetchStatus::Idle);

    drop(search);
    board.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_mount_loads_profile_and_unfiltered_jobs() {
    let (api, mut requests) = create_mock_api();
    let mut board = JobBoard::new(Arc::new(api), signed_in("abc.def.ghi"));
    let search = board.open_job_search();

    assert_eq!(search.initialize().await.unwrap(), Navigation::Stay);
    let loading = search.view().await.unwrap();
    assert_eq!(loading.profile_panel(), ProfilePanel::Loading);
    assert_eq!(loading.jobs_panel(), JobsPanel::Loading);

    let mount = expect_mount(&mut requests).await;
    assert_eq!(mount.profile_token, Token::new("abc.def.ghi"));
    assert_eq!(mount.jobs_token, Token::new("abc.def.ghi"));
    assert_eq!(
        mount.jobs_query.query_string(),
        "employment_type=&minimum_package=&search="
    );

    mount.profile.send(Ok(profile())).unwrap();
    mount
        .jobs
        .send(Ok(vec![job("j1", "Devops Engineer"), job("j2", "Backend Engineer")]))
        .unwrap();

    let view = within(search.wait_for(|view| view.profile.data().is_some() && view.jobs.data().is_some()))
        .await
        .unwrap();
    assert_eq!(view.profile_panel(), ProfilePanel::Ready(&profile()));
    match view.jobs_panel() {
        JobsPanel::Jobs(jobs) => {
            let ids: Vec<_> = jobs.iter().map(|job| job.id.0.as_str()).collect();
            assert_eq!(ids, ["j1", "j2"]);
        }
        other => panic!("Expected jobs, got {other:?}"),
    }
}

#[tokio::test]
async fn test_stale_response_never_overwrites_newer_query() {
    let (api, mut requests) = create_mock_api();
    let mut board = JobBoard::new(Arc::new(api), signed_in("t"));
    let search = board.open_job_search();

    search.initialize().await.unwrap();
    let mount = expect_mount(&mut requests).await;
    mount.profile.send(Ok(profile())).unwrap();
    mount.jobs.send(Ok(vec![])).unwrap();
    within(search.wait_for(|view| view.jobs.data().is_some()))
        .await
        .unwrap();

    search.set_search_query("a").await.unwrap();
    let (_, query_a, respond_a) = within(expect_jobs(&mut requests)).await.unwrap();
    search.set_search_query("ab").await.unwrap();
    let (_, query_ab, respond_ab) = within(expect_jobs(&mut requests)).await.unwrap();
    assert_eq!(query_a.search, "a");
    assert_eq!(query_ab.search, "ab");

    // "ab" answers first, then the slow "a" response lands.
    respond_ab.send(Ok(vec![job("ab1", "Rust Developer")])).unwrap();
    within(search.wait_for(|view| view.jobs.data().is_some_and(|jobs| !jobs.is_empty())))
        .await
        .unwrap();
    respond_a.send(Ok(vec![job("a1", "Ada Developer")])).unwrap();

    let view = within(search.wait_for(|view| view.jobs.discarded() == 1))
        .await
        .unwrap();
    let ids: Vec<_> = view
        .jobs
        .data()
        .unwrap()
        .iter()
        .map(|job| job.id.clone())
        .collect();
    assert_eq!(ids, [JobId::from("ab1")]);
    assert_eq!(view.filter.search_query(), "ab");
}

#[tokio::test]
async fn test_late_mount_response_is_discarded_while_newer_loads() {
    let (api, mut requests) = create_mock_api();
    let mut board = JobBoard::new(Arc::new(api), signed_in("t"));
    let search = board.open_job_search();

    search.initialize().await.unwrap();
    let mount = expect_mount(&mut requests).await;
    mount.profile.send(Ok(profile())).unwrap();

    search.set_search_query("a").await.unwrap();
    let (_, _, respond_a) = within(expect_jobs(&mut requests)).await.unwrap();

    mount.jobs.send(Ok(vec![job("old", "Old")])).unwrap();
    let view = within(search.wait_for(|view| view.jobs.discarded() == 1))
        .await
        .unwrap();
    assert!(view.jobs.is_loading());
    assert_eq!(view.jobs_panel(), JobsPanel::Loading);

    respond_a.send(Err(server_error())).unwrap();
    let view = within(search.wait_for(|view| view.jobs.is_error()))
        .await
        .unwrap();
    assert_eq!(view.jobs_panel(), JobsPanel::Failed);
}

#[tokio::test]
async fn test_retry_reissues_only_the_failed_fetch() {
    let (api, mut requests) = create_mock_api();
    let mut board = JobBoard::new(Arc::new(api), signed_in("t"));
    let search = board.open_job_search();

    search.initialize().await.unwrap();
    let mount = expect_mount(&mut requests).await;
    mount.profile.send(Ok(profile())).unwrap();
    mount.jobs.send(Err(server_error())).unwrap();

    let failed = within(search.wait_for(|view| view.jobs.is_error() && view.profile.data().is_some()))
        .await
        .unwrap();
    assert_eq!(failed.jobs_panel(), JobsPanel::Failed);

    assert_eq!(search.retry().await.unwrap(), Navigation::Stay);
    let retrying = search.view().await.unwrap();
    assert_eq!(retrying.profile.issued(), 1);
    assert_eq!(retrying.jobs.issued(), 2);
    assert_eq!(retrying.profile.status(), FetchStatus::Success);

    let (_, _, respond) = within(expect_jobs(&mut requests)).await.unwrap();
    respond.send(Ok(vec![job("j1", "Devops Engineer")])).unwrap();
    let view = within(search.wait_for(|view| view.jobs.data().is_some()))
        .await
        .unwrap();
    assert!(matches!(view.jobs_panel(), JobsPanel::Jobs(jobs) if jobs.len() == 1));
}

#[tokio::test]
async fn test_retry_after_both_fail_reissues_both() {
    let (api, mut requests) = create_mock_api();
    let mut board = JobBoard::new(Arc::new(api), signed_in("t"));
    let search = board.open_job_search();

    search.initialize().await.unwrap();
    let mount = expect_mount(&mut requests).await;
    mount.profile.send(Err(server_error())).unwrap();
    mount.jobs.send(Err(server_error())).unwrap();
    let failed = within(search.wait_for(|view| view.jobs.is_error() && view.profile.is_error()))
        .await
        .unwrap();
    assert_eq!(failed.profile_panel(), ProfilePanel::Failed);

    search.retry().await.unwrap();
    let retry = expect_mount(&mut requests).await;
    retry.profile.send(Ok(profile())).unwrap();
    retry.jobs.send(Ok(vec![])).unwrap();

    let view = within(search.wait_for(|view| view.profile.data().is_some() && view.jobs.data().is_some()))
        .await
        .unwrap();
    assert_eq!(view.profile.issued(), 2);
    assert_eq!(view.jobs.issued(), 2);
}

#[tokio::test]
async fn test_empty_job_list_renders_no_jobs() {
    let (api, mut requests) = create_mock_api();
    let mut board = JobBoard::new(Arc::new(api), signed_in("t"));
    let search = board.open_job_search();

    search.initialize().await.unwrap();
    let mount = expect_mount(&mut requests).await;
    mount.profile.send(Ok(profile())).unwrap();
    mount.jobs.send(Ok(vec![])).unwrap();

    let view = within(search.wait_for(|view| view.jobs.data().is_some()))
        .await
        .unwrap();
    assert_eq!(view.jobs_panel(), JobsPanel::NoJobs);
    assert_eq!(view.jobs.error(), None);
}

#[tokio::test]
async fn test_filters_serialize_into_the_request() {
    let (api, mut requests) = create_mock_api();
    let mut board = JobBoard::new(Arc::new(api), signed_in("t"));
    let search = board.open_job_search();

    search.initialize().await.unwrap();
    let mount = expect_mount(&mut requests).await;
    mount.profile.send(Ok(profile())).unwrap();
    mount.jobs.send(Ok(vec![])).unwrap();

    // Selected in reverse order; the request lists them canonically.
    search
        .toggle_employment_type(EmploymentType::PartTime, true)
        .await
        .unwrap();
    let (_, query, respond) = within(expect_jobs(&mut requests)).await.unwrap();
    assert_eq!(query.employment_type, "PARTTIME");
    respond.send(Ok(vec![])).unwrap();

    search
        .toggle_employment_type(EmploymentType::FullTime, true)
        .await
        .unwrap();
    let (_, _, respond) = within(expect_jobs(&mut requests)).await.unwrap();
    respond.send(Ok(vec![])).unwrap();

    search.set_salary_range(SalaryRange::TenLpa).await.unwrap();
    let (_, _, respond) = within(expect_jobs(&mut requests)).await.unwrap();
    respond.send(Ok(vec![])).unwrap();

    search.set_search_query("python").await.unwrap();
    let (token, query, respond) = within(expect_jobs(&mut requests)).await.unwrap();
    respond.send(Ok(vec![])).unwrap();
    assert_eq!(token, Token::new("t"));
    assert_eq!(
        query.query_string(),
        "employment_type=FULLTIME,PARTTIME&minimum_package=1000000&search=python"
    );

    // Unchecking removes only that type.
    search
        .toggle_employment_type(EmploymentType::FullTime, false)
        .await
        .unwrap();
    let (_, query, _respond) = within(expect_jobs(&mut requests)).await.unwrap();
    assert_eq!(query.employment_type, "PARTTIME");
    assert_eq!(query.minimum_package, "1000000");
}

#[tokio::test]
async fn test_salary_range_is_single_select() {
    let (api, mut requests) = create_mock_api();
    let mut board = JobBoard::new(Arc::new(api), signed_in("t"));
    let search = board.open_job_search();
    search.initialize().await.unwrap();
    let _mount = expect_mount(&mut requests).await;

    search.set_salary_range(SalaryRange::TwentyLpa).await.unwrap();
    search.set_salary_range(SalaryRange::FortyLpa).await.unwrap();

    let view = search.view().await.unwrap();
    assert_eq!(view.filter.salary_range(), Some(SalaryRange::FortyLpa));
    let selected: Vec<_> = view
        .salary_range_options()
        .into_iter()
        .filter(|option| option.selected)
        .map(|option| option.id)
        .collect();
    assert_eq!(selected, ["4000000"]);
}

#[tokio::test]
async fn test_filters_during_initial_load_never_refetch_profile() {
    let (api, mut requests) = create_mock_api();
    let mut board = JobBoard::new(Arc::new(api), signed_in("t"));
    let search = board.open_job_search();

    search.initialize().await.unwrap();
    let mount = expect_mount(&mut requests).await;

    search
        .toggle_employment_type(EmploymentType::Internship, true)
        .await
        .unwrap();
    let (_, query, respond) = within(expect_jobs(&mut requests)).await.unwrap();
    assert_eq!(query.employment_type, "INTERNSHIP");

    mount.profile.send(Ok(profile())).unwrap();
    mount.jobs.send(Ok(vec![job("stale", "Stale")])).unwrap();
    respond.send(Ok(vec![job("intern", "Intern")])).unwrap();

    let view = within(search.wait_for(|view| {
        view.profile.data().is_some() && view.jobs.data().is_some() && view.jobs.discarded() == 1
    }))
    .await
    .unwrap();
    assert_eq!(view.profile.issued(), 1);
    assert_eq!(view.jobs.data().unwrap()[0].id, JobId::from("intern"));
}

#[tokio::test]
async fn test_expired_token_between_actions_redirects() {
    let store = signed_in("t");
    let (api, mut requests) = create_mock_api();
    let mut board = JobBoard::new(Arc::new(api), store.clone());
    let search = board.open_job_search();

    search.initialize().await.unwrap();
    let mount = expect_mount(&mut requests).await;
    mount.profile.send(Ok(profile())).unwrap();
    mount.jobs.send(Ok(vec![job("j1", "Devops Engineer")])).unwrap();
    within(search.wait_for(|view| view.jobs.data().is_some()))
        .await
        .unwrap();

    store.clear().unwrap();

    let navigation = search.set_search_query("rust").await.unwrap();
    assert_eq!(navigation, Navigation::RedirectToLogin);

    let view = search.view().await.unwrap();
    assert!(!view.authenticated);
    assert_eq!(view.jobs.issued(), 1);
    assert_eq!(view.jobs.status(), FetchStatus::Success);
}

#[tokio::test]
async fn test_select_job_navigates_without_fetching() {
    let (api, _requests) = create_mock_api();
    let mut board = JobBoard::new(Arc::new(api), signed_in("t"));
    let search = board.open_job_search();

    let navigation = search.select_job(JobId::from("j9")).await.unwrap();
    assert_eq!(navigation, Navigation::JobDetails(JobId::from("j9")));

    let view = search.view().await.unwrap();
    assert_eq!(view.profile.issued(), 0);
    assert_eq!(view.jobs.issued(), 0);
}
