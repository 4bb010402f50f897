// src/screens/jobs.rs
//! Jobs list with the profile card and the filter panel.

use anyhow::Result;
use std::fmt::Write;
use tracing::info;

use crate::core::JobsApi;
use crate::filters::{EmploymentType, FilterSelection, JobQuery, SalaryTier};
use crate::request_state::{RequestState, RequestTracker, Ticket};
use crate::types::{JobSummary, Profile};
use crate::view;

/// Fetches started on the jobs screen and not yet awaited
#[derive(Debug)]
pub struct JobsFetch {
    profile: Option<Ticket>,
    jobs: Option<(Ticket, JobQuery)>,
}

pub struct JobsScreen {
    filters: FilterSelection,
    profile: RequestTracker<Profile>,
    jobs: RequestTracker<Vec<JobSummary>>,
}

impl JobsScreen {
    pub fn new(filters: FilterSelection) -> Self {
        Self {
            filters,
            profile: RequestTracker::new("profile"),
            jobs: RequestTracker::new("jobs"),
        }
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn profile_state(&self) -> &RequestState<Profile> {
        self.profile.state()
    }

    pub fn jobs_state(&self) -> &RequestState<Vec<JobSummary>> {
        self.jobs.state()
    }

    /// Start the profile and jobs fetches; both regions render as pending
    /// until [`JobsScreen::complete`] resolves them.
    pub fn begin_mount(&mut self) -> JobsFetch {
        let profile = self.profile.begin();
        let jobs = self.jobs.begin();
        JobsFetch {
            profile: Some(profile),
            jobs: Some((jobs, self.filters.to_query())),
        }
    }

    pub fn begin_jobs(&mut self) -> JobsFetch {
        let ticket = self.jobs.begin();
        JobsFetch {
            profile: None,
            jobs: Some((ticket, self.filters.to_query())),
        }
    }

    pub fn begin_profile(&mut self) -> JobsFetch {
        JobsFetch {
            profile: Some(self.profile.begin()),
            jobs: None,
        }
    }

    /// Run the started fetches concurrently; the two requests share no state.
    pub async fn complete(&mut self, fetch: JobsFetch, api: &dyn JobsApi, token: &str) {
        let JobsFetch { profile, jobs } = fetch;

        let profile_fetch = async {
            match profile {
                Some(ticket) => Some((ticket, api.profile(token).await)),
                None => None,
            }
        };
        let jobs_fetch = async {
            match jobs {
                Some((ticket, query)) => Some((ticket, api.jobs(token, &query).await)),
                None => None,
            }
        };
        let (profile, jobs) = tokio::join!(profile_fetch, jobs_fetch);

        if let Some((ticket, outcome)) = profile {
            self.profile.resolve(ticket, outcome);
        }
        if let Some((ticket, outcome)) = jobs {
            self.jobs.resolve(ticket, outcome);
        }
    }

    pub async fn mount(&mut self, api: &dyn JobsApi, token: &str) {
        let fetch = self.begin_mount();
        self.complete(fetch, api, token).await;
    }

    pub fn toggle_employment_type(&mut self, employment_type: EmploymentType) -> JobsFetch {
        let checked = self.filters.toggle_employment_type(employment_type);
        info!("Employment type {} checked: {}", employment_type, checked);
        self.begin_jobs()
    }

    pub fn set_salary_tier(&mut self, tier: SalaryTier) -> JobsFetch {
        info!("Salary range set to {}", tier);
        self.filters.set_salary_tier(tier);
        self.begin_jobs()
    }

    pub fn set_search(&mut self, search: &str) -> JobsFetch {
        info!("Search set to {:?}", search);
        self.filters.set_search(search);
        self.begin_jobs()
    }

    pub fn begin_retry(&mut self) -> Result<JobsFetch> {
        if !self.jobs.can_retry() {
            anyhow::bail!("Nothing to retry: jobs are {}", self.jobs.state().label());
        }
        Ok(self.begin_jobs())
    }

    pub fn begin_retry_profile(&mut self) -> Result<JobsFetch> {
        if !self.profile.can_retry() {
            anyhow::bail!("Nothing to retry: profile is {}", self.profile.state().label());
        }
        Ok(self.begin_profile())
    }

    pub async fn retry(&mut self, api: &dyn JobsApi, token: &str) -> Result<()> {
        let fetch = self.begin_retry()?;
        self.complete(fetch, api, token).await;
        Ok(())
    }

    pub async fn retry_profile(&mut self, api: &dyn JobsApi, token: &str) -> Result<()> {
        let fetch = self.begin_retry_profile()?;
        self.complete(fetch, api, token).await;
        Ok(())
    }

    /// Id of the job card numbered `index` (1-based)
    pub fn job_id_at(&self, index: usize) -> Option<&str> {
        let jobs = self.jobs.state().success()?;
        index
            .checked_sub(1)
            .and_then(|i| jobs.get(i))
            .map(|job| job.id.as_str())
    }

    fn render_profile(&self) -> String {
        match self.profile.state() {
            RequestState::Idle => String::new(),
            RequestState::Pending => view::loader(),
            RequestState::Success(profile) => view::profile_card(profile),
            RequestState::Failure(_) => "[retry-profile] Retry".to_string(),
        }
    }

    fn render_filters(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Type of Employment");
        for employment_type in EmploymentType::ALL {
            let _ = writeln!(
                out,
                "  {} {:<12} [type {}]",
                view::checkbox(self.filters.is_checked(employment_type)),
                employment_type.label(),
                employment_type.tag()
            );
        }
        let _ = writeln!(out, "Salary Range");
        for tier in SalaryTier::ALL {
            let _ = writeln!(
                out,
                "  {} {:<18} [salary {}]",
                view::radio(self.filters.salary_tier() == tier),
                tier.label(),
                tier.key()
            );
        }
        out.trim_end().to_string()
    }

    fn render_jobs(&self) -> String {
        match self.jobs.state() {
            RequestState::Idle => String::new(),
            RequestState::Pending => view::loader(),
            RequestState::Success(jobs) if jobs.is_empty() => {
                "No Jobs Found\nWe could not find any jobs. Try other filters.".to_string()
            }
            RequestState::Success(jobs) => jobs
                .iter()
                .enumerate()
                .map(|(i, job)| view::job_card(i + 1, job))
                .collect::<Vec<_>>()
                .join("\n\n"),
            RequestState::Failure(_) => view::failure_panel("retry"),
        }
    }

    pub fn render(&self) -> String {
        [
            self.render_profile(),
            view::rule(),
            self.render_filters(),
            view::rule(),
            format!("Search: [{}]", self.filters.search()),
            String::new(),
            self.render_jobs(),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::testing::{sample_job, FakeApi};

    #[tokio::test]
    async fn test_mount_fetches_profile_and_default_jobs() {
        let api = FakeApi::new();
        let mut screen = JobsScreen::new(FilterSelection::new());
        screen.mount(&api, "t").await;

        assert!(screen.profile_state().success().is_some());
        assert_eq!(screen.jobs_state().success().map(Vec::len), Some(2));
        assert_eq!(api.count("GET /profile"), 1);
        assert_eq!(
            api.count("GET /jobs?employment_type=&minimum_package=1000000&search="),
            1
        );
    }

    #[tokio::test]
    async fn test_filter_changes_refetch_with_new_query() {
        let api = FakeApi::new();
        let mut screen = JobsScreen::new(FilterSelection::new());
        screen.mount(&api, "t").await;

        let fetch = screen.toggle_employment_type(EmploymentType::PartTime);
        screen.complete(fetch, &api, "t").await;
        let fetch = screen.set_salary_tier(SalaryTier::Lpa40);
        screen.complete(fetch, &api, "t").await;
        let fetch = screen.set_search("react");
        screen.complete(fetch, &api, "t").await;

        assert_eq!(
            api.calls().last().map(String::as_str),
            Some("GET /jobs?employment_type=PARTTIME&minimum_package=4000000&search=react")
        );
        assert_eq!(api.count("GET /jobs?"), 4);
        assert_eq!(api.count("GET /profile"), 1);
    }

    #[tokio::test]
    async fn test_empty_list_renders_no_cards() {
        let api = FakeApi::new();
        api.set_jobs(Ok(vec![]));
        let mut screen = JobsScreen::new(FilterSelection::new());
        screen.mount(&api, "t").await;

        let rendered = screen.render();
        assert!(!screen.jobs_state().is_failure());
        assert!(rendered.contains("No Jobs Found"));
        assert!(!rendered.contains("[1]"));
        assert_eq!(screen.job_id_at(1), None);
    }

    #[tokio::test]
    async fn test_failure_then_retry() {
        let api = FakeApi::new();
        api.set_jobs(Err(ApiError::Status {
            status: 500,
            body: "down".to_string(),
        }));
        let mut screen = JobsScreen::new(FilterSelection::new());
        screen.mount(&api, "t").await;
        assert!(screen.render().contains("Oops! Something Went Wrong"));

        api.set_jobs(Ok(vec![sample_job("9")]));
        screen.retry(&api, "t").await.unwrap();
        assert_eq!(screen.job_id_at(1), Some("9"));
    }

    #[tokio::test]
    async fn test_retry_requires_failure() {
        let api = FakeApi::new();
        let mut screen = JobsScreen::new(FilterSelection::new());
        screen.mount(&api, "t").await;
        assert!(screen.retry(&api, "t").await.is_err());
    }

    #[tokio::test]
    async fn test_profile_failure_is_independent() {
        let api = FakeApi::new();
        api.set_profile(Err(ApiError::Transport("offline".to_string())));
        let mut screen = JobsScreen::new(FilterSelection::new());
        screen.mount(&api, "t").await;

        assert!(screen.profile_state().is_failure());
        assert!(screen.jobs_state().success().is_some());
        assert!(screen.render().starts_with("[retry-profile] Retry"));

        api.set_profile(Ok(crate::testing::sample_profile()));
        screen.retry_profile(&api, "t").await.unwrap();
        assert!(screen.render().starts_with("Rahul Attuluri"));
    }

    #[tokio::test]
    async fn test_started_fetch_renders_loader_until_complete() {
        let api = FakeApi::new();
        let mut screen = JobsScreen::new(FilterSelection::new());
        screen.mount(&api, "t").await;

        let fetch = screen.set_search("golang");
        assert!(screen.jobs_state().is_pending());
        let pending = screen.render();
        assert!(pending.contains("Loading..."));
        assert!(pending.starts_with("Rahul Attuluri"));
        assert_eq!(api.count("GET /jobs?"), 1);

        screen.complete(fetch, &api, "t").await;
        assert!(!screen.render().contains("Loading..."));
        assert_eq!(api.count("GET /jobs?"), 2);
    }

    #[tokio::test]
    async fn test_superseded_fetch_is_dropped() {
        let api = FakeApi::new();
        let mut screen = JobsScreen::new(FilterSelection::new());
        let first = screen.begin_mount();
        let second = screen.set_search("rust");

        api.set_jobs(Ok(vec![sample_job("7")]));
        screen.complete(second, &api, "t").await;
        api.set_jobs(Ok(vec![sample_job("old")]));
        screen.complete(first, &api, "t").await;

        assert_eq!(screen.job_id_at(1), Some("7"));
        assert!(screen.profile_state().success().is_some());
    }

    #[test]
    fn test_render_before_mount_is_blank_regions() {
        let screen = JobsScreen::new(
            FilterSelection::new().with_employment_types([EmploymentType::Freelance]),
        );
        let rendered = screen.render();
        assert!(rendered.contains("[x] Freelance"));
        assert!(rendered.contains("(o) 10 LPA and above"));
        assert!(!rendered.contains("Loading..."));
    }
}
