// src/screens/job_details.rs
use anyhow::Result;
use std::fmt::Write;

use crate::core::JobsApi;
use crate::request_state::{RequestState, RequestTracker, Ticket};
use crate::types::JobDetailsPayload;
use crate::view;

/// A details fetch started by [`JobDetailsScreen::begin_mount`]
#[derive(Debug)]
pub struct DetailsFetch {
    ticket: Ticket,
}

/// One posting plus its similar jobs. Both come from a single response,
/// so one tracker drives the whole screen.
pub struct JobDetailsScreen {
    job_id: String,
    details: RequestTracker<JobDetailsPayload>,
}

impl JobDetailsScreen {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            details: RequestTracker::new("job_details"),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn state(&self) -> &RequestState<JobDetailsPayload> {
        self.details.state()
    }

    pub fn begin_mount(&mut self) -> DetailsFetch {
        DetailsFetch {
            ticket: self.details.begin(),
        }
    }

    /// Retrying re-issues the same request for the same id.
    pub fn begin_retry(&mut self) -> Result<DetailsFetch> {
        if !self.details.can_retry() {
            anyhow::bail!(
                "Nothing to retry: job details are {}",
                self.details.state().label()
            );
        }
        Ok(self.begin_mount())
    }

    pub async fn complete(&mut self, fetch: DetailsFetch, api: &dyn JobsApi, token: &str) {
        let outcome = api.job_details(token, &self.job_id).await;
        self.details.resolve(fetch.ticket, outcome);
    }

    pub async fn mount(&mut self, api: &dyn JobsApi, token: &str) {
        let fetch = self.begin_mount();
        self.complete(fetch, api, token).await;
    }

    pub async fn retry(&mut self, api: &dyn JobsApi, token: &str) -> Result<()> {
        let fetch = self.begin_retry()?;
        self.complete(fetch, api, token).await;
        Ok(())
    }

    /// Id of the similar job numbered `index` (1-based)
    pub fn similar_job_id_at(&self, index: usize) -> Option<&str> {
        let payload = self.details.state().success()?;
        index
            .checked_sub(1)
            .and_then(|i| payload.similar_jobs.get(i))
            .map(|job| job.id.as_str())
    }

    fn render_payload(payload: &JobDetailsPayload) -> String {
        let job = &payload.job;
        let summary = &job.summary;
        let mut out = String::new();

        let _ = writeln!(out, "{}  {}", summary.title, view::rating(summary.rating));
        let _ = writeln!(out, "logo: {}", summary.company_logo_url);
        let mut facts = vec![summary.location.as_str(), summary.employment_type.as_str()];
        if let Some(package) = &summary.package_per_annum {
            facts.push(package.as_str());
        }
        let _ = writeln!(
            out,
            "{}",
            facts
                .into_iter()
                .filter(|f| !f.is_empty())
                .collect::<Vec<_>>()
                .join(" | ")
        );
        let _ = writeln!(out, "{}", view::rule());

        let _ = writeln!(out, "Description");
        if !job.company_website_url.is_empty() {
            let _ = writeln!(out, "Visit: {}", job.company_website_url);
        }
        let _ = writeln!(out, "{}\n", view::paragraph(&summary.job_description));

        let _ = writeln!(out, "Skills");
        let _ = writeln!(out, "{}\n", view::skills(&job.skills));

        let _ = writeln!(out, "Life at Company");
        match &job.life_at_company {
            Some(life) => {
                let _ = writeln!(out, "{}", view::paragraph(&life.description));
                if !life.image_url.is_empty() {
                    let _ = writeln!(out, "image: {}", life.image_url);
                }
            }
            None => {
                let _ = writeln!(out, "(not shared)");
            }
        }

        let _ = writeln!(out, "\n{}", view::heading("Similar Jobs"));
        for (i, similar) in payload.similar_jobs.iter().enumerate() {
            let _ = writeln!(out, "{}\n", view::similar_job_card(i + 1, similar));
        }
        out.trim_end().to_string()
    }

    pub fn render(&self) -> String {
        match self.details.state() {
            RequestState::Idle => String::new(),
            RequestState::Pending => view::loader(),
            RequestState::Success(payload) => Self::render_payload(payload),
            RequestState::Failure(_) => view::failure_panel("retry"),
        }
    }
}
