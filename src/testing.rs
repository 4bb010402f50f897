// src/testing.rs
//! In-process stand-in for the jobs API used by screen and app tests

use async_trait::async_trait;
use std::sync::Mutex;

use crate::core::JobsApi;
use crate::error::ApiError;
use crate::filters::JobQuery;
use crate::types::response::LoginRequest;
use crate::types::{JobDetail, JobDetailsPayload, JobSummary, LifeAtCompany, Profile, Skill};

pub fn sample_profile() -> Profile {
    Profile {
        name: "Rahul Attuluri".to_string(),
        short_bio: "Lead Software Developer and AI-ML expert".to_string(),
        profile_image_url: "https://assets.example.com/rahul.png".to_string(),
    }
}

pub fn sample_job(id: &str) -> JobSummary {
    JobSummary {
        id: id.to_string(),
        title: "Backend Engineer".to_string(),
        company_logo_url: "https://assets.example.com/netflix.png".to_string(),
        employment_type: "Full Time".to_string(),
        job_description: "Build and run the services behind the catalogue.".to_string(),
        location: "Bangalore".to_string(),
        package_per_annum: Some("21 LPA".to_string()),
        rating: 4.0,
    }
}

pub fn sample_details() -> JobDetailsPayload {
    JobDetailsPayload {
        job: JobDetail {
            summary: sample_job("1"),
            company_website_url: "https://about.netflix.com".to_string(),
            skills: vec![
                Skill {
                    name: "Docker".to_string(),
                    image_url: "https://assets.example.com/docker.png".to_string(),
                },
                Skill {
                    name: "Go".to_string(),
                    image_url: "https://assets.example.com/go.png".to_string(),
                },
            ],
            life_at_company: Some(LifeAtCompany {
                description: "Our culture is what makes Netflix special.".to_string(),
                image_url: "https://assets.example.com/life.png".to_string(),
            }),
        },
        similar_jobs: vec![JobSummary {
            id: "2".to_string(),
            title: "Frontend Engineer".to_string(),
            company_logo_url: "https://assets.example.com/google.png".to_string(),
            employment_type: "Freelance".to_string(),
            job_description: "Own the web client.".to_string(),
            location: "Mumbai".to_string(),
            package_per_annum: None,
            rating: 3.5,
        }],
    }
}

/// Canned responses plus a log of every request made, in order
pub struct FakeApi {
    login: Mutex<Result<String, ApiError>>,
    profile: Mutex<Result<Profile, ApiError>>,
    jobs: Mutex<Result<Vec<JobSummary>, ApiError>>,
    details: Mutex<Result<JobDetailsPayload, ApiError>>,
    calls: Mutex<Vec<String>>,
    tokens: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            login: Mutex::new(Ok("fake-token".to_string())),
            profile: Mutex::new(Ok(sample_profile())),
            jobs: Mutex::new(Ok(vec![sample_job("1"), sample_job("2")])),
            details: Mutex::new(Ok(sample_details())),
            calls: Mutex::new(Vec::new()),
            tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn set_login(&self, outcome: Result<String, ApiError>) {
        *self.login.lock().unwrap() = outcome;
    }

    pub fn set_profile(&self, outcome: Result<Profile, ApiError>) {
        *self.profile.lock().unwrap() = outcome;
    }

    pub fn set_jobs(&self, outcome: Result<Vec<JobSummary>, ApiError>) {
        *self.jobs.lock().unwrap() = outcome;
    }

    pub fn set_details(&self, outcome: Result<JobDetailsPayload, ApiError>) {
        *self.details.lock().unwrap() = outcome;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls starting with `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }

    fn record(&self, call: String, token: Option<&str>) {
        self.calls.lock().unwrap().push(call);
        if let Some(token) = token {
            self.tokens.lock().unwrap().push(token.to_string());
        }
    }
}

#[async_trait]
impl JobsApi for FakeApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<String, ApiError> {
        self.record(format!("POST /login {}", credentials.username), None);
        self.login.lock().unwrap().clone()
    }

    async fn profile(&self, token: &str) -> Result<Profile, ApiError> {
        self.record("GET /profile".to_string(), Some(token));
        self.profile.lock().unwrap().clone()
    }

    async fn jobs(&self, token: &str, query: &JobQuery) -> Result<Vec<JobSummary>, ApiError> {
        self.record(
            format!(
                "GET /jobs?employment_type={}&minimum_package={}&search={}",
                query.employment_type, query.minimum_package, query.search
            ),
            Some(token),
        );
        self.jobs.lock().unwrap().clone()
    }

    async fn job_details(&self, token: &str, job_id: &str) -> Result<JobDetailsPayload, ApiError> {
        self.record(format!("GET /jobs/{}", job_id), Some(token));
        self.details.lock().unwrap().clone()
    }
}
