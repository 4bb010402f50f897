// src/types/response.rs
use serde::{Deserialize, Serialize};

use super::jobs::{JobDetail, JobSummary, Profile};

// ===== Request Types =====

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// ===== Service Response Types =====

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub jwt_token: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginErrorResponse {
    pub error_msg: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub profile_details: Profile,
}

#[derive(Debug, Deserialize)]
pub struct JobsResponse {
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub jobs: Vec<JobSummary>,
}

#[derive(Debug, Deserialize)]
pub struct JobDetailsResponse {
    pub job_details: JobDetail,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub similar_jobs: Vec<JobSummary>,
}
