// src/types/jobs.rs
//! Records returned by the jobs API. Fields are only read, never validated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub short_bio: String,
    #[serde(default)]
    pub profile_image_url: String,
}

/// A job as it appears in the list and in the similar-jobs section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company_logo_url: String,
    #[serde(default)]
    pub employment_type: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub location: String,
    // similar jobs come without a package
    #[serde(default)]
    pub package_per_annum: Option<String>,
    #[serde(default)]
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LifeAtCompany {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub summary: JobSummary,
    #[serde(default)]
    pub company_website_url: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub life_at_company: Option<LifeAtCompany>,
}

/// Job detail plus its similar jobs; both arrive in one response.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDetailsPayload {
    pub job: JobDetail,
    pub similar_jobs: Vec<JobSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_detail_reads_skills_and_culture() {
        let raw = r#"{
            "id": "bb95e51b",
            "title": "Backend Engineer",
            "company_logo_url": "https://assets/logo.png",
            "company_website_url": "https://netflix.com",
            "employment_type": "Internship",
            "job_description": "Build things",
            "location": "Delhi",
            "package_per_annum": "10 LPA",
            "rating": 4,
            "skills": [{"name": "Docker", "image_url": "https://assets/docker.png"}],
            "life_at_company": {"description": "Nice", "image_url": "https://assets/life.png"}
        }"#;
        let job: JobDetail = serde_json::from_str(raw).unwrap();
        assert_eq!(job.summary.title, "Backend Engineer");
        assert_eq!(job.summary.rating, 4.0);
        assert_eq!(job.skills[0].name, "Docker");
        assert_eq!(job.life_at_company.unwrap().description, "Nice");
    }

    #[test]
    fn test_similar_job_without_package() {
        let raw = r#"{"id": "2", "title": "Frontend", "rating": 3.5, "location": "Mumbai"}"#;
        let job: JobSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(job.package_per_annum, None);
        assert_eq!(job.employment_type, "");
    }
}
