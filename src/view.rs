// src/view.rs
//! Plain-text building blocks shared by the screen renderers

use std::fmt::Write;

use crate::types::{JobSummary, Profile, Skill};
use crate::utils::{clean_text, wrap_text};

pub const WIDTH: usize = 72;

pub fn rule() -> String {
    "-".repeat(WIDTH)
}

pub fn heading(title: &str) -> String {
    format!("{}\n{}", title, "=".repeat(title.chars().count().min(WIDTH)))
}

pub fn paragraph(text: &str) -> String {
    wrap_text(&clean_text(text), WIDTH).join("\n")
}

pub fn loader() -> String {
    "Loading...".to_string()
}

/// Generic failure panel with the retry hint
pub fn failure_panel(retry_command: &str) -> String {
    format!(
        "Oops! Something Went Wrong\nWe cannot seem to find the page you are looking for.\n[{}] Retry",
        retry_command
    )
}

pub fn rating(value: f64) -> String {
    format!("\u{2605} {}", value)
}

pub fn profile_card(profile: &Profile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", profile.name);
    if !profile.short_bio.is_empty() {
        let _ = writeln!(out, "{}", paragraph(&profile.short_bio));
    }
    if !profile.profile_image_url.is_empty() {
        let _ = writeln!(out, "image: {}", profile.profile_image_url);
    }
    out.trim_end().to_string()
}

/// Card used on the jobs list; `index` is the number accepted by `open`
pub fn job_card(index: usize, job: &JobSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}  {}", index, job.title, rating(job.rating));
    let _ = writeln!(out, "    logo: {}", job.company_logo_url);

    let mut facts = vec![job.location.clone(), job.employment_type.clone()];
    if let Some(package) = &job.package_per_annum {
        facts.push(package.clone());
    }
    let facts: Vec<String> = facts.into_iter().filter(|f| !f.is_empty()).collect();
    if !facts.is_empty() {
        let _ = writeln!(out, "    {}", facts.join(" | "));
    }

    let _ = writeln!(out, "    Job Description");
    for line in wrap_text(&clean_text(&job.job_description), WIDTH - 4) {
        let _ = writeln!(out, "    {}", line);
    }
    out.trim_end().to_string()
}

/// Compact card for the similar-jobs section
pub fn similar_job_card(index: usize, job: &JobSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}  {}", index, job.title, rating(job.rating));
    if !job.company_logo_url.is_empty() {
        let _ = writeln!(out, "    logo: {}", job.company_logo_url);
    }
    let _ = writeln!(out, "    Description");
    for line in wrap_text(&clean_text(&job.job_description), WIDTH - 4) {
        let _ = writeln!(out, "    {}", line);
    }
    let facts: Vec<&str> = [job.location.as_str(), job.employment_type.as_str()]
        .into_iter()
        .filter(|f| !f.is_empty())
        .collect();
    if !facts.is_empty() {
        let _ = writeln!(out, "    {}", facts.join(" | "));
    }
    out.trim_end().to_string()
}

pub fn skills(skills: &[Skill]) -> String {
    if skills.is_empty() {
        return "(none listed)".to_string();
    }
    skills
        .iter()
        .map(|s| format!("  - {}", s.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

pub fn radio(selected: bool) -> &'static str {
    if selected {
        "(o)"
    } else {
        "( )"
    }
}
