// src/screens/home.rs
use crate::view;

/// Landing page; static content, nothing to fetch
#[derive(Debug, Default)]
pub struct HomeScreen;

impl HomeScreen {
    pub fn render(&self) -> String {
        [
            view::heading("Find The Job That Fits Your Life"),
            view::paragraph(
                "Millions of people are searching for jobs, salary information, company reviews. \
                 Find the job that fits your abilities and potential.",
            ),
            "[jobs] Find Jobs".to_string(),
        ]
        .join("\n\n")
    }
}
