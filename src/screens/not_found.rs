// src/screens/not_found.rs
use crate::view;

#[derive(Debug, Default)]
pub struct NotFoundScreen;

impl NotFoundScreen {
    pub fn render(&self) -> String {
        format!(
            "{}\n\nWe are sorry, the page you requested could not be found.\n\n[home] Home",
            view::heading("Page Not Found")
        )
    }
}
