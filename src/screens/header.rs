// src/screens/header.rs
use crate::router::Route;

/// Navigation bar shown above every protected screen
pub struct Header;

impl Header {
    pub fn render(active: &Route) -> String {
        let item = |label: &str, selected: bool| {
            if selected {
                format!("*{}*", label)
            } else {
                label.to_string()
            }
        };
        let on_jobs = matches!(active, Route::Jobs | Route::JobDetails(_));
        format!(
            "Jobby  |  {}  {}  |  [logout] Logout",
            item("[home] Home", *active == Route::Home),
            item("[jobs] Jobs", on_jobs),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_active_section() {
        let header = Header::render(&Route::JobDetails("1".into()));
        assert!(header.contains("*[jobs] Jobs*"));
        assert!(!header.contains("*[home] Home*"));
        assert!(header.contains("Logout"));
    }
}
