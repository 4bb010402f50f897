// src/screens/mod.rs
//! State-holding screens; each renders from its own request trackers only.

pub mod header;
pub mod home;
pub mod job_details;
pub mod jobs;
pub mod login;
pub mod not_found;

pub use header::Header;
pub use home::HomeScreen;
pub use job_details::{DetailsFetch, JobDetailsScreen};
pub use jobs::{JobsFetch, JobsScreen};
pub use login::LoginScreen;
pub use not_found::NotFoundScreen;

use crate::router::Route;

/// Network work a screen has started but not yet awaited. The screen
/// already renders its pending state while this is outstanding.
#[derive(Debug)]
pub enum Fetch {
    Jobs(JobsFetch),
    Details(DetailsFetch),
}

pub enum Screen {
    Login(LoginScreen),
    Home(HomeScreen),
    Jobs(JobsScreen),
    JobDetails(JobDetailsScreen),
    NotFound(NotFoundScreen),
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::Login(_) => Route::Login,
            Screen::Home(_) => Route::Home,
            Screen::Jobs(_) => Route::Jobs,
            Screen::JobDetails(screen) => Route::JobDetails(screen.job_id().to_string()),
            Screen::NotFound(_) => Route::NotFound,
        }
    }

    pub fn render(&self) -> String {
        let body = match self {
            Screen::Login(screen) => screen.render(),
            Screen::Home(screen) => screen.render(),
            Screen::Jobs(screen) => screen.render(),
            Screen::JobDetails(screen) => screen.render(),
            Screen::NotFound(screen) => screen.render(),
        };

        let route = self.route();
        if route.is_protected() {
            format!("{}\n\n{}", Header::render(&route), body)
        } else {
            body
        }
    }
}
