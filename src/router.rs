// src/router.rs
//! Route table and the guard that keeps protected views behind a session token.

use std::fmt;

use tracing::{debug, info};

use crate::core::SessionStore;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const JOBS_PATH: &str = "/jobs";
pub const NOT_FOUND_PATH: &str = "/not-found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
    Jobs,
    JobDetails(String),
    NotFound,
}

impl Route {
    /// Match a path against the route table. Query strings and fragments are
    /// ignored, a trailing slash is tolerated, anything else is `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Some(Route::Home),
            LOGIN_PATH => Some(Route::Login),
            JOBS_PATH => Some(Route::Jobs),
            NOT_FOUND_PATH => Some(Route::NotFound),
            _ => Route::job_details(trimmed.strip_prefix("/jobs/")?),
        }
    }

    /// The details route for `id`, if it names exactly one path segment
    pub fn job_details(id: &str) -> Option<Route> {
        let valid = !id.trim().is_empty()
            && id != "."
            && id != ".."
            && !id.contains(['/', '?', '#']);
        valid.then(|| Route::JobDetails(id.to_string()))
    }

    /// Like [`Route::parse`], sending unmatched paths to the not-found view
    pub fn resolve(path: &str) -> Route {
        Route::parse(path).unwrap_or_else(|| {
            debug!("No route for {}, redirecting to {}", path, NOT_FOUND_PATH);
            Route::NotFound
        })
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => LOGIN_PATH.to_string(),
            Route::Home => HOME_PATH.to_string(),
            Route::Jobs => JOBS_PATH.to_string(),
            Route::JobDetails(id) => format!("{}/{}", JOBS_PATH, id),
            Route::NotFound => NOT_FOUND_PATH.to_string(),
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Home | Route::Jobs | Route::JobDetails(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

pub struct RouteGuard;

impl RouteGuard {
    pub fn check(route: Route, session: &SessionStore) -> Navigation {
        if route.is_protected() && !session.is_authenticated() {
            info!("No session token, redirecting {} to {}", route, LOGIN_PATH);
            return Navigation::Redirect(Route::Login);
        }
        Navigation::Render(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session_store::session_ttl;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/login"), Some(Route::Login));
        assert_eq!(Route::parse("/jobs/"), Some(Route::Jobs));
        assert_eq!(Route::parse("/jobs?search=rust"), Some(Route::Jobs));
        assert_eq!(
            Route::parse("/jobs/123"),
            Some(Route::JobDetails("123".to_string()))
        );
        assert_eq!(Route::parse("/not-found"), Some(Route::NotFound));
    }

    #[test]
    fn test_unknown_paths_resolve_to_not_found() {
        assert_eq!(Route::parse("/jobs/1/apply"), None);
        assert_eq!(Route::resolve("/settings"), Route::NotFound);
        assert_eq!(Route::resolve("jobs"), Route::NotFound);
    }

    #[test]
    fn test_job_ids_must_be_one_segment() {
        assert_eq!(
            Route::job_details("42"),
            Some(Route::JobDetails("42".to_string()))
        );
        assert_eq!(Route::job_details(""), None);
        assert_eq!(Route::job_details("  "), None);
        assert_eq!(Route::job_details(".."), None);
        assert_eq!(Route::job_details("../profile"), None);
        assert_eq!(Route::job_details("1?x=2"), None);
        assert_eq!(Route::resolve("/jobs/.."), Route::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        let route = Route::JobDetails("abc".to_string());
        assert_eq!(route.path(), "/jobs/abc");
        assert_eq!(Route::resolve(&route.path()), route);
    }

    #[test]
    fn test_guard_redirects_without_token() {
        let session = SessionStore::in_memory();
        assert_eq!(
            RouteGuard::check(Route::JobDetails("123".into()), &session),
            Navigation::Redirect(Route::Login)
        );
        assert_eq!(
            RouteGuard::check(Route::Home, &session),
            Navigation::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_guard_never_blocks_login_or_not_found() {
        let session = SessionStore::in_memory();
        assert_eq!(
            RouteGuard::check(Route::Login, &session),
            Navigation::Render(Route::Login)
        );
        assert_eq!(
            RouteGuard::check(Route::NotFound, &session),
            Navigation::Render(Route::NotFound)
        );
    }

    #[test]
    fn test_guard_allows_with_token() {
        let mut session = SessionStore::in_memory();
        session.set("token", session_ttl()).unwrap();
        assert_eq!(
            RouteGuard::check(Route::Jobs, &session),
            Navigation::Render(Route::Jobs)
        );
    }
}
