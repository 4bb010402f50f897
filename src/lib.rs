// src/lib.rs
//! Terminal client for the Jobby job-search API.
//!
//! Screens hold their own request trackers and render as plain text; the
//! [`app::App`] shell routes between them behind the session guard.

pub mod app;
pub mod cli;
pub mod core;
pub mod error;
pub mod filters;
pub mod request_state;
pub mod router;
pub mod screens;
pub mod types;
pub mod utils;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{Action, App, Step};
pub use error::ApiError;
pub use filters::{EmploymentType, FilterSelection, JobQuery, SalaryTier};
pub use request_state::{RequestState, RequestTracker};
pub use router::{Navigation, Route, RouteGuard};
