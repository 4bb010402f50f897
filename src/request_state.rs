// src/request_state.rs
//! Lifecycle of one asynchronous data need: idle, pending, success or failure.

use tracing::debug;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Pending,
    Success(T),
    Failure(ApiError),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    pub fn label(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Pending => "pending",
            RequestState::Success(_) => "success",
            RequestState::Failure(_) => "failure",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RequestState::Failure(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            RequestState::Success(payload) => Some(payload),
            _ => None,
        }
    }
}

/// Handle returned by [`RequestTracker::begin`]; only the latest one may resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A request state plus a generation counter.
///
/// Every `begin` discards the previous payload or error and bumps the generation.
/// Completions carrying an older ticket are dropped, so the most recently issued
/// request always owns the state.
#[derive(Debug, Clone)]
pub struct RequestTracker<T> {
    name: &'static str,
    state: RequestState<T>,
    generation: u64,
}

impl<T> RequestTracker<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: RequestState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = RequestState::Pending;
        debug!(request = self.name, generation = self.generation, "request pending");
        Ticket(self.generation)
    }

    /// Apply a completed fetch. Returns `false` when the ticket is stale.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<T, ApiError>) -> bool {
        if ticket.0 != self.generation {
            debug!(
                request = self.name,
                stale = ticket.0,
                current = self.generation,
                "dropping stale response"
            );
            return false;
        }

        self.state = match outcome {
            Ok(payload) => RequestState::Success(payload),
            Err(e) => {
                debug!(request = self.name, error = %e, code = e.code(), "request failed");
                RequestState::Failure(e)
            }
        };
        debug!(request = self.name, state = self.state.label(), "request resolved");
        true
    }

    pub fn can_retry(&self) -> bool {
        self.state.is_failure()
    }
}
