// src/core/session_store.rs
//! Single owner of the bearer token. Nothing else reads or writes the session file.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::utils::{ensure_parent_dir, read_if_found};

pub const SESSION_TTL_DAYS: i64 = 30;

pub fn session_ttl() -> Duration {
    Duration::days(SESSION_TTL_DAYS)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub jwt_token: String,
    pub expires_at: DateTime<Utc>,
}

impl StoredSession {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug)]
pub struct SessionStore {
    path: Option<PathBuf>,
    current: Option<StoredSession>,
}

impl SessionStore {
    /// Session kept only for the lifetime of the process
    pub fn in_memory() -> Self {
        Self {
            path: None,
            current: None,
        }
    }

    /// Load the session persisted at `path`. A missing, unreadable or expired
    /// entry yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut store = Self {
            path: Some(path.clone()),
            current: None,
        };

        let Some(content) = read_if_found(&path)? else {
            debug!("No session file at {}", path.display());
            return Ok(store);
        };

        match serde_json::from_str::<StoredSession>(&content) {
            Ok(session) if session.is_expired(Utc::now()) => {
                info!("Stored session expired at {}", session.expires_at);
                store.clear()?;
            }
            Ok(session) => store.current = Some(session),
            Err(e) => {
                warn!("Ignoring corrupt session file {}: {}", path.display(), e);
                store.clear()?;
            }
        }

        Ok(store)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set(&mut self, token: &str, ttl: Duration) -> Result<()> {
        let session = StoredSession {
            jwt_token: token.to_string(),
            expires_at: Utc::now() + ttl,
        };

        if let Some(path) = &self.path {
            ensure_parent_dir(path)?;
            let content = serde_json::to_string_pretty(&session)?;
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write session file: {}", path.display()))?;
        }

        info!("Session stored, expires at {}", session.expires_at);
        self.current = Some(session);
        Ok(())
    }

    /// Current token, if one is stored and not yet expired
    pub fn get(&self) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|s| !s.is_expired(Utc::now()))
            .map(|s| s.jwt_token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.current = None;
        if let Some(path) = &self.path {
            match std::fs::remove_file(path) {
                Ok(()) => info!("Session cleared"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Failed to remove session file: {}", path.display())
                    })
                }
            }
        }
        Ok(())
    }
}
