// src/screens/login.rs
use tracing::{info, warn};

use crate::core::JobsApi;
use crate::types::response::LoginRequest;
use crate::view;

#[derive(Debug, Default)]
pub struct LoginScreen {
    username: String,
    password: String,
    error_msg: Option<String>,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn error_msg(&self) -> Option<&str> {
        self.error_msg.as_deref()
    }

    /// Post the form. Returns the issued token on success; otherwise keeps the
    /// failure message for the form to show.
    pub async fn submit(&mut self, api: &dyn JobsApi) -> Option<String> {
        let request = LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        };

        match api.login(&request).await {
            Ok(token) => {
                info!("Login form accepted for {}", self.username);
                self.error_msg = None;
                self.password.clear();
                Some(token)
            }
            Err(e) => {
                warn!("Login form rejected ({}): {}", e.code(), e);
                self.error_msg = Some(e.user_message());
                None
            }
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            view::heading("Jobby"),
            String::new(),
            format!("USERNAME  {}", self.username),
            format!("PASSWORD  {}", "*".repeat(self.password.chars().count())),
            String::new(),
            "[submit] Login".to_string(),
        ];
        if let Some(msg) = &self.error_msg {
            lines.push(format!("*{}", msg));
        }
        lines.join("\n")
    }
}
