// src/core/mod.rs
//! Core services shared by every screen: configuration, HTTP access, session

pub mod config_manager;
pub mod service_client;
pub mod session_store;

pub use config_manager::ConfigManager;
pub use service_client::{JobsApi, ServiceClient};
pub use session_store::SessionStore;
