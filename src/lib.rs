//! # equipdesk
//!
//! Equipment support assistant: a local Ollama model, driven by a rig-core
//! agent, answering questions with three equipment tools.
//!
//! ## Features
//!
//! - **Equipment tools:** technical lookup, service history, vendor email (simulated)
//! - **Local models:** any Ollama model, selected by configuration
//! - **Web form:** single-question page plus a small JSON API
//! - **CLI:** ask questions or run tools directly from the terminal

pub mod agent;
pub mod config;
pub mod equipment;
pub mod error;
pub mod logging;
pub mod tools;
pub mod web;

pub use config::Config;
pub use error::{Error, Result};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = env!("CARGO_PKG_NAME");
