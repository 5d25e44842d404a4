//! # UserAPI Config
//!
//! Configuration management for the user API.
//! Supports layered configuration from files and environment variables.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
