//! # UserAPI REST
//!
//! REST API layer using Axum. Maps each HTTP request onto exactly one
//! repository operation and each outcome onto the wire contract of the
//! users API.

pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
