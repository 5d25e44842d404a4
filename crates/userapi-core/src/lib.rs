//! # UserAPI Core
//!
//! Core types and error definitions shared by every layer of the user
//! API: the error taxonomy at the storage-access boundary, the result
//! alias, and the `User` domain entity.

pub mod domain;
pub mod error;
pub mod result;

pub use domain::*;
pub use error::*;
pub use result::*;
