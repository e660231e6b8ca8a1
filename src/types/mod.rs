//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - auth: wire types for the authentication endpoints
//! - common: shared UI state types
//! - form: form lifecycle and field validation

pub mod auth;
pub mod common;
pub mod form;

pub use auth::*;
pub use common::*;
pub use form::*;
