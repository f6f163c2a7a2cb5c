//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `mood` - Mood journal entries, their value objects and statistics
//! - `client_error` - Error reports forwarded by browser clients

pub mod client_error;
pub mod foundation;
pub mod mood;
