//! Shared utilities for enforcer-helper.
//!
//! This crate provides the cross-cutting concerns used by the other crates:
//! the parse error taxonomy, the unified error type for the binary, and
//! terminal status lines.

pub mod errors;
pub mod progress;
