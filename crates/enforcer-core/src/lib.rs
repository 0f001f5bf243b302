//! Core of enforcer-helper.
//!
//! This crate turns the console output of a failed Maven Enforcer run
//! (`DependencyConvergence` or `RequireUpperBoundDeps`) into a list of
//! [`conflict::Conflict`] records, one per `groupId:artifactId` pair, each
//! carrying every dependency path that reached it and the version to pin.
//!
//! This crate is intentionally free of file, network and environment access.

pub mod conflict;
pub mod dependency;
pub mod outcome;
pub mod parser;
pub mod version;

pub use parser::parse;
