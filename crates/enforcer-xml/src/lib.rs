//! Maven XML rendering for enforcer-helper.
//!
//! Turns [`enforcer_core::conflict::Conflict`] records into two fragments
//! ready to paste into a POM: version properties, and
//! `dependencyManagement` entries that reference those properties.

pub mod config;
pub mod generate;

pub use generate::{generate, generate_with, GeneratedXml};
