//! Command dispatch and handler modules.

mod conflicts;
mod xml;

use std::io::Read;
use std::path::Path;

use miette::Result;

use enforcer_util::errors::EnforcerError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Conflicts { file, json } => conflicts::exec(file.as_deref(), json),
        Command::Xml {
            file,
            only,
            indent,
            config,
        } => xml::exec(file.as_deref(), only, indent, config.as_deref()),
    }
}

/// Read the Maven output from `file`, or from stdin when it is absent or `-`.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            tracing::debug!("reading Maven output from {}", path.display());
            Ok(std::fs::read_to_string(path).map_err(EnforcerError::Io)?)
        }
        _ => {
            tracing::debug!("reading Maven output from stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(EnforcerError::Io)?;
            Ok(buf)
        }
    }
}
