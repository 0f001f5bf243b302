//! Handler for `enforcer-helper conflicts`.

use std::path::Path;

use miette::Result;

use enforcer_core::conflict::Conflict;
use enforcer_core::outcome::ParseOutcome;
use enforcer_core::parse;
use enforcer_util::errors::EnforcerError;
use enforcer_util::progress;

pub fn exec(file: Option<&Path>, json: bool) -> Result<()> {
    let input = super::read_input(file)?;
    let result = parse(&input);

    if json {
        let outcome = ParseOutcome::from(result.clone());
        let rendered =
            serde_json::to_string_pretty(&outcome).map_err(|e| EnforcerError::Generic {
                message: format!("Failed to serialize parse result: {e}"),
            })?;
        println!("{rendered}");
        result.map_err(EnforcerError::from)?;
        return Ok(());
    }

    let conflicts = result.map_err(EnforcerError::from)?;
    progress::status("Parsed", &format!("{} conflicts", conflicts.len()));

    for conflict in &conflicts {
        print_conflict(conflict);
    }
    Ok(())
}

fn print_conflict(conflict: &Conflict) {
    println!("{conflict}");
    for (i, path) in conflict.paths.iter().enumerate() {
        let chain: Vec<String> = path.iter().map(ToString::to_string).collect();
        println!("  path {}: {}", i + 1, chain.join(" > "));
    }
    if !conflict.is_divergent() {
        progress::status_warn(
            "Warning",
            &format!("{} was only seen at version {}", conflict.key(), conflict.highest_version),
        );
    }
}
