//! Parser for Maven Enforcer console output.
//!
//! Input is the raw text of a failed `mvn` run. Only lines carrying the
//! `[ERROR]` marker are considered. Those lines are split into sections,
//! one per dependency path, at every `and` separator and at every rule
//! header (`Dependency convergence error for ...`,
//! `Require upper bound dependencies error for ...`). Each section is then
//! read line by line against the coordinate grammar in [`parse_line`];
//! lines that are not coordinates are skipped.

use once_cell::sync::Lazy;
use regex::Regex;

use enforcer_util::errors::ParseError;

use crate::conflict::{Conflict, ConflictTable, PathEntry};
use crate::dependency::Coordinate;

const ERROR_MARKER: &str = "[ERROR]";
const SEPARATOR: &str = "and";
const STRAY_FRAGMENTS: &[&str] = &["]", ","];
const SECTION_HEADERS: &[&str] = &[
    "Dependency convergence error",
    "Require upper bound dependencies error",
];

/// ANSI CSI sequences, as printed by Maven with colour enabled.
static ANSI_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]").expect("valid ANSI pattern"));

/// `g:a[:type]:version[:scope] (managed) <-- g:a[:type]:required[:scope]`
static UPPER_BOUND_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<coord>[\w.-]+(?::[\w.-]+){2,})[^<]*<--\s*(?P<required>[\w.-]+(?::[\w.-]+){2,})")
        .expect("valid upper bound pattern")
});

/// `g:a[:type[:classifier]]:version[:scope][ [scope]]`
static STANDARD_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<coord>[\w.-]+(?::[\w.-]+){2,})(?:\s*\[(?P<scope>\w+)\])?")
        .expect("valid coordinate pattern")
});

/// Parse Enforcer console output into conflicts, in first-seen order.
pub fn parse(input: &str) -> Result<Vec<Conflict>, ParseError> {
    let lines: Vec<String> = input
        .lines()
        .map(|line| ANSI_ESCAPE.replace_all(line, "").into_owned())
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let cleaned: Vec<&str> = lines.iter().filter_map(|line| strip_marker(line)).collect();
    if cleaned.is_empty() {
        return Err(ParseError::NoErrorMarkers);
    }

    let sections = split_sections(&cleaned);
    if sections.is_empty() {
        return Err(ParseError::NoParsablePaths);
    }
    tracing::debug!("found {} dependency path sections", sections.len());

    let mut table = ConflictTable::new();
    for section in &sections {
        let path: Vec<PathEntry> = section.iter().filter_map(|line| parse_line(line)).collect();
        if path.is_empty() {
            tracing::trace!("section without coordinates: {:?}", section.first());
            continue;
        }
        table.insert(path);
    }

    if table.is_empty() {
        return Err(ParseError::NoConflictsFound);
    }
    tracing::debug!("grouped paths into {} conflicts", table.len());
    Ok(table.into_conflicts())
}

/// The text after the first `[ERROR]` marker, trimmed. `None` for lines
/// without the marker.
fn strip_marker(line: &str) -> Option<&str> {
    line.split_once(ERROR_MARKER).map(|(_, rest)| rest.trim())
}

/// Upper-bound reports join their entries with `, `, so a header may be
/// preceded by a comma.
fn is_boundary(line: &str) -> bool {
    let line = line.trim_start_matches([',', ' ']);
    line == SEPARATOR || SECTION_HEADERS.iter().any(|h| line.starts_with(h))
}

/// Group cleaned lines into non-empty sections. Boundary lines, blank lines
/// and lone `]` or `,` fragments never end up inside a section.
fn split_sections<'a>(lines: &[&'a str]) -> Vec<Vec<&'a str>> {
    let mut sections = Vec::new();
    let mut current: Vec<&'a str> = Vec::new();

    for &line in lines {
        if is_boundary(line) {
            if !current.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
        } else if !line.is_empty() && !STRAY_FRAGMENTS.contains(&line) {
            current.push(line);
        }
    }
    if !current.is_empty() {
        sections.push(current);
    }

    sections
}

/// Read one cleaned line as a path entry.
///
/// Tree-drawing prefixes (`+-`, `\-`, `|`, spaces) are stripped first. The
/// upper-bound form is tried before the standard form; anything else,
/// including prose such as `Failed to execute goal ...`, yields `None`.
pub fn parse_line(line: &str) -> Option<PathEntry> {
    let content = line.trim_start_matches(['|', ' ', '+', '-', '\\']);

    if let Some(caps) = UPPER_BOUND_LINE.captures(content) {
        let coord = Coordinate::parse(caps.name("coord")?.as_str())?;
        let required = Coordinate::parse(caps.name("required")?.as_str())?;
        let mut node = coord.to_node();
        node.scope = None;
        return Some(PathEntry::with_required(node, required.version));
    }

    let caps = STANDARD_LINE.captures(content)?;
    let coord = Coordinate::parse(caps.name("coord")?.as_str())?;
    let mut node = coord.to_node();
    if let Some(scope) = caps.name("scope") {
        node.scope = Some(scope.as_str().to_string());
    }
    Some(PathEntry::new(node))
}
