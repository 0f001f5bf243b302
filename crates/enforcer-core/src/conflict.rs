//! Conflict records and the table that groups dependency paths into them.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dependency::DependencyNode;
use crate::version::find_highest_version;

/// One parsed line of a dependency path.
///
/// `required_version` is only set for `RequireUpperBoundDeps` lines
/// (`... (managed) <-- group:artifact:required`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub node: DependencyNode,
    pub required_version: Option<String>,
}

impl PathEntry {
    pub fn new(node: DependencyNode) -> Self {
        Self {
            node,
            required_version: None,
        }
    }

    pub fn with_required(node: DependencyNode, required_version: impl Into<String>) -> Self {
        Self {
            node,
            required_version: Some(required_version.into()),
        }
    }

    /// The version this entry asks for: the required upper bound if present,
    /// otherwise the parsed version.
    pub fn effective_version(&self) -> &str {
        self.required_version
            .as_deref()
            .unwrap_or(&self.node.version)
    }

    /// Parsed version first, then the required version if it differs.
    fn observed_versions(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.node.version.as_str()).chain(
            self.required_version
                .as_deref()
                .filter(|required| *required != self.node.version),
        )
    }
}

/// One artifact that appears with more than one version across the parsed
/// paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    /// The coordinate to pin, carrying the selected version.
    pub target: DependencyNode,
    /// Every path that reached this artifact, root first, in input order.
    pub paths: Vec<Vec<DependencyNode>>,
    /// Distinct versions in order of first sighting.
    pub versions: Vec<String>,
    /// The numerically greatest member of `versions`.
    pub highest_version: String,
}

impl Conflict {
    /// Start a conflict from its first path. The last entry is the target.
    ///
    /// Returns `None` for an empty path.
    pub fn from_path(path: Vec<PathEntry>) -> Option<Self> {
        let last = path.last()?;

        let mut target = last.node.clone();
        target.version = last.effective_version().to_string();

        let versions: Vec<String> = last.observed_versions().map(str::to_string).collect();
        let highest_version = find_highest_version(&versions)
            .unwrap_or(&target.version)
            .to_string();

        Some(Self {
            target,
            paths: vec![strip_path(path)],
            versions,
            highest_version,
        })
    }

    /// Fold a later path to the same `groupId:artifactId` into this record.
    ///
    /// The target's coordinates are never touched; only its version follows
    /// the recomputed highest version.
    pub fn merge(&mut self, path: Vec<PathEntry>) {
        let Some(last) = path.last() else {
            return;
        };

        let mut added = false;
        for version in last.observed_versions() {
            if !self.versions.iter().any(|v| v == version) {
                self.versions.push(version.to_string());
                added = true;
            }
        }

        if added {
            if let Some(highest) = find_highest_version(&self.versions) {
                self.highest_version = highest.to_string();
            }
        }
        self.target.version = self.highest_version.clone();
        self.paths.push(strip_path(path));
    }

    /// `groupId:artifactId` of the target.
    pub fn key(&self) -> String {
        self.target.key()
    }

    /// Whether more than one distinct version was seen.
    pub fn is_divergent(&self) -> bool {
        self.versions.len() > 1
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} (versions: {})",
            self.key(),
            self.highest_version,
            self.versions.join(", ")
        )
    }
}

fn strip_path(path: Vec<PathEntry>) -> Vec<DependencyNode> {
    path.into_iter().map(|entry| entry.node).collect()
}

/// Conflicts keyed by `groupId:artifactId`, kept in first-seen order.
#[derive(Debug, Default)]
pub struct ConflictTable {
    conflicts: Vec<Conflict>,
    index: HashMap<String, usize>,
}

impl ConflictTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path: creates a conflict for a new key, merges into the
    /// existing one otherwise. Empty paths are ignored.
    pub fn insert(&mut self, path: Vec<PathEntry>) {
        let Some(last) = path.last() else {
            return;
        };
        let key = last.node.key();

        match self.index.get(&key) {
            Some(&idx) => {
                tracing::trace!("merging path into {key}");
                self.conflicts[idx].merge(path);
            }
            None => {
                if let Some(conflict) = Conflict::from_path(path) {
                    tracing::trace!("new conflict {key}");
                    self.index.insert(key, self.conflicts.len());
                    self.conflicts.push(conflict);
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Conflict> {
        self.index.get(key).map(|&idx| &self.conflicts[idx])
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    pub fn into_conflicts(self) -> Vec<Conflict> {
        self.conflicts
    }
}
