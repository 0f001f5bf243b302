use serde::{Deserialize, Serialize};

/// Scopes Maven prints as the last `:`-separated part of a coordinate.
const KNOWN_SCOPES: &[&str] = &["compile", "provided", "runtime", "test", "system", "import"];

/// One coordinate in a dependency path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyNode {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl DependencyNode {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            scope: None,
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// The `groupId:artifactId` pair conflicts are grouped by.
    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

impl std::fmt::Display for DependencyNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)?;
        if let Some(scope) = &self.scope {
            write!(f, " [{scope}]")?;
        }
        Ok(())
    }
}

/// A coordinate token as Enforcer prints it, resolved into its parts.
///
/// Enforcer output mixes several layouts:
///
/// ```text
/// group:artifact:version
/// group:artifact:version:scope
/// group:artifact:type:version[:scope]
/// group:artifact:type:classifier:version[:scope]
/// ```
///
/// A trailing part is only read as a scope when it is a known Maven scope
/// and at least four parts are present. The version is then the last
/// remaining part, which skips any type and classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate<'a> {
    pub group_id: &'a str,
    pub artifact_id: &'a str,
    pub version: &'a str,
    pub scope: Option<&'a str>,
}

impl<'a> Coordinate<'a> {
    /// Split a `:`-separated token. Returns `None` for fewer than three
    /// parts or any empty part.
    pub fn parse(token: &'a str) -> Option<Self> {
        let mut parts: Vec<&str> = token.split(':').collect();
        if parts.len() < 3 || parts.iter().any(|p| p.is_empty()) {
            return None;
        }

        let has_scope =
            parts.len() >= 4 && parts.last().is_some_and(|p| KNOWN_SCOPES.contains(p));
        let scope = if has_scope { parts.pop() } else { None };

        let version = *parts.last()?;
        Some(Self {
            group_id: parts[0],
            artifact_id: parts[1],
            version,
            scope,
        })
    }

    pub fn to_node(&self) -> DependencyNode {
        DependencyNode {
            group_id: self.group_id.to_string(),
            artifact_id: self.artifact_id.to_string(),
            version: self.version.to_string(),
            scope: self.scope.map(str::to_string),
        }
    }
}
