//! Tagged parse result handed to presentation layers.

use serde::{Deserialize, Serialize};

use enforcer_util::errors::ParseError;

use crate::conflict::Conflict;

/// Either the conflicts found or the message explaining why there are none.
///
/// Serializes as `{"type": "success", "conflicts": [...]}` or
/// `{"type": "error", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParseOutcome {
    Success { conflicts: Vec<Conflict> },
    Error { message: String },
}

impl ParseOutcome {
    /// Run the parser and wrap its result.
    pub fn from_input(input: &str) -> Self {
        crate::parser::parse(input).into()
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn conflicts(&self) -> &[Conflict] {
        match self {
            Self::Success { conflicts } => conflicts,
            Self::Error { .. } => &[],
        }
    }
}

impl From<Result<Vec<Conflict>, ParseError>> for ParseOutcome {
    fn from(result: Result<Vec<Conflict>, ParseError>) -> Self {
        match result {
            Ok(conflicts) => Self::Success { conflicts },
            Err(e) => Self::Error {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_outcome_serializes_with_tag() {
        let outcome = ParseOutcome::from_input("");
        assert!(!outcome.is_success());
        assert!(outcome.conflicts().is_empty());

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["message"], "Empty input");
    }

    #[test]
    fn success_outcome_uses_camel_case_fields() {
        let input = "[ERROR] +-com.example:app:1.0\n[ERROR]   +-org.slf4j:slf4j-api:2.0.9 [compile]";
        let outcome = ParseOutcome::from_input(input);
        assert!(outcome.is_success());

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["type"], "success");
        let conflict = &json["conflicts"][0];
        assert_eq!(conflict["target"]["groupId"], "org.slf4j");
        assert_eq!(conflict["target"]["artifactId"], "slf4j-api");
        assert_eq!(conflict["highestVersion"], "2.0.9");
        assert_eq!(conflict["paths"][0][1]["scope"], "compile");
        assert!(conflict["paths"][0][0].get("scope").is_none());
    }
}
