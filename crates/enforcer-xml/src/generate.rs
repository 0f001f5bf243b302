//! Property and dependencyManagement fragment generation.
//!
//! Neither fragment carries its container element: the properties go inside
//! an existing `<properties>` block and the dependencies inside
//! `<dependencyManagement><dependencies>`.

use std::collections::HashMap;

use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};

use enforcer_core::conflict::Conflict;

use crate::config::XmlConfig;

const PROPERTY_SUFFIX: &str = ".version";

/// The two XML fragments produced for a set of conflicts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedXml {
    pub properties: String,
    pub dependency_management: String,
}

impl GeneratedXml {
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.dependency_management.is_empty()
    }
}

/// Render conflicts with the default [`XmlConfig`].
pub fn generate(conflicts: &[Conflict]) -> GeneratedXml {
    generate_with(conflicts, &XmlConfig::default())
}

/// Render conflicts, one property and one `<dependency>` per conflict, in
/// input order. An empty slice gives two empty fragments.
pub fn generate_with(conflicts: &[Conflict], config: &XmlConfig) -> GeneratedXml {
    if conflicts.is_empty() {
        return GeneratedXml::default();
    }

    warn_on_collisions(conflicts);

    let pad = config.pad(1);

    let mut properties = vec![format!("<!-- {} -->", comment_text(&config.header))];
    properties.extend(conflicts.iter().map(|conflict| {
        let name = property_name(&conflict.target.artifact_id);
        format!(
            "{pad}<{name}>{}</{name}>",
            escape(conflict.highest_version.as_str())
        )
    }));

    let dependency_management = conflicts
        .iter()
        .map(|conflict| {
            let name = property_name(&conflict.target.artifact_id);
            [
                "<dependency>".to_string(),
                format!(
                    "{pad}<groupId>{}</groupId>",
                    escape(conflict.target.group_id.as_str())
                ),
                format!(
                    "{pad}<artifactId>{}</artifactId>",
                    escape(conflict.target.artifact_id.as_str())
                ),
                format!("{pad}<version>${{{}}}</version>", escape(name.as_str())),
                "</dependency>".to_string(),
            ]
            .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n");

    GeneratedXml {
        properties: properties.join("\n"),
        dependency_management,
    }
}

/// `protobuf-java-util` becomes `protobuf_java_util.version`.
///
/// Every character outside `[A-Za-z0-9]` is replaced by `_`, which also
/// makes the name a valid XML element name for any Maven artifactId.
pub fn property_name(artifact_id: &str) -> String {
    let stem: String = artifact_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{stem}{PROPERTY_SUFFIX}")
}

/// XML comments may not contain `--`.
fn comment_text(header: &str) -> String {
    let mut text = header.to_string();
    while text.contains("--") {
        text = text.replace("--", "- -");
    }
    text
}

fn warn_on_collisions(conflicts: &[Conflict]) {
    let mut seen: HashMap<String, String> = HashMap::new();
    for conflict in conflicts {
        let name = property_name(&conflict.target.artifact_id);
        let key = conflict.key();
        match seen.get(&name) {
            Some(first) if *first != key => {
                tracing::warn!("property {name} is shared by {first} and {key}");
            }
            Some(_) => {}
            None => {
                seen.insert(name, key);
            }
        }
    }
}
