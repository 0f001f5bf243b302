//! Handler for `enforcer-helper xml`.

use std::path::Path;

use miette::Result;

use enforcer_core::parse;
use enforcer_util::errors::EnforcerError;
use enforcer_util::progress;
use enforcer_xml::config::XmlConfig;
use enforcer_xml::generate_with;

use crate::cli::Fragment;

pub fn exec(
    file: Option<&Path>,
    only: Option<Fragment>,
    indent: Option<usize>,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(EnforcerError::Io)?;
            XmlConfig::from_toml_str(&content)?
        }
        None => XmlConfig::default(),
    };
    if let Some(indent) = indent {
        config = config.with_indent(indent);
    }

    let input = super::read_input(file)?;
    let conflicts = parse(&input).map_err(EnforcerError::from)?;
    progress::status("Parsed", &format!("{} conflicts", conflicts.len()));

    let xml = generate_with(&conflicts, &config);
    match only {
        Some(Fragment::Properties) => println!("{}", xml.properties),
        Some(Fragment::DependencyManagement) => println!("{}", xml.dependency_management),
        None => {
            println!("{}", xml.properties);
            println!();
            println!("{}", xml.dependency_management);
        }
    }
    Ok(())
}
