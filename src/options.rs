//! Resolved scaffolding options shared by every pipeline stage.

use crate::{
    constants::{MCP_SEPARATOR, PROJECT_NAME_PATTERN},
    error::{Error, Result},
    project_type::ProjectType,
};
use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde_json::json;
use std::{
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
    sync::OnceLock,
};

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(PROJECT_NAME_PATTERN).expect("project name pattern is a valid regex")
    })
}

/// A project name restricted to ASCII letters, digits, `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives a valid name from a directory basename, replacing every
    /// disallowed character with `-`.
    pub fn from_dir_name<P: AsRef<Path>>(dir: P) -> Self {
        let raw = dir
            .as_ref()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name: String = raw
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
            .collect();
        if name.is_empty() {
            Self("project".to_string())
        } else {
            Self(name)
        }
    }
}

impl FromStr for ProjectName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if name_pattern().is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::InvalidProjectName { name: s.to_string() })
        }
    }
}

impl Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits a comma-separated MCP list, keeping order. Entries are passed
/// through as written.
pub fn split_mcps<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.as_ref().split(MCP_SEPARATOR))
        .map(str::to_string)
        .collect()
}

/// Everything the pipeline needs to know about a single run.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    pub project_name: ProjectName,
    pub project_type: ProjectType,
    pub project_root: PathBuf,
    pub mcps: Vec<String>,
    pub created: DateTime<Utc>,
}

impl ScaffoldOptions {
    pub fn new(
        project_name: ProjectName,
        project_type: ProjectType,
        project_root: PathBuf,
        mcps: Vec<String>,
    ) -> Self {
        Self { project_name, project_type, project_root, mcps, created: Utc::now() }
    }

    /// Pins the creation timestamp, mainly for reproducible output.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn created_rfc3339(&self) -> String {
        self.created.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Variables exposed to every template.
    pub fn template_context(&self) -> serde_json::Value {
        json!({
            "project_name": self.project_name.as_str(),
            "project_type": self.project_type.as_str(),
            "mcps": self.mcps,
            "created": self.created_rfc3339(),
            "date": self.created.format("%Y-%m-%d").to_string(),
        })
    }
}
