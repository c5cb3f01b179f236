//! The `.claude/config.json` written into every scaffolded project.

use crate::{constants::CONFIG_VERSION, error::Result, options::ScaffoldOptions};
use serde::{Deserialize, Serialize};

/// Feature switches advertised to the agent runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub knowledge_base: bool,
    pub smart_commands: bool,
    pub quality_gates: bool,
    pub git_integration: bool,
    pub pattern_learning: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            knowledge_base: true,
            smart_commands: true,
            quality_gates: true,
            git_integration: true,
            pattern_learning: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaudeConfig {
    pub project_type: String,
    pub mcps: Vec<String>,
    pub enhanced: bool,
    pub version: String,
    pub created: String,
    pub features: Features,
}

impl ClaudeConfig {
    pub fn from_options(options: &ScaffoldOptions) -> Self {
        Self {
            project_type: options.project_type.to_string(),
            mcps: options.mcps.clone(),
            enhanced: true,
            version: CONFIG_VERSION.to_string(),
            created: options.created_rfc3339(),
            features: Features::default(),
        }
    }

    /// Pretty JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
