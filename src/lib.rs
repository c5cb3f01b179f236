/// Handles argument parsing and orchestrates runs.
pub mod cli;

/// The `.claude/config.json` document.
pub mod config;

pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Resolved options shared by the whole pipeline.
pub mod options;

/// Project types and detection of existing projects.
pub mod project_type;

/// User confirmation prompts.
pub mod prompt;

/// Template rendering functionality.
pub mod renderer;

/// The fixed directory skeleton.
pub mod skeleton;

/// Core template processing orchestration.
pub mod template;

/// Git bootstrapping.
pub mod vcs;
