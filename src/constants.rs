//! Constants used throughout the tenx application

/// Default project type when `--type` is omitted
pub const DEFAULT_PROJECT_TYPE: &str = "generic";

/// Default comma-separated MCP capability list
pub const DEFAULT_MCPS: &str = "websearch,fetch,github,memory,sqlite,filesystem";

/// Separator used when splitting the `--mcps` list
pub const MCP_SEPARATOR: char = ',';

/// Allowed project name pattern
pub const PROJECT_NAME_PATTERN: &str = r"^[A-Za-z0-9_-]+$";

/// Directory holding the agent command prompts and config
pub const CLAUDE_DIR: &str = ".claude";

/// Agent configuration file, relative to the project root
pub const CLAUDE_CONFIG_FILE: &str = ".claude/config.json";

/// Schema version recorded in `.claude/config.json`
pub const CONFIG_VERSION: &str = "2.0.0";

/// Git ignore file name
pub const GITIGNORE_FILE: &str = ".gitignore";

/// First line of the bootstrap commit message
pub const COMMIT_SUBJECT: &str = "feat: initialize 10X agentic coding environment";

/// Prefix of the staging directory used while generating a new project
pub const STAGING_PREFIX: &str = ".tenx-staging-";

/// Git identity environment overrides
pub mod git_env {
    pub const AUTHOR_NAME: &str = "GIT_AUTHOR_NAME";
    pub const AUTHOR_EMAIL: &str = "GIT_AUTHOR_EMAIL";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
