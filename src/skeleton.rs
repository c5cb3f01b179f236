//! The fixed directory skeleton of an agentic coding environment.

use crate::constants::CLAUDE_DIR;
use std::path::PathBuf;

/// Source directories, only created for brand new projects.
pub const SOURCE_DIRS: &[&str] = &["src", "tests", "docs"];

/// Command groups under `.claude/commands`.
pub const COMMAND_GROUPS: &[&str] = &["dev", "qa", "docs", "git"];

/// Knowledge base areas under `Knowledge/`.
pub const KNOWLEDGE_AREAS: &[&str] = &[
    "patterns",
    "context",
    "intelligence",
    "security",
    "performance",
    "quality",
    "documentation",
    "git",
];

/// Instruction areas under `Instructions/`.
pub const INSTRUCTION_AREAS: &[&str] =
    &["development", "testing", "deployment", "optimization"];

/// Which flavour of skeleton to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// A fresh project with source directories.
    NewProject,
    /// An existing project; only the agent directories are added.
    Existing,
}

/// Lists skeleton directories relative to the project root, parents first.
pub fn directories(layout: Layout) -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if layout == Layout::NewProject {
        dirs.extend(SOURCE_DIRS.iter().map(PathBuf::from));
    }

    let commands = PathBuf::from(CLAUDE_DIR).join("commands");
    dirs.push(PathBuf::from(CLAUDE_DIR));
    dirs.push(commands.clone());
    dirs.extend(COMMAND_GROUPS.iter().map(|group| commands.join(group)));

    dirs.push(PathBuf::from("Knowledge"));
    dirs.extend(KNOWLEDGE_AREAS.iter().map(|area| PathBuf::from("Knowledge").join(area)));

    dirs.push(PathBuf::from("Instructions"));
    dirs.extend(
        INSTRUCTION_AREAS.iter().map(|area| PathBuf::from("Instructions").join(area)),
    );

    dirs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_projects_get_source_dirs() {
        let dirs = directories(Layout::NewProject);
        for dir in ["src", "tests", "docs", ".claude/commands/git", "Knowledge/security"] {
            assert!(dirs.contains(&PathBuf::from(dir)), "missing {dir}");
        }
    }

    #[test]
    fn existing_projects_skip_source_dirs() {
        let dirs = directories(Layout::Existing);
        assert!(!dirs.contains(&PathBuf::from("src")));
        assert!(dirs.contains(&PathBuf::from("Instructions/optimization")));
    }

    #[test]
    fn parents_precede_children() {
        let dirs = directories(Layout::NewProject);
        for (i, dir) in dirs.iter().enumerate() {
            if let Some(parent) = dir.parent().filter(|p| !p.as_os_str().is_empty()) {
                let pos = dirs.iter().position(|d| d == parent).unwrap();
                assert!(pos < i, "{} listed before its parent", dir.display());
            }
        }
    }

    #[test]
    fn skeleton_size() {
        assert_eq!(
            directories(Layout::NewProject).len(),
            3 + 2 + COMMAND_GROUPS.len() + 1 + KNOWLEDGE_AREAS.len() + 1 + INSTRUCTION_AREAS.len()
        );
    }
}
