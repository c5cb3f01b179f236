//! Git bootstrapping for scaffolded projects.

use crate::{
    constants::{git_env, COMMIT_SUBJECT, GITIGNORE_FILE},
    error::{Error, Result},
    options::ScaffoldOptions,
};
use git2::{Commit, ErrorCode, IndexAddOption, Oid, Repository, Signature};
use std::{fs, path::Path};

/// Entries every scaffolded project ignores.
pub const GITIGNORE_ENTRIES: &[&str] = &[
    "# Dependencies",
    "node_modules/",
    ".venv/",
    "venv/",
    "# Build output",
    "dist/",
    "build/",
    "target/",
    "__pycache__/",
    "*.pyc",
    "# Environment",
    ".env",
    ".env.local",
    "# Editors and OS",
    ".idea/",
    ".vscode/",
    ".DS_Store",
    "# Logs and coverage",
    "*.log",
    "coverage/",
    ".claude/settings.local.json",
];

/// Commit author used instead of the git configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    /// Reads `GIT_AUTHOR_NAME` and `GIT_AUTHOR_EMAIL`; both must be set.
    pub fn from_env() -> Option<Self> {
        let name = std::env::var(git_env::AUTHOR_NAME).ok()?;
        let email = std::env::var(git_env::AUTHOR_EMAIL).ok()?;
        Some(Self { name, email })
    }
}

/// Full message of the bootstrap commit.
pub fn commit_message(options: &ScaffoldOptions) -> String {
    format!(
        "{COMMIT_SUBJECT}\n\n- Project type: {}\n- MCPs: {}\n",
        options.project_type,
        options.mcps.join(", ")
    )
}

/// The fixed `.gitignore` written into every project.
pub fn gitignore_content() -> String {
    let mut content = GITIGNORE_ENTRIES.join("\n");
    content.push('\n');
    content
}

/// (Re)writes `.gitignore` with the fixed content, replacing whatever was
/// there. Returns whether the file changed.
pub fn write_gitignore<P: AsRef<Path>>(root: P) -> Result<bool> {
    let path = root.as_ref().join(GITIGNORE_FILE);
    let content = gitignore_content();

    if path.is_file() && fs::read_to_string(&path)? == content {
        log::debug!("'{}' already up to date", path.display());
        return Ok(false);
    }

    fs::write(&path, content)?;
    log::info!("Writing to '{}'", path.display());
    Ok(true)
}

fn signature(repo: &Repository, identity: Option<&Identity>) -> Result<Signature<'static>> {
    match identity {
        Some(identity) => Ok(Signature::now(&identity.name, &identity.email)?),
        None => repo.signature().map_err(|e| {
            Error::GitError(format!(
                "no commit identity configured (set user.name and user.email): {}",
                e.message()
            ))
        }),
    }
}

fn head_commit(repo: &Repository) -> Result<Option<Commit<'_>>> {
    match repo.head() {
        Ok(head) => Ok(Some(head.peel_to_commit()?)),
        Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Initializes (or reopens) the repository at `root`, refreshes `.gitignore`,
/// stages everything and commits it.
///
/// # Returns
/// * `Result<Oid>` - The id of the new commit
pub fn initialize<P: AsRef<Path>>(
    root: P,
    message: &str,
    identity: Option<&Identity>,
) -> Result<Oid> {
    let root = root.as_ref();

    let repo = if root.join(".git").exists() {
        log::debug!("Using existing repository in '{}'", root.display());
        Repository::open(root)?
    } else {
        log::info!("Initializing git repository in '{}'", root.display());
        Repository::init(root)?
    };

    write_gitignore(root)?;

    let mut index = repo.index()?;
    index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
    index.write()?;
    let tree = repo.find_tree(index.write_tree()?)?;

    let signature = signature(&repo, identity)?;
    let parent = head_commit(&repo)?;
    let parents: Vec<&Commit> = parent.iter().collect();

    let oid =
        repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;
    log::info!("Created commit {oid}");
    Ok(oid)
}
