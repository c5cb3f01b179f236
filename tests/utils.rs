#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use std::fs;
use std::path::Path;
use tenx::cli::{LocalArgs, NewArgs, Runner};
use tenx::constants::DEFAULT_MCPS;
use tenx::vcs::Identity;
use walkdir::WalkDir;

pub const TEST_NAME: &str = "Test User";
pub const TEST_EMAIL: &str = "test@example.com";

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap()
}

/// A runner with a pinned identity and timestamp, so output is reproducible.
pub fn runner() -> Runner {
    Runner::new()
        .with_identity(Identity { name: TEST_NAME.to_string(), email: TEST_EMAIL.to_string() })
        .with_created(fixed_time())
}

pub fn new_args(project_name: &str, project_type: &str, parent: &Path) -> NewArgs {
    NewArgs {
        project_name: project_name.to_string(),
        project_type: project_type.to_string(),
        directory: Some(parent.to_path_buf()),
        mcps: vec![DEFAULT_MCPS.to_string()],
        verbose: 2,
        dry_run: false,
    }
}

pub fn local_args(dir: &Path) -> LocalArgs {
    LocalArgs {
        directory: Some(dir.to_path_buf()),
        mcps: vec![DEFAULT_MCPS.to_string()],
        force: false,
        non_interactive: true,
        verbose: 2,
        dry_run: false,
    }
}

pub fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path.as_ref())
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.as_ref().display()))
}

/// Number of entries directly inside `dir`.
pub fn entry_count(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let collect = |root: &Path| {
        WalkDir::new(root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
            .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
            .collect::<std::collections::BTreeSet<_>>()
    };
    let files1 = collect(dir1);
    let files2 = collect(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?}", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?}", file);
    }
    for file in files1.intersection(&files2) {
        let content1 = fs::read(dir1.join(file)).unwrap();
        let content2 = fs::read(dir2.join(file)).unwrap();
        if content1 != content2 {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", String::from_utf8_lossy(&content1));
            println!("  --- Expected content:\n{}", String::from_utf8_lossy(&content2));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts two generated projects are identical, ignoring their git metadata.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    for root in [actual, expected] {
        let git_dir = root.join(".git");
        if git_dir.exists() {
            fs::remove_dir_all(git_dir).unwrap();
        }
    }

    let result = dir_diff::is_different(actual, expected);
    match result {
        Ok(different) => {
            if different {
                print_dir_diff(actual, expected);
                panic!("Directories differ. See above for details.");
            }
        }
        Err(e) => {
            debug!("Error comparing directories: {e:?}");
        }
    }
    assert!(!dir_diff::is_different(actual, expected).unwrap());
}
