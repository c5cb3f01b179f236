use git2::{Repository, StatusOptions};
use serde_json::json;
use std::fs;
use tenx::constants::COMMIT_SUBJECT;
use tenx::error::Error;
use test_log::test;
mod utils;
use utils::{assert_same_tree, entry_count, new_args, read, runner, TEST_EMAIL};

const COMMANDS: &[&str] = &[
    ".claude/commands/dev/implement_feature_10x.md",
    ".claude/commands/dev/debug_10x.md",
    ".claude/commands/dev/refactor_10x.md",
    ".claude/commands/dev/architecture_10x.md",
    ".claude/commands/qa/test_10x.md",
    ".claude/commands/qa/review_10x.md",
    ".claude/commands/qa/security_audit_10x.md",
    ".claude/commands/qa/performance_10x.md",
    ".claude/commands/docs/generate_docs_10x.md",
    ".claude/commands/docs/update_knowledge_10x.md",
    ".claude/commands/git/smart_commit_10x.md",
    ".claude/commands/git/create_pr_10x.md",
    ".claude/commands/git/branch_strategy_10x.md",
];

#[test]
fn creates_environment_skeleton() {
    let parent = tempfile::tempdir().unwrap();
    let summary = runner().run_new(&new_args("demo", "generic", parent.path())).unwrap();
    let root = parent.path().join("demo");

    assert_eq!(summary.project_root, root);
    assert!(summary.created);
    assert!(summary.commit.is_some());

    for dir in ["src", "tests", "docs", "Instructions/testing", "Knowledge/patterns"] {
        assert!(root.join(dir).is_dir(), "missing directory {dir}");
    }
    for command in COMMANDS {
        assert!(root.join(command).is_file(), "missing command {command}");
    }
    assert!(root.join("Knowledge/git/README.md").is_file());
    assert!(read(root.join("CLAUDE.md")).starts_with("# demo\n"));
}

#[test]
fn dispatches_bundles_by_type() {
    let cases: &[(&str, &[&str], &[&str])] = &[
        (
            "typescript",
            &["package.json", "tsconfig.json", "src/index.ts"],
            &["requirements.txt", "README.md"],
        ),
        ("nodejs", &["package.json", "src/index.js"], &["tsconfig.json", "README.md"]),
        ("react", &["package.json", "public/index.html", "src/App.jsx"], &["tsconfig.json"]),
        (
            "python",
            &["requirements.txt", "setup.py", "pyproject.toml"],
            &["package.json", "README.md"],
        ),
        ("generic", &["README.md"], &["package.json", "requirements.txt"]),
        ("cobol", &["README.md"], &["package.json", "requirements.txt"]),
    ];

    for (project_type, present, absent) in cases {
        let parent = tempfile::tempdir().unwrap();
        runner().run_new(&new_args("demo", project_type, parent.path())).unwrap();
        let root = parent.path().join("demo");

        for file in *present {
            assert!(root.join(file).is_file(), "{project_type}: missing {file}");
        }
        for file in *absent {
            assert!(!root.join(file).exists(), "{project_type}: unexpected {file}");
        }
    }
}

#[test]
fn same_options_produce_identical_trees() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    runner().run_new(&new_args("demo", "typescript", first.path())).unwrap();
    runner().run_new(&new_args("demo", "typescript", second.path())).unwrap();

    assert_same_tree(&first.path().join("demo"), &second.path().join("demo"));
}

#[test]
fn passes_mcps_through_in_order() {
    let parent = tempfile::tempdir().unwrap();
    let mut args = new_args("demo", "generic", parent.path());
    args.mcps = vec!["sqlite,fetch".to_string(), "memory".to_string()];
    let summary = runner().run_new(&args).unwrap();

    assert_eq!(summary.mcps, vec!["sqlite", "fetch", "memory"]);

    let root = parent.path().join("demo");
    let config: serde_json::Value =
        serde_json::from_str(&read(root.join(".claude/config.json"))).unwrap();
    assert_eq!(config["mcps"], json!(["sqlite", "fetch", "memory"]));
    assert_eq!(config["created"], "2024-05-06T07:08:09Z");

    let claude_md = read(root.join("CLAUDE.md"));
    assert!(claude_md.contains("- `sqlite`\n- `fetch`\n- `memory`\n"));
}

#[test]
fn mcp_entries_pass_through_untrimmed() {
    let parent = tempfile::tempdir().unwrap();
    let mut args = new_args("demo", "generic", parent.path());
    args.mcps = vec!["a, b".to_string()];
    runner().run_new(&args).unwrap();

    let config: serde_json::Value =
        serde_json::from_str(&read(parent.path().join("demo/.claude/config.json"))).unwrap();
    assert_eq!(config["mcps"], json!(["a", " b"]));
}

#[test]
fn commits_everything_exactly_once() {
    let parent = tempfile::tempdir().unwrap();
    runner().run_new(&new_args("demo", "python", parent.path())).unwrap();

    let repo = Repository::open(parent.path().join("demo")).unwrap();
    let mut revwalk = repo.revwalk().unwrap();
    revwalk.push_head().unwrap();
    assert_eq!(revwalk.count(), 1);

    let head = repo.head().unwrap().peel_to_commit().unwrap();
    assert!(head.message().unwrap().starts_with(COMMIT_SUBJECT));
    assert_eq!(head.author().email(), Some(TEST_EMAIL));

    let mut status_options = StatusOptions::new();
    status_options.include_untracked(true);
    assert!(repo.statuses(Some(&mut status_options)).unwrap().is_empty());

    let tree = head.tree().unwrap();
    assert!(tree.get_name(".gitignore").is_some());
    assert!(tree.get_name("setup.py").is_some());
}

#[test]
fn leaves_no_staging_directory_behind() {
    let parent = tempfile::tempdir().unwrap();
    runner().run_new(&new_args("demo", "generic", parent.path())).unwrap();

    let entries: Vec<_> = fs::read_dir(parent.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["demo"]);
}

#[test]
fn refuses_existing_directory() {
    let parent = tempfile::tempdir().unwrap();
    let root = parent.path().join("demo");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("notes.txt"), "keep me").unwrap();

    let err = runner().run_new(&new_args("demo", "generic", parent.path())).unwrap_err();

    assert!(matches!(err, Error::OutputDirectoryExists { .. }));
    assert_eq!(read(root.join("notes.txt")), "keep me");
    assert_eq!(entry_count(&root), 1);
    assert_eq!(entry_count(parent.path()), 1);
}

#[test]
fn rejects_invalid_names_before_touching_disk() {
    let parent = tempfile::tempdir().unwrap();
    for name in ["my project", "../escape", "a/b", "app.js"] {
        let err = runner().run_new(&new_args(name, "generic", parent.path())).unwrap_err();
        assert!(matches!(err, Error::InvalidProjectName { .. }), "{name}");
    }
    assert_eq!(entry_count(parent.path()), 0);
}

#[test]
fn dry_run_writes_nothing() {
    let parent = tempfile::tempdir().unwrap();
    let mut args = new_args("demo", "react", parent.path());
    args.dry_run = true;

    let summary = runner().run_new(&args).unwrap();

    assert!(summary.dry_run);
    assert!(summary.commit.is_none());
    assert!(summary.files_written > COMMANDS.len());
    assert_eq!(entry_count(parent.path()), 0);
}

#[test]
fn python_project_end_to_end() {
    let parent = tempfile::tempdir().unwrap();
    runner().run_new(&new_args("data-tool", "python", parent.path())).unwrap();
    let root = parent.path().join("data-tool");

    assert!(read(root.join("requirements.txt")).contains("pytest"));
    assert!(read(root.join("setup.py")).contains(r#"name="data_tool""#));
    assert!(read(root.join("pyproject.toml")).contains("data_tool"));

    let config: serde_json::Value =
        serde_json::from_str(&read(root.join(".claude/config.json"))).unwrap();
    assert_eq!(config["projectType"], "python");
    assert_eq!(config["version"], "2.0.0");
    assert_eq!(config["features"]["knowledgeBase"], true);

    let claude_md = read(root.join("CLAUDE.md"));
    assert!(claude_md.contains("**python** project, created 2024-05-06"));
}
