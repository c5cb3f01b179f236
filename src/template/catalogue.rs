//! Static table of templates, keyed by their path inside the generated project.

use crate::project_type::Bundle;

/// A template body and the project-relative path it renders to.
#[derive(Debug, Clone, Copy)]
pub struct TemplateEntry {
    pub path: &'static str,
    pub body: &'static str,
}

macro_rules! entry {
    ($path:literal, $template:literal) => {
        TemplateEntry {
            path: $path,
            body: include_str!(concat!("../../templates/", $template)),
        }
    };
}

/// Slash-command prompts under `.claude/commands`.
pub const COMMANDS: &[TemplateEntry] = &[
    entry!(".claude/commands/dev/implement_feature_10x.md", "commands/dev/implement_feature_10x.md.j2"),
    entry!(".claude/commands/dev/debug_10x.md", "commands/dev/debug_10x.md.j2"),
    entry!(".claude/commands/dev/refactor_10x.md", "commands/dev/refactor_10x.md.j2"),
    entry!(".claude/commands/dev/architecture_10x.md", "commands/dev/architecture_10x.md.j2"),
    entry!(".claude/commands/qa/test_10x.md", "commands/qa/test_10x.md.j2"),
    entry!(".claude/commands/qa/review_10x.md", "commands/qa/review_10x.md.j2"),
    entry!(".claude/commands/qa/security_audit_10x.md", "commands/qa/security_audit_10x.md.j2"),
    entry!(".claude/commands/qa/performance_10x.md", "commands/qa/performance_10x.md.j2"),
    entry!(".claude/commands/docs/generate_docs_10x.md", "commands/docs/generate_docs_10x.md.j2"),
    entry!(".claude/commands/docs/update_knowledge_10x.md", "commands/docs/update_knowledge_10x.md.j2"),
    entry!(".claude/commands/git/smart_commit_10x.md", "commands/git/smart_commit_10x.md.j2"),
    entry!(".claude/commands/git/create_pr_10x.md", "commands/git/create_pr_10x.md.j2"),
    entry!(".claude/commands/git/branch_strategy_10x.md", "commands/git/branch_strategy_10x.md.j2"),
];

pub const CLAUDE_MD: TemplateEntry = entry!("CLAUDE.md", "CLAUDE.md.j2");

/// Rendered once per knowledge area; `{area}` is replaced in the path.
pub const KNOWLEDGE_README: TemplateEntry =
    entry!("Knowledge/{area}/README.md", "knowledge/README.md.j2");

/// One-line purpose of each knowledge area, fed to `KNOWLEDGE_README`.
pub fn knowledge_description(area: &str) -> &'static str {
    match area {
        "patterns" => "Reusable solutions that worked in this codebase.",
        "context" => "Decisions, their reasons and the constraints behind them.",
        "intelligence" => "Observations about how the codebase evolves and where work concentrates.",
        "security" => "Threats, recurring findings and the checks that catch them.",
        "performance" => "Baselines, measurements and optimizations that paid off.",
        "quality" => "Pitfalls, bug classes and the tests that guard against them.",
        "documentation" => "Architecture notes and documentation conventions.",
        "git" => "Branching, commit and release conventions.",
        _ => "Project knowledge.",
    }
}

const TYPESCRIPT: &[TemplateEntry] = &[
    entry!("package.json", "bundles/typescript/package.json.j2"),
    entry!("tsconfig.json", "bundles/typescript/tsconfig.json.j2"),
    entry!("src/index.ts", "bundles/typescript/index.ts.j2"),
];

const NODEJS: &[TemplateEntry] = &[
    entry!("package.json", "bundles/nodejs/package.json.j2"),
    entry!("src/index.js", "bundles/nodejs/index.js.j2"),
];

const REACT: &[TemplateEntry] = &[
    entry!("package.json", "bundles/react/package.json.j2"),
    entry!("public/index.html", "bundles/react/index.html.j2"),
    entry!("src/App.jsx", "bundles/react/App.jsx.j2"),
];

const PYTHON: &[TemplateEntry] = &[
    entry!("requirements.txt", "bundles/python/requirements.txt.j2"),
    entry!("setup.py", "bundles/python/setup.py.j2"),
    entry!("pyproject.toml", "bundles/python/pyproject.toml.j2"),
];

const GENERIC: &[TemplateEntry] = &[entry!("README.md", "bundles/generic/README.md.j2")];

/// Boilerplate files emitted for a bundle.
pub fn bundle_entries(bundle: Bundle) -> &'static [TemplateEntry] {
    match bundle {
        Bundle::Typescript => TYPESCRIPT,
        Bundle::Nodejs => NODEJS,
        Bundle::React => REACT,
        Bundle::Python => PYTHON,
        Bundle::Generic => GENERIC,
    }
}
