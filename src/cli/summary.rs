use crate::error::Result;
use std::{
    io::{self, Write},
    path::PathBuf,
};

/// What a finished run reports to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub project_root: PathBuf,
    pub project_name: String,
    pub project_type: String,
    pub mcps: Vec<String>,
    pub files_written: usize,
    pub files_skipped: usize,
    /// Id of the bootstrap commit; `None` on dry runs.
    pub commit: Option<String>,
    pub dry_run: bool,
    /// Whether the project was created by this run (`new`) or enhanced (`local`).
    pub created: bool,
}

pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    let banner = match (summary.dry_run, summary.created) {
        (true, _) => "Dry run complete, nothing was written.",
        (false, true) => "10X agentic coding environment created.",
        (false, false) => "10X agentic coding environment added.",
    };
    let mcps = if summary.mcps.is_empty() {
        "(none)".to_string()
    } else {
        summary.mcps.join(", ")
    };

    writeln!(out, "{banner}")?;
    writeln!(out)?;
    writeln!(out, "  Project:   {}", summary.project_name)?;
    writeln!(out, "  Location:  {}", summary.project_root.display())?;
    writeln!(out, "  Type:      {}", summary.project_type)?;
    writeln!(out, "  MCPs:      {mcps}")?;
    writeln!(out, "  Files:     {} written, {} skipped", summary.files_written, summary.files_skipped)?;
    if let Some(commit) = &summary.commit {
        writeln!(out, "  Commit:    {commit}")?;
    }

    if !summary.dry_run {
        writeln!(out)?;
        writeln!(out, "Next steps:")?;
        if summary.created {
            writeln!(out, "  cd {}", summary.project_root.display())?;
        }
        writeln!(out, "  Review CLAUDE.md and fill in the Knowledge/ guides")?;
        writeln!(out, "  Run /dev:implement_feature_10x to start building")?;
    }
    Ok(())
}

/// Prints the summary to stdout.
pub fn print_summary(summary: &Summary) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out, summary)?;
    Ok(())
}
