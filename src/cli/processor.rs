use crate::{
    error::{Error, Result},
    ioutils::{create_dir_all, write_file},
    prompt::confirm,
    template::operation::TemplateOperation,
};

/// What to do when a generated file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Overwrite without asking.
    Always,
    /// Keep the existing file.
    Never,
    /// Ask for each existing file.
    Ask,
}

/// Counts of what a run did (or would do, on a dry run).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessReport {
    pub directories_created: usize,
    pub files_written: usize,
    pub files_skipped: usize,
}

/// Answers an overwrite question for the given prompt.
pub type ConfirmFn = fn(&str) -> Result<bool>;

fn ask(prompt: &str) -> Result<bool> {
    confirm(false, prompt)
}

/// Applies planned template operations to the filesystem
pub struct FileProcessor {
    overwrite: OverwritePolicy,
    dry_run: bool,
    confirm: ConfirmFn,
}

impl FileProcessor {
    pub fn new(overwrite: OverwritePolicy, dry_run: bool) -> Self {
        Self { overwrite, dry_run, confirm: ask }
    }

    /// Replaces the interactive prompt used by [`OverwritePolicy::Ask`].
    pub fn with_confirm(mut self, confirm: ConfirmFn) -> Self {
        self.confirm = confirm;
        self
    }

    /// Applies every operation in order. The first failure aborts the run.
    ///
    /// All overwrite questions are answered before anything is written, so a
    /// failed prompt leaves the target untouched.
    pub fn process_all(&self, operations: &[TemplateOperation]) -> Result<ProcessReport> {
        let decisions = operations
            .iter()
            .map(|operation| self.decide(operation))
            .collect::<Result<Vec<bool>>>()?;

        let mut report = ProcessReport::default();

        for (operation, allowed) in operations.iter().zip(decisions) {
            self.handle_file_operation(operation, allowed).map_err(|e| Error::ProcessError {
                source_path: operation.target_path().display().to_string(),
                e: format!("failed to {}: {e}", operation.error_context()),
            })?;

            match operation {
                TemplateOperation::Write { .. } if allowed => report.files_written += 1,
                TemplateOperation::Write { .. } => report.files_skipped += 1,
                TemplateOperation::CreateDirectory { target_exists: false, .. } => {
                    report.directories_created += 1
                }
                TemplateOperation::CreateDirectory { .. } => {}
            }

            log::info!("{}", operation.get_message(allowed, self.dry_run));
        }

        Ok(report)
    }

    /// Whether the operation may touch its target.
    fn decide(&self, operation: &TemplateOperation) -> Result<bool> {
        match operation {
            TemplateOperation::Write { target, target_exists: true, .. } => {
                self.confirm_overwrite(&format!("Overwrite {}?", target.display()))
            }
            _ => Ok(true),
        }
    }

    fn handle_file_operation(&self, file_operation: &TemplateOperation, allowed: bool) -> Result<()> {
        log::debug!("Handling file operation: {}", file_operation.error_context());
        if self.dry_run || !allowed {
            return Ok(());
        }
        match file_operation {
            TemplateOperation::Write { target, content, .. } => write_file(content, target),
            TemplateOperation::CreateDirectory { target, target_exists } => {
                if !target_exists {
                    create_dir_all(target)?;
                }
                Ok(())
            }
        }
    }

    fn confirm_overwrite(&self, prompt: &str) -> Result<bool> {
        match self.overwrite {
            OverwritePolicy::Always => Ok(true),
            OverwritePolicy::Never => Ok(false),
            // Dry runs never block on input
            OverwritePolicy::Ask if self.dry_run => Ok(false),
            OverwritePolicy::Ask => (self.confirm)(prompt),
        }
    }
}
