use crate::{
    cli::{
        processor::{FileProcessor, OverwritePolicy, ProcessReport},
        summary::{print_summary, Summary},
        Commands, LocalArgs, NewArgs,
    },
    constants::STAGING_PREFIX,
    error::Result,
    ioutils::{create_dir_all, get_output_dir, resolve_dir},
    options::{split_mcps, ProjectName, ScaffoldOptions},
    project_type::ProjectType,
    renderer::TemplateRenderer,
    skeleton::Layout,
    template::{get_template_engine, RenderedTree, TemplateProcessor},
    vcs::{self, Identity},
};
use anyhow::anyhow;
use chrono::{DateTime, Utc};
use std::{
    fs,
    io::{self, IsTerminal},
    path::Path,
};

/// Orchestrates a whole `new` or `local` run, from arguments to commit.
pub struct Runner {
    engine: Box<dyn TemplateRenderer>,
    identity: Option<Identity>,
    created: Option<DateTime<Utc>>,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner {
    /// A runner committing as `GIT_AUTHOR_NAME`/`GIT_AUTHOR_EMAIL` when both are
    /// set, and as the git configuration otherwise.
    pub fn new() -> Self {
        Self { engine: get_template_engine(), identity: Identity::from_env(), created: None }
    }

    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Pins the creation timestamp written into the generated files.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    fn options(
        &self,
        project_name: ProjectName,
        project_type: ProjectType,
        project_root: &Path,
        mcps: &[String],
    ) -> ScaffoldOptions {
        let options = ScaffoldOptions::new(
            project_name,
            project_type,
            project_root.to_path_buf(),
            split_mcps(mcps),
        );
        match self.created {
            Some(created) => options.with_created(created),
            None => options,
        }
    }

    /// Creates a new project directory with the full environment and boilerplate.
    pub fn run_new(&self, args: &NewArgs) -> Result<Summary> {
        let project_name: ProjectName = args.project_name.parse()?;
        let parent = resolve_dir(args.directory.as_deref())?;
        let project_root = get_output_dir(parent.join(project_name.as_str()))?;

        let options = self.options(
            project_name,
            ProjectType::from_flag(&args.project_type),
            &project_root,
            &args.mcps,
        );
        log::info!(
            "Creating {} project '{}' in '{}'",
            options.project_type,
            options.project_name,
            project_root.display()
        );

        let tree = TemplateProcessor::new(self.engine.as_ref(), &options)
            .render(Layout::NewProject)?;

        let (report, commit) = if args.dry_run {
            let report = FileProcessor::new(OverwritePolicy::Never, true)
                .process_all(&tree.operations(&project_root))?;
            log::info!("[DRY RUN] Would initialize git repository in '{}'", project_root.display());
            (report, None)
        } else {
            let report = self.materialize(&tree, &options)?;
            let oid = vcs::initialize(
                &project_root,
                &vcs::commit_message(&options),
                self.identity.as_ref(),
            )?;
            (report, Some(oid.to_string()))
        };

        Ok(summary(&options, report, commit, args.dry_run, true))
    }

    /// Writes the tree into a staging directory next to the project root and
    /// renames it into place, so a failed run leaves no partial project.
    fn materialize(&self, tree: &RenderedTree, options: &ScaffoldOptions) -> Result<ProcessReport> {
        let project_root = options.project_root();
        let parent = project_root
            .parent()
            .ok_or_else(|| anyhow!("'{}' has no parent directory", project_root.display()))?;
        create_dir_all(parent)?;

        let staging = tempfile::Builder::new().prefix(STAGING_PREFIX).tempdir_in(parent)?;
        let staged_root = staging.path().join(options.project_name.as_str());
        create_dir_all(&staged_root)?;
        log::debug!("Staging project in '{}'", staged_root.display());

        let report = FileProcessor::new(OverwritePolicy::Always, false)
            .process_all(&tree.operations(&staged_root))?;

        // The target may have appeared while rendering
        get_output_dir(project_root)?;
        fs::rename(&staged_root, project_root)?;
        log::debug!("Moved '{}' to '{}'", staged_root.display(), project_root.display());

        Ok(report)
    }

    /// Adds the environment to an existing project in place.
    pub fn run_local(&self, args: &LocalArgs) -> Result<Summary> {
        let project_root = resolve_dir(args.directory.as_deref())?;
        if !project_root.is_dir() {
            return Err(anyhow!("'{}' is not a directory", project_root.display()).into());
        }
        // Resolves `..` and symlinks so the basename names the project
        let project_root = project_root.canonicalize()?;

        let project_type = ProjectType::detect(&project_root);
        log::info!("Detected {project_type} project in '{}'", project_root.display());

        let options = self.options(
            ProjectName::from_dir_name(&project_root),
            project_type,
            &project_root,
            &args.mcps,
        );

        let tree =
            TemplateProcessor::new(self.engine.as_ref(), &options).render(Layout::Existing)?;

        let policy = overwrite_policy(args, io::stdin().is_terminal());
        let report = FileProcessor::new(policy, args.dry_run)
            .process_all(&tree.operations(&project_root))?;

        let commit = if args.dry_run {
            log::info!("[DRY RUN] Would commit the environment in '{}'", project_root.display());
            None
        } else {
            let oid = vcs::initialize(
                &project_root,
                &vcs::commit_message(&options),
                self.identity.as_ref(),
            )?;
            Some(oid.to_string())
        };

        Ok(summary(&options, report, commit, args.dry_run, false))
    }
}

/// Existing files are only asked about when someone can answer.
fn overwrite_policy(args: &LocalArgs, interactive: bool) -> OverwritePolicy {
    if args.force {
        OverwritePolicy::Always
    } else if args.non_interactive {
        OverwritePolicy::Never
    } else if !interactive {
        log::info!("stdin is not a terminal, keeping existing files");
        OverwritePolicy::Never
    } else {
        OverwritePolicy::Ask
    }
}

fn summary(
    options: &ScaffoldOptions,
    report: ProcessReport,
    commit: Option<String>,
    dry_run: bool,
    created: bool,
) -> Summary {
    Summary {
        project_root: options.project_root().to_path_buf(),
        project_name: options.project_name.to_string(),
        project_type: options.project_type.to_string(),
        mcps: options.mcps.clone(),
        files_written: report.files_written,
        files_skipped: report.files_skipped,
        commit,
        dry_run,
        created,
    }
}

/// Runs one command and prints its summary.
pub fn run(command: &Commands) -> Result<()> {
    let runner = Runner::new();
    let summary = match command {
        Commands::New(args) => runner.run_new(args)?,
        Commands::Local(args) => runner.run_local(args)?,
    };
    print_summary(&summary)
}
