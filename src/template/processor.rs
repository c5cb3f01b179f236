use indexmap::{IndexMap, IndexSet};
use serde_json::json;
use std::path::{Path, PathBuf};

use crate::config::ClaudeConfig;
use crate::constants::CLAUDE_CONFIG_FILE;
use crate::error::Result;
use crate::options::ScaffoldOptions;
use crate::renderer::TemplateRenderer;
use crate::skeleton::{self, Layout, KNOWLEDGE_AREAS};

use super::catalogue::{self, TemplateEntry};
use super::operation::TemplateOperation;

/// The complete generated project: directories and file contents, relative to
/// the project root, in emission order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderedTree {
    directories: IndexSet<PathBuf>,
    files: IndexMap<PathBuf, String>,
}

impl RenderedTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_directory<P: Into<PathBuf>>(&mut self, dir: P) {
        self.directories.insert(dir.into());
    }

    /// Adds a file, registering its parent directories first.
    pub fn add_file<P: Into<PathBuf>>(&mut self, path: P, content: String) {
        let path = path.into();
        let mut parents: Vec<PathBuf> = path
            .ancestors()
            .skip(1)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .collect();
        parents.reverse();
        for parent in parents {
            self.add_directory(parent);
        }
        self.files.insert(path, content);
    }

    pub fn directories(&self) -> impl Iterator<Item = &PathBuf> {
        self.directories.iter()
    }

    pub fn files(&self) -> impl Iterator<Item = (&PathBuf, &String)> {
        self.files.iter()
    }

    pub fn file<P: AsRef<Path>>(&self, path: P) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn contains_file<P: AsRef<Path>>(&self, path: P) -> bool {
        self.files.contains_key(path.as_ref())
    }

    /// Plans the operations that materialize this tree under `output_root`.
    pub fn operations<P: AsRef<Path>>(&self, output_root: P) -> Vec<TemplateOperation> {
        let output_root = output_root.as_ref();
        let dirs = self.directories.iter().map(|dir| {
            let target = output_root.join(dir);
            let target_exists = target.is_dir();
            TemplateOperation::CreateDirectory { target, target_exists }
        });
        let files = self.files.iter().map(|(path, content)| {
            let target = output_root.join(path);
            let target_exists = target.exists();
            TemplateOperation::Write { target, content: content.clone(), target_exists }
        });
        dirs.chain(files).collect()
    }
}

/// Renders the template catalogue for one set of options.
pub struct TemplateProcessor<'a> {
    engine: &'a dyn TemplateRenderer,
    options: &'a ScaffoldOptions,
    context: serde_json::Value,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, options: &'a ScaffoldOptions) -> Self {
        Self { engine, options, context: options.template_context() }
    }

    /// Renders the whole project tree for the given layout.
    ///
    /// Brand new projects also receive the boilerplate bundle of their
    /// project type; existing projects only get the agent environment.
    pub fn render(&self, layout: Layout) -> Result<RenderedTree> {
        let mut tree = RenderedTree::new();

        for dir in skeleton::directories(layout) {
            tree.add_directory(dir);
        }

        for entry in catalogue::COMMANDS {
            self.render_entry(&mut tree, entry, &self.context)?;
        }
        self.render_entry(&mut tree, &catalogue::CLAUDE_MD, &self.context)?;

        for area in KNOWLEDGE_AREAS {
            let mut context = self.context.clone();
            context["area"] = json!(area);
            context["area_description"] = json!(catalogue::knowledge_description(area));
            let path = catalogue::KNOWLEDGE_README.path.replace("{area}", area);
            let content = self
                .engine
                .render(catalogue::KNOWLEDGE_README.body, &context, Some(&path))?;
            tree.add_file(path, content);
        }

        let config = ClaudeConfig::from_options(self.options);
        tree.add_file(CLAUDE_CONFIG_FILE, config.to_json()?);

        if layout == Layout::NewProject {
            let bundle = self.options.project_type.bundle();
            log::debug!(
                "Project type '{}' uses the {:?} bundle",
                self.options.project_type,
                bundle
            );
            for entry in catalogue::bundle_entries(bundle) {
                self.render_entry(&mut tree, entry, &self.context)?;
            }
        }

        Ok(tree)
    }

    fn render_entry(
        &self,
        tree: &mut RenderedTree,
        entry: &TemplateEntry,
        context: &serde_json::Value,
    ) -> Result<()> {
        log::trace!("Rendering '{}'", entry.path);
        let content = self.engine.render(entry.body, context, Some(entry.path))?;
        tree.add_file(entry.path, content);
        Ok(())
    }
}
