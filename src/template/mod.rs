//! Template processing for the scaffolder
//!
//! This module contains the template pipeline:
//! - `catalogue`: The static table of templates and boilerplate bundles
//! - `processor`: Renders the catalogue into a `RenderedTree`
//! - `operation`: Filesystem operations planned from a rendered tree

pub mod catalogue;
pub mod operation;
pub mod processor;

pub use processor::{RenderedTree, TemplateProcessor};

use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};

/// Returns the template engine used for every run.
pub fn get_template_engine() -> Box<dyn TemplateRenderer> {
    Box::new(MiniJinjaRenderer::new())
}
