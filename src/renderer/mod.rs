//! Template rendering for the scaffold catalogue.

mod filters;
mod interface;
mod minijinja;

pub use filters::*;
pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;
