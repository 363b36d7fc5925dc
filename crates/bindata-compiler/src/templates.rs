//! Boilerplate text of the generated module.
//!
//! The fixed parts of the output live in `templates/` and are filled in by
//! placeholder replacement. Per-asset code is written by the generator.

use std::marker::PhantomData;

use crate::compress::COMPRESSION_LEVEL;

/// Trait for template variable sets
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

/// Templates without placeholders.
pub struct NoVars;

impl TemplateVars for NoVars {
    fn apply(&self, content: &str) -> String {
        content.to_string()
    }
}

/// Variables for the runtime API.
pub struct ApiVars<'a> {
    pub package: &'a str,
}

impl TemplateVars for ApiVars<'_> {
    fn apply(&self, content: &str) -> String {
        content.replace("__PACKAGE__", self.package)
    }
}

/// Variables for the debug-mode loader.
pub struct DebugVars;

impl TemplateVars for DebugVars {
    fn apply(&self, content: &str) -> String {
        content.replace("__COMPRESSION_LEVEL__", &COMPRESSION_LEVEL.to_string())
    }
}

/// Asset, metadata and capability types shared by both modes.
pub const TYPES: Template<NoVars> = Template::new(include_str!("../templates/types.rs.tmpl"));

/// Lookup table API and bintree type.
pub const API: Template<ApiVars<'static>> = Template::new(include_str!("../templates/api.rs.tmpl"));

/// Loader used by debug accessors to read assets from disk.
pub const DEBUG_LOADER: Template<DebugVars> =
    Template::new(include_str!("../templates/debug.rs.tmpl"));
