//! Memory document rendering

use std::fs;
use std::path::Path;

use tera::{Context, Tera};
use tracing::debug;
use vhdmem_spec::{ConfigString, InstructionList, MemoryKind};

use crate::error::{RenderError, Result};

/// Built-in configuration memory template
pub const BUILTIN_CONFIG_TEMPLATE: &str =
    include_str!("../templates/auto_config_memory.vhd.template");

/// Built-in program memory template
pub const BUILTIN_PROGRAM_TEMPLATE: &str =
    include_str!("../templates/auto_program_memory.vhd.template");

/// Rendered source text for one memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub kind: MemoryKind,
    pub text: String,
}

/// The config and program templates, registered under their file names
#[derive(Debug, Clone)]
pub struct TemplateSet {
    tera: Tera,
}

impl TemplateSet {
    /// Templates shipped with this crate
    pub fn builtin() -> Result<Self> {
        let mut set = Self::empty();
        set.add(MemoryKind::Config, BUILTIN_CONFIG_TEMPLATE)?;
        set.add(MemoryKind::Program, BUILTIN_PROGRAM_TEMPLATE)?;
        Ok(set)
    }

    /// Load both templates by their fixed names from `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut set = Self::empty();
        for kind in MemoryKind::ALL {
            let path = dir.join(kind.template_name());
            let source = fs::read_to_string(&path).map_err(|source| RenderError::TemplateIo {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "loaded template");
            set.add(kind, &source)?;
        }
        Ok(set)
    }

    /// Templates from `dir`, or the built-in ones
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::builtin(),
        }
    }

    /// Whether the template for `kind` is registered
    pub fn contains(&self, kind: MemoryKind) -> bool {
        self.tera
            .get_template_names()
            .any(|name| name == kind.template_name())
    }

    fn empty() -> Self {
        let mut tera = Tera::default();
        // Output is VHDL, never HTML
        tera.autoescape_on(vec![]);
        Self { tera }
    }

    fn add(&mut self, kind: MemoryKind, source: &str) -> Result<()> {
        // Jinja drops a single trailing newline by default
        let source = source.strip_suffix('\n').unwrap_or(source);
        self.tera
            .add_raw_template(kind.template_name(), source)
            .map_err(|source| RenderError::Template {
                template: kind.template_name().to_string(),
                source,
            })
    }

    fn render(&self, kind: MemoryKind, ctx: &Context) -> Result<String> {
        self.tera
            .render(kind.template_name(), ctx)
            .map_err(|source| RenderError::Render {
                template: kind.template_name().to_string(),
                source,
            })
    }
}

/// Substitutes memory contents into their templates
#[derive(Debug, Clone)]
pub struct Renderer {
    templates: TemplateSet,
}

impl Renderer {
    pub fn new(templates: TemplateSet) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Render the config template with `config` bound
    pub fn render_config(&self, config: &ConfigString) -> Result<RenderedDocument> {
        let kind = MemoryKind::Config;
        let mut ctx = Context::new();
        ctx.insert(kind.variable_name(), config.as_str());
        self.render(kind, &ctx)
    }

    /// Render the program template with `instructions` bound to the hex words
    pub fn render_program(&self, instructions: &InstructionList) -> Result<RenderedDocument> {
        let kind = MemoryKind::Program;
        let mut ctx = Context::new();
        ctx.insert(kind.variable_name(), &instructions.hex_words());
        self.render(kind, &ctx)
    }

    fn render(&self, kind: MemoryKind, ctx: &Context) -> Result<RenderedDocument> {
        let text = self.templates.render(kind, ctx)?;
        debug!(memory = %kind, bytes = text.len(), "rendered memory");
        Ok(RenderedDocument { kind, text })
    }
}
