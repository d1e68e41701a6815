//! Tera-based template environment with the generation filters installed

use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use crate::core::{EnvironmentConfig, Error, Result};
use crate::generation::{FlagKind, RenderScope};
use crate::infrastructure::templates::filter_table::FilterTable;

/// Result of rendering one generation unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// Rendered template text
    pub content: String,
    /// Imports accumulated during the render, in listing order
    pub imports: Vec<String>,
    /// Type aliases accumulated during the render, in listing order
    pub type_aliases: Vec<String>,
}

impl RenderOutput {
    fn collect(content: String, scope: &RenderScope) -> Result<Self> {
        Ok(Self {
            content,
            imports: scope.snapshot(FlagKind::Imports)?.to_vec(),
            type_aliases: scope.snapshot(FlagKind::TypeAliases)?.to_vec(),
        })
    }
}

/// A Tera instance with the stateless filters installed
///
/// Accumulator filters are bound per render: every call to [`render`] gets a
/// fresh [`RenderScope`], so one unit never sees imports or aliases added by
/// another.
///
/// [`render`]: TemplateEnvironment::render
#[derive(Debug, Clone)]
pub struct TemplateEnvironment {
    tera: Tera,
}

impl TemplateEnvironment {
    /// Wrap an existing Tera instance
    ///
    /// With `autoescape` set every template is HTML-escaped, whatever its
    /// file extension; otherwise none is.
    pub fn new(mut tera: Tera, config: EnvironmentConfig) -> Self {
        let suffixes = if config.autoescape { vec![""] } else { vec![] };
        tera.autoescape_on(suffixes);
        let table = FilterTable::stateless(&config);
        debug!(filters = ?table, autoescape = config.autoescape, "Installing template filters");
        table.install(&mut tera);
        Self { tera }
    }

    /// Build an environment from in-memory `(name, source)` pairs
    pub fn from_templates<I, N, C>(templates: I, config: EnvironmentConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: AsRef<str>,
        C: AsRef<str>,
    {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates)?;
        Ok(Self::new(tera, config))
    }

    /// Load every template under the configured directory
    pub fn from_config(config: EnvironmentConfig) -> Result<Self> {
        let glob = config
            .template_glob()
            .ok_or_else(|| Error::config("template_dir is required to load templates"))?;
        let tera = Tera::new(&glob)?;
        debug!(
            glob = %glob,
            templates = tera.get_template_names().count(),
            "Loaded templates"
        );
        Ok(Self::new(tera, config))
    }

    /// Names of all loaded templates, sorted
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }

    /// Render `template` as its own generation unit
    pub fn render<C: Serialize>(&self, template: &str, context: &C) -> Result<RenderOutput> {
        self.render_with_scope(template, context, &RenderScope::new())
    }

    /// Render `template` accumulating into a caller-owned scope
    ///
    /// Use this to compose several templates into one unit; the returned
    /// listings include everything the scope held before the call.
    pub fn render_with_scope<C: Serialize>(
        &self,
        template: &str,
        context: &C,
        scope: &RenderScope,
    ) -> Result<RenderOutput> {
        let tera = self.bind(scope);
        let context = Context::from_serialize(context)?;
        let content = tera.render(template, &context)?;
        let output = RenderOutput::collect(content, scope)?;
        debug!(
            template,
            imports = output.imports.len(),
            type_aliases = output.type_aliases.len(),
            "Rendered template"
        );
        Ok(output)
    }

    /// Render a one-off template source with the full filter table
    pub fn render_str<C: Serialize>(
        &self,
        source: &str,
        context: &C,
        scope: &RenderScope,
    ) -> Result<String> {
        let mut tera = self.bind(scope);
        let context = Context::from_serialize(context)?;
        Ok(tera.render_str(source, &context)?)
    }

    /// Copy of the engine with accumulator filters bound to `scope`
    fn bind(&self, scope: &RenderScope) -> Tera {
        let mut tera = self.tera.clone();
        FilterTable::accumulators(scope).install(&mut tera);
        tera
    }
}
