//! gen-api-models CLI entrypoint
//! Renders templates through the generation filter table.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use gen_api_models::{EnvironmentConfig, FilterTable, RenderScope, TemplateEnvironment};
use serde_json::Value as JsonValue;
use tokio::fs;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gen-api-models")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render one template against a JSON or YAML context file
    Render {
        /// Template file to render
        #[arg(long)]
        template: PathBuf,
        /// Context file (JSON or YAML, chosen by extension)
        #[arg(long)]
        context: PathBuf,
        /// Environment configuration file (JSON or YAML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Fail when a response status code has no wrapper mapping
        #[arg(long)]
        strict: bool,
        /// Write the rendered output here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the filters and functions available to templates
    Filters,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render {
            template,
            context,
            config,
            strict,
            output,
        } => render(&template, &context, config.as_deref(), strict, output.as_deref()).await?,
        Commands::Filters => list_filters(),
    }
    Ok(())
}

async fn render(
    template: &Path,
    context: &Path,
    config: Option<&Path>,
    strict: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let mut env_config = match config {
        Some(path) => EnvironmentConfig::from_file(path)
            .await
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EnvironmentConfig::default(),
    };
    env_config.strict_status_codes |= strict;

    let source = fs::read_to_string(template)
        .await
        .with_context(|| format!("Failed to read template {}", template.display()))?;
    let context_value = load_context(context).await?;

    let name = template
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "template".to_string());
    let env = TemplateEnvironment::from_templates([(name.as_str(), source.as_str())], env_config)
        .with_context(|| format!("Failed to parse template {}", template.display()))?;

    let rendered = env
        .render(&name, &context_value)
        .with_context(|| format!("Failed to render template {}", template.display()))?;
    info!(
        imports = rendered.imports.len(),
        type_aliases = rendered.type_aliases.len(),
        "Rendered {}",
        template.display()
    );

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await?;
            }
            fs::write(path, &rendered.content)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("✅ Wrote {}", path.display());
        }
        None => print!("{}", rendered.content),
    }
    Ok(())
}

async fn load_context(path: &Path) -> anyhow::Result<JsonValue> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read context {}", path.display()))?;
    let value = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content).context("Failed to parse JSON context")?
    } else {
        serde_yaml::from_str(&content).context("Failed to parse YAML context")?
    };
    Ok(value)
}

fn list_filters() {
    let table = FilterTable::for_scope(&EnvironmentConfig::default(), &RenderScope::new());
    println!("Filters:");
    for name in table.filter_names() {
        println!("  • {name}");
    }
    println!("Functions:");
    for name in table.function_names() {
        println!("  • {name}()");
    }
}
