//! Configuration for the template environment.
//!
//! The configuration can be created programmatically or loaded from a YAML or
//! JSON file (chosen by file extension).
//!
//! # Examples
//!
//! ```no_run
//! use gen_api_models::core::config::EnvironmentConfig;
//!
//! let mut config = EnvironmentConfig::default();
//! config.template_dir = Some("templates".into());
//! config.strict_status_codes = true;
//! ```

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Settings for building a [`TemplateEnvironment`](crate::TemplateEnvironment)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Directory templates are loaded from
    #[serde(default)]
    pub template_dir: Option<PathBuf>,

    /// File extension of templates inside `template_dir`
    #[serde(default = "default_extension")]
    pub template_extension: String,

    /// Fail the render when a response status code has no wrapper mapping
    #[serde(default)]
    pub strict_status_codes: bool,

    /// HTML-escape interpolated values in every template, whatever its
    /// extension (off for generated source)
    #[serde(default)]
    pub autoescape: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            template_dir: None,
            template_extension: default_extension(),
            strict_status_codes: false,
            autoescape: false,
        }
    }
}

impl EnvironmentConfig {
    /// Load configuration from a YAML or JSON file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let config = if is_json(path) {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(config)
    }

    /// Save configuration to a YAML or JSON file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            serde_yaml::to_string(self)?
        };
        fs::write(path, content).await?;
        Ok(())
    }

    /// Glob matching every template under `template_dir`, if one is set
    pub fn template_glob(&self) -> Option<String> {
        let extension = self.template_extension.trim_start_matches('.');
        self.template_dir
            .as_ref()
            .map(|dir| format!("{}/**/*.{extension}", dir.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

fn default_extension() -> String {
    "njk".to_string()
}
