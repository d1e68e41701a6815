//! gen-api-models template layer
//!
//! Filters and render-scoped accumulators used by the templates that turn an
//! OpenAPI description into TypeScript models, plus the Tera environment
//! they are installed into.
//!
//! ```
//! use gen_api_models::{EnvironmentConfig, TemplateEnvironment};
//! use serde_json::json;
//!
//! let env = TemplateEnvironment::from_templates(
//!     [("op", "{{ \"IPet\" | addImport }}export const op = {{ params | toFnArgs }} => {};")],
//!     EnvironmentConfig::default(),
//! )?;
//! let output = env.render("op", &json!({"params": [{"name": "petId", "in": "path"}]}))?;
//!
//! assert_eq!(output.content, "export const op = ({petId}) => {};");
//! assert_eq!(output.imports, vec!["IPet"]);
//! # Ok::<(), gen_api_models::Error>(())
//! ```
#![deny(unsafe_code)]

pub mod core;
pub mod generation;
pub mod infrastructure;

pub use crate::{
    core::{EnvironmentConfig, Error, Result},
    generation::RenderScope,
    infrastructure::templates::{FilterTable, RenderOutput, TemplateEnvironment},
};
