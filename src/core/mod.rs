//! Cross-cutting pieces shared by the generation and infrastructure layers.

pub mod config;
pub mod error;

pub use config::EnvironmentConfig;
pub use error::{Error, Result};
