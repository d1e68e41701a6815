//! Template engine bindings: filter adapters, the filter table and the
//! render environment.

pub mod environment;
pub mod filter_table;
pub mod filters;

pub use environment::{RenderOutput, TemplateEnvironment};
pub use filter_table::FilterTable;
