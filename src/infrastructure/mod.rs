//! Infrastructure layer - concrete template engine integration

pub mod templates;

pub use templates::*;
