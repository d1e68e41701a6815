//! Generation domain module - the transformations templates apply while they
//! render
//!
//! Everything here is engine-agnostic: plain functions over parameter lists,
//! identifiers and responses, plus the per-render accumulators. The Tera
//! bindings live in `infrastructure::templates`.

pub mod flags;
pub mod lookup;
pub mod naming;
pub mod params;
pub mod responses;
pub mod scope;
pub mod types;

pub use flags::{FlagKind, FlagSet};
pub use lookup::find_by_field;
pub use naming::{Identifiers, extract_optionality_symbol, strip_optionality_marker};
pub use params::{filter_by_location, filter_by_not_location, render_destructured_args};
pub use responses::{ResponseWrapper, map_response, map_response_strict};
pub use scope::RenderScope;
pub use types::{Located, Named, Parameter, ParameterLocation, ResponseDescriptor};
