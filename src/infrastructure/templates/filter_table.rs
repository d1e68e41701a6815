//! The filter table: every named template helper in one flat registry.
//!
//! The stateless half is installed once when an environment is built. The
//! accumulator half is built per render from a [`RenderScope`] and installed
//! into that render's copy of the engine.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tera::{Filter, Function, Tera, Value};

use crate::core::EnvironmentConfig;
use crate::generation::{FlagKind, RenderScope};
use crate::infrastructure::templates::filters::{
    self, AccumulatorEntry, AccumulatorOp, ResponseTypeFilter,
};

/// Name → filter (and name → function) registry handed to the template engine
#[derive(Default)]
pub struct FilterTable {
    filters: BTreeMap<&'static str, Box<dyn Filter>>,
    functions: BTreeMap<&'static str, Box<dyn Function>>,
}

impl FilterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pure filters
    pub fn stateless(config: &EnvironmentConfig) -> Self {
        Self::new()
            .with_filter(filters::TO_FN_ARGS, filters::to_fn_args)
            .with_filter(filters::PARAM_IN, filters::param_in)
            .with_filter(filters::PARAM_NOT_IN, filters::param_not_in)
            .with_filter(filters::STRIP_QUESTION_MARK, filters::strip_question_mark)
            .with_filter(filters::SET_OPTIONAL_SYMBOL, filters::set_optional_symbol)
            .with_filter(filters::PARAMETER_EQUAL, filters::parameter_equal)
            .with_filter(
                filters::RESPONSE_TYPE,
                ResponseTypeFilter {
                    strict: config.strict_status_codes,
                },
            )
    }

    /// The six accumulator entries bound to `scope`, as filters and functions
    pub fn accumulators(scope: &RenderScope) -> Self {
        let mut table = Self::new();
        for kind in FlagKind::all() {
            for op in [AccumulatorOp::Reset, AccumulatorOp::Add, AccumulatorOp::Get] {
                let entry = AccumulatorEntry::new(scope.clone(), *kind, op);
                let name = entry.name();
                table.functions.insert(name, Box::new(entry.clone()));
                table.filters.insert(name, Box::new(entry));
            }
        }
        table
    }

    /// Both halves: the full table for one render
    pub fn for_scope(config: &EnvironmentConfig, scope: &RenderScope) -> Self {
        let mut table = Self::stateless(config);
        table.extend(Self::accumulators(scope));
        table
    }

    pub fn with_filter(mut self, name: &'static str, filter: impl Filter + 'static) -> Self {
        self.filters.insert(name, Box::new(filter));
        self
    }

    /// Merge `other` in; its entries win on name clashes
    pub fn extend(&mut self, other: FilterTable) {
        self.filters.extend(other.filters);
        self.functions.extend(other.functions);
    }

    pub fn filter_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.filters.keys().copied()
    }

    pub fn function_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    pub fn contains_filter(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Register every entry on `tera`
    pub fn install(self, tera: &mut Tera) {
        for (name, filter) in self.filters {
            tera.register_filter(name, BoxedFilter(filter));
        }
        for (name, function) in self.functions {
            tera.register_function(name, BoxedFunction(function));
        }
    }
}

impl fmt::Debug for FilterTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterTable")
            .field("filters", &self.filters.keys().collect::<Vec<_>>())
            .field("functions", &self.functions.keys().collect::<Vec<_>>())
            .finish()
    }
}

struct BoxedFilter(Box<dyn Filter>);

impl Filter for BoxedFilter {
    fn filter(&self, value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
        self.0.filter(value, args)
    }

    fn is_safe(&self) -> bool {
        self.0.is_safe()
    }
}

struct BoxedFunction(Box<dyn Function>);

impl Function for BoxedFunction {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        self.0.call(args)
    }

    fn is_safe(&self) -> bool {
        self.0.is_safe()
    }
}
