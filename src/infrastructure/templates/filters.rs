//! Tera bindings for the generation helpers.
//!
//! Each filter converts the template value into the domain shape, calls the
//! engine-agnostic helper and converts the result back. Absent input (`null`)
//! degrades to an empty or absent result; values of the wrong shape are
//! reported as filter errors.

use std::collections::HashMap;

use tera::{Filter, Function, Result, Value};
use tracing::trace;

use crate::generation::{
    FlagKind, FlagSet, Identifiers, ParameterLocation, RenderScope, ResponseDescriptor,
    extract_optionality_symbol, filter_by_location, filter_by_not_location, find_by_field,
    map_response, map_response_strict, render_destructured_args, strip_optionality_marker,
};

pub const TO_FN_ARGS: &str = "toFnArgs";
pub const PARAM_IN: &str = "paramIn";
pub const PARAM_NOT_IN: &str = "paramNotIn";
pub const STRIP_QUESTION_MARK: &str = "stripQuestionMark";
pub const SET_OPTIONAL_SYMBOL: &str = "setOptionalSymbol";
pub const PARAMETER_EQUAL: &str = "parameterEqual";
pub const RESPONSE_TYPE: &str = "openapiResponseToTSCommonsResponse";

fn expects(filter: &str, what: &str) -> tera::Error {
    tera::Error::msg(format!("{filter} filter expects {what}"))
}

fn required_arg<'a>(filter: &str, args: &'a HashMap<String, Value>, key: &str) -> Result<&'a Value> {
    args.get(key)
        .ok_or_else(|| tera::Error::msg(format!("{filter} filter requires a `{key}` argument")))
}

/// `None` when the tag is not a known location; no record can carry it.
fn location_arg(filter: &str, args: &HashMap<String, Value>) -> Result<Option<ParameterLocation>> {
    let tag = required_arg(filter, args, "location")?
        .as_str()
        .ok_or_else(|| expects(filter, "a string `location`"))?;
    Ok(tag.parse().ok())
}

/// `null` reads as absent; anything else must be an array.
fn optional_array<'a>(filter: &str, value: &'a Value) -> Result<Option<&'a [Value]>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => Ok(Some(items.as_slice())),
        _ => Err(expects(filter, "an array")),
    }
}

fn identifiers(filter: &str, value: &Value) -> Result<Option<Identifiers>> {
    match value {
        Value::Null => Ok(None),
        Value::String(_) | Value::Array(_) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| tera::Error::chain(format!("{filter} filter expects strings"), e)),
        _ => Err(expects(filter, "a string or an array of strings")),
    }
}

fn identifiers_value(result: Option<Identifiers>) -> Result<Value> {
    match result {
        Some(ids) => serde_json::to_value(ids)
            .map_err(|e| tera::Error::chain("failed to serialize identifiers", e)),
        None => Ok(Value::Null),
    }
}

/// `[{name: "foo"}, {name: "bar"}] | toFnArgs` renders `({foo, bar})`
pub fn to_fn_args(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let names = optional_array(TO_FN_ARGS, value)?
        .map(|items| {
            items
                .iter()
                .map(|item| {
                    item.get("name")
                        .and_then(Value::as_str)
                        .ok_or_else(|| expects(TO_FN_ARGS, "objects with a string `name`"))
                })
                .collect::<Result<Vec<&str>>>()
        })
        .transpose()?;
    Ok(Value::String(render_destructured_args(names.as_deref())))
}

/// `parameters | paramIn(location="query")`
pub fn param_in(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let params = optional_array(PARAM_IN, value)?;
    let Some(location) = location_arg(PARAM_IN, args)? else {
        return Ok(Value::Array(Vec::new()));
    };
    Ok(Value::Array(
        filter_by_location(params, location).into_iter().cloned().collect(),
    ))
}

/// `parameters | paramNotIn(location="body")`
pub fn param_not_in(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let params = optional_array(PARAM_NOT_IN, value)?;
    let Some(location) = location_arg(PARAM_NOT_IN, args)? else {
        return Ok(Value::Array(params.unwrap_or_default().to_vec()));
    };
    Ok(Value::Array(
        filter_by_not_location(params, location)
            .into_iter()
            .cloned()
            .collect(),
    ))
}

/// `"arg?" | stripQuestionMark` renders `arg`; lists are mapped element-wise
pub fn strip_question_mark(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let subject = identifiers(STRIP_QUESTION_MARK, value)?;
    identifiers_value(strip_optionality_marker(subject.as_ref()))
}

/// `"arg?" | setOptionalSymbol` renders `?`; lists are mapped element-wise
pub fn set_optional_symbol(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let subject = identifiers(SET_OPTIONAL_SYMBOL, value)?;
    identifiers_value(extract_optionality_symbol(subject.as_ref()))
}

/// `responses | parameterEqual(field="statusCode", value="200")`
pub fn parameter_equal(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let field = required_arg(PARAMETER_EQUAL, args, "field")?
        .as_str()
        .ok_or_else(|| expects(PARAMETER_EQUAL, "a string `field`"))?;
    let wanted = required_arg(PARAMETER_EQUAL, args, "value")?;
    let items = optional_array(PARAMETER_EQUAL, value)?.unwrap_or_default();
    Ok(find_by_field(items, field, wanted)
        .cloned()
        .unwrap_or(Value::Null))
}

/// `response | openapiResponseToTSCommonsResponse`
///
/// In strict mode an unmapped status code fails the render instead of
/// producing the `NotImplemented` sentinel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseTypeFilter {
    pub strict: bool,
}

impl Filter for ResponseTypeFilter {
    fn filter(&self, value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
        let response: ResponseDescriptor =
            serde_json::from_value(value.clone()).map_err(|e| {
                tera::Error::chain(
                    format!("{RESPONSE_TYPE} filter expects {{statusCode, payloadType}}"),
                    e,
                )
            })?;
        let wrapper = if self.strict {
            map_response_strict(&response)
                .map_err(|e| tera::Error::chain(format!("{RESPONSE_TYPE} filter failed"), e))?
        } else {
            map_response(&response)
        };
        Ok(Value::String(wrapper.to_string()))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

/// What an accumulator entry does to its flag set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulatorOp {
    Reset,
    Add,
    Get,
}

/// One of the six accumulator entries, bound to a render scope
///
/// As a filter the piped value is the key (`"IPet" | addImport`); as a
/// function the key comes from the `key` argument (`addImport(key="IPet")`).
/// Reset and get ignore their input. Add accepts a string or an array of
/// strings; `null` adds nothing.
#[derive(Debug, Clone)]
pub struct AccumulatorEntry {
    scope: RenderScope,
    kind: FlagKind,
    op: AccumulatorOp,
}

impl AccumulatorEntry {
    pub fn new(scope: RenderScope, kind: FlagKind, op: AccumulatorOp) -> Self {
        Self { scope, kind, op }
    }

    pub fn name(&self) -> &'static str {
        match self.op {
            AccumulatorOp::Reset => self.kind.reset_name(),
            AccumulatorOp::Add => self.kind.add_name(),
            AccumulatorOp::Get => self.kind.get_name(),
        }
    }

    fn apply(&self, input: &Value) -> Result<Value> {
        let name = self.name();
        let keys: Vec<&str> = match (self.op, input) {
            (AccumulatorOp::Add, Value::String(key)) => vec![key.as_str()],
            (AccumulatorOp::Add, Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().ok_or_else(|| expects(name, "string keys")))
                .collect::<Result<_>>()?,
            (AccumulatorOp::Add, Value::Null) => Vec::new(),
            (AccumulatorOp::Add, _) => return Err(expects(name, "a string or an array of strings")),
            _ => Vec::new(),
        };

        let kind = self.kind;
        let op = self.op;
        let output = self
            .scope
            .with_flags(kind, |flags: &mut FlagSet| match op {
                AccumulatorOp::Reset => {
                    flags.reset();
                    String::new()
                }
                AccumulatorOp::Add => {
                    for key in &keys {
                        if flags.add(*key) {
                            trace!(%kind, key, "Accumulated flag");
                        }
                    }
                    String::new()
                }
                AccumulatorOp::Get => flags.get(),
            })
            .map_err(|e| tera::Error::chain(format!("{name} failed"), e))?;
        Ok(Value::String(output))
    }
}

impl Filter for AccumulatorEntry {
    fn filter(&self, value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
        self.apply(value)
    }

    fn is_safe(&self) -> bool {
        true
    }
}

impl Function for AccumulatorEntry {
    fn call(&self, args: &HashMap<String, Value>) -> Result<Value> {
        self.apply(args.get("key").unwrap_or(&Value::Null))
    }

    fn is_safe(&self) -> bool {
        true
    }
}
