//! Parameter list helpers: location filtering and argument rendering.

use crate::generation::types::{Located, Named, ParameterLocation};

/// Parameters whose location equals `location`, in their original order.
///
/// An absent list yields an empty result.
pub fn filter_by_location<T: Located>(
    params: Option<&[T]>,
    location: ParameterLocation,
) -> Vec<&T> {
    params
        .unwrap_or_default()
        .iter()
        .filter(|param| param.location() == Some(location))
        .collect()
}

/// Parameters whose location differs from `location`, in their original order.
///
/// Records without a recognisable location always land here. An absent list
/// yields an empty result.
pub fn filter_by_not_location<T: Located>(
    params: Option<&[T]>,
    location: ParameterLocation,
) -> Vec<&T> {
    params
        .unwrap_or_default()
        .iter()
        .filter(|param| param.location() != Some(location))
        .collect()
}

/// Renders a destructured-object function argument from parameter names.
///
/// Names are inserted verbatim, in order.
///
/// # Examples
/// ```
/// use gen_api_models::generation::params::render_destructured_args;
///
/// assert_eq!(render_destructured_args::<&str>(None), "()");
/// assert_eq!(render_destructured_args(Some(&["foo", "bar"][..])), "({foo, bar})");
/// ```
pub fn render_destructured_args<T: Named>(params: Option<&[T]>) -> String {
    match params {
        None => "()".to_string(),
        Some(params) => {
            let names: Vec<&str> = params.iter().map(Named::name).collect();
            format!("({{{}}})", names.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::types::Parameter;
    use serde_json::json;

    fn sample() -> Vec<Parameter> {
        vec![
            Parameter::new("petId", ParameterLocation::Path),
            Parameter::new("limit", ParameterLocation::Query),
            Parameter::new("X-Request-Id", ParameterLocation::Header),
            Parameter::new("offset", ParameterLocation::Query),
        ]
    }

    fn names(params: &[&Parameter]) -> Vec<String> {
        params.iter().map(|param| param.name.clone()).collect()
    }

    #[test]
    fn test_filter_by_location_keeps_order() {
        let params = sample();
        let query = filter_by_location(Some(params.as_slice()), ParameterLocation::Query);
        assert_eq!(names(&query), vec!["limit", "offset"]);
    }

    #[test]
    fn test_filter_by_not_location_keeps_order() {
        let params = sample();
        let rest = filter_by_not_location(Some(params.as_slice()), ParameterLocation::Query);
        assert_eq!(names(&rest), vec!["petId", "X-Request-Id"]);
    }

    #[test]
    fn test_filters_partition_input() {
        let params = sample();
        for location in ParameterLocation::all() {
            let inside = filter_by_location(Some(params.as_slice()), *location);
            let outside = filter_by_not_location(Some(params.as_slice()), *location);

            assert_eq!(inside.len() + outside.len(), params.len());
            assert!(inside.iter().all(|param| !outside.contains(param)));
            assert!(
                params
                    .iter()
                    .all(|param| inside.contains(&param) || outside.contains(&param))
            );
        }
    }

    #[test]
    fn test_filters_on_absent_list() {
        assert!(filter_by_location::<Parameter>(None, ParameterLocation::Path).is_empty());
        assert!(filter_by_not_location::<Parameter>(None, ParameterLocation::Path).is_empty());
    }

    #[test]
    fn test_filters_on_json_records() {
        let params = vec![
            json!({"name": "a", "in": "query"}),
            json!({"name": "b"}),
            json!({"name": "c", "in": "path"}),
        ];
        let query = filter_by_location(Some(params.as_slice()), ParameterLocation::Query);
        let rest = filter_by_not_location(Some(params.as_slice()), ParameterLocation::Query);
        assert_eq!(query, vec![&params[0]]);
        assert_eq!(rest, vec![&params[1], &params[2]]);
    }

    #[test]
    fn test_render_destructured_args() {
        assert_eq!(render_destructured_args::<Parameter>(None), "()");

        let params = vec![
            Parameter::new("foo", ParameterLocation::Query),
            Parameter::new("bar", ParameterLocation::Path),
        ];
        assert_eq!(render_destructured_args(Some(params.as_slice())), "({foo, bar})");
    }

    #[test]
    fn test_render_destructured_args_verbatim() {
        let names = ["with-dash", "opt?"];
        assert_eq!(
            render_destructured_args(Some(&names[..])),
            "({with-dash, opt?})"
        );
        assert_eq!(render_destructured_args::<String>(Some(&[][..])), "({})");
    }
}
