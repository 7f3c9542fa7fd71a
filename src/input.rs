use crate::tools::descriptor::ParamSpec;
use crate::tools::error::ToolError;
use serde_json::Value;

/// Picks the declared parameters out of a tool call's argument bag.
///
/// Pairs come back in declaration order, not argument order, with each value in its
/// textual form. Absent and `null` values are omitted; a missing required parameter fails
/// the call before anything is sent.
pub fn extract_params(
    args: &Value,
    specs: &'static [ParamSpec],
) -> Result<Vec<(&'static str, String)>, ToolError> {
    let obj = args.as_object().ok_or(ToolError::MalformedInput)?;

    let mut params = Vec::with_capacity(specs.len());
    for spec in specs {
        match obj.get(spec.name) {
            None | Some(Value::Null) => {
                if spec.required {
                    return Err(ToolError::MissingParameter(spec.name));
                }
            }
            Some(value) => params.push((spec.name, stringify(value))),
        }
    }

    if obj.len() > params.len() {
        let ignored: Vec<&str> = obj
            .keys()
            .map(String::as_str)
            .filter(|key| !specs.iter().any(|spec| spec.name == *key))
            .collect();
        if !ignored.is_empty() {
            tracing::debug!(?ignored, "ignoring undeclared arguments");
        }
    }

    Ok(params)
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        // Arrays and objects have no scalar form; send them as compact JSON.
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SPECS: &[ParamSpec] = &[
        ParamSpec::string("category", "Quote Category"),
        ParamSpec::number("limit", "Limit"),
        ParamSpec::boolean("sfw", "SFW only"),
    ];

    const WITH_REQUIRED: &[ParamSpec] = &[
        ParamSpec::string("id", "Quote ID").required(),
        ParamSpec::string("tags", "Comma Separated tags"),
    ];

    #[test]
    fn declaration_order_wins_over_argument_order() {
        let args = json!({"sfw": true, "limit": 42, "category": "inspire"});
        let params = extract_params(&args, SPECS).expect("params");
        assert_eq!(
            params,
            vec![
                ("category", "inspire".to_string()),
                ("limit", "42".to_string()),
                ("sfw", "true".to_string()),
            ]
        );
    }

    #[test]
    fn absent_and_null_are_omitted() {
        let args = json!({"limit": null, "sfw": false});
        let params = extract_params(&args, SPECS).expect("params");
        assert_eq!(params, vec![("sfw", "false".to_string())]);
    }

    #[test]
    fn empty_bag_yields_nothing() {
        let params = extract_params(&json!({}), SPECS).expect("params");
        assert!(params.is_empty());
    }

    #[test]
    fn non_mapping_is_malformed() {
        for args in [json!("category=inspire"), json!([1, 2]), json!(7), Value::Null] {
            let err = extract_params(&args, SPECS).expect_err("error");
            assert_eq!(err, ToolError::MalformedInput);
        }
    }

    #[test]
    fn missing_required_is_rejected() {
        let err = extract_params(&json!({"tags": "a,b"}), WITH_REQUIRED).expect_err("error");
        assert_eq!(err, ToolError::MissingParameter("id"));

        let err = extract_params(&json!({"id": null}), WITH_REQUIRED).expect_err("error");
        assert_eq!(err, ToolError::MissingParameter("id"));
    }

    #[test]
    fn values_are_stringified_as_is() {
        let args = json!({"category": 12, "limit": 2.5, "sfw": "yes"});
        let params = extract_params(&args, SPECS).expect("params");
        assert_eq!(params[0].1, "12");
        assert_eq!(params[1].1, "2.5");
        assert_eq!(params[2].1, "yes");
    }

    #[test]
    fn compound_values_become_compact_json() {
        let args = json!({"id": "q1", "tags": ["a", "b"]});
        let params = extract_params(&args, WITH_REQUIRED).expect("params");
        assert_eq!(params[1], ("tags", r#"["a","b"]"#.to_string()));
    }

    #[test]
    fn undeclared_arguments_are_ignored() {
        let args = json!({"id": "q1", "bogus": 1});
        let params = extract_params(&args, WITH_REQUIRED).expect("params");
        assert_eq!(params, vec![("id", "q1".to_string())]);
    }
}
