use crate::tools::descriptor::EndpointDescriptor;
use serde_json::{Map, Value, json};

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const JSONRPC_VERSION: &str = "2.0";

pub const METHOD_NOT_FOUND: i64 = -32601;

/// JSON schema of a tool's arguments, derived from its parameter specs.
pub fn input_schema(descriptor: &EndpointDescriptor) -> Value {
    let mut properties = Map::new();
    for spec in descriptor.params {
        properties.insert(
            spec.name.to_string(),
            json!({
                "type": spec.kind.as_str(),
                "description": spec.description,
            }),
        );
    }
    let required: Vec<&str> = descriptor.required_params().map(|spec| spec.name).collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn find(name: &str) -> &'static EndpointDescriptor {
        catalog::endpoints()
            .find(|endpoint| endpoint.name == name)
            .expect("endpoint")
    }

    #[test]
    fn schema_lists_kinds_and_required() {
        let schema = input_schema(find("put_quote_image"));
        assert_eq!(schema["type"], json!("object"));
        assert_eq!(schema["properties"]["quote_id"]["type"], json!("string"));
        assert_eq!(schema["properties"]["width"]["type"], json!("number"));
        assert_eq!(schema["properties"]["branding"]["type"], json!("boolean"));
        assert_eq!(schema["required"], json!(["quote_id"]));
    }

    #[test]
    fn schema_without_params_is_empty_object() {
        let schema = input_schema(find("get_qod_languages"));
        assert_eq!(schema["properties"], json!({}));
        assert_eq!(schema["required"], json!([]));
    }
}
