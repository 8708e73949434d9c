//! Parameter extraction.
//!
//! Any configuration element may carry `param` children:
//!
//! ```xml
//! <transformation type="license-header">
//!     <param name="year">2024</param>
//!     <param name="authors">["ana", "luis"]</param>
//! </transformation>
//! ```
//!
//! Values whose text is wrapped in `{}` or `[]` are decoded as JSON objects
//! or arrays. Text that fails to decode stays a plain string.

use crate::document::Element;
use serde_json::Value;

/// Element name of a parameter entry.
pub const PARAM: &str = "param";

/// Ordered parameter name to value mapping.
pub type Parameters = serde_json::Map<String, Value>;

/// Collect the `param` children of `container` in document order.
///
/// Params with an empty value are skipped. An absent container yields an
/// empty mapping.
pub fn extract_params(container: Option<&Element>) -> Parameters {
    let mut params = Parameters::new();
    let Some(container) = container else {
        return params;
    };

    for param in container.elements().filter(|e| e.name() == PARAM) {
        let value = param.text();
        if value.is_empty() {
            continue;
        }
        params.insert(param.attr_or_empty("name").to_string(), decode_value(value));
    }
    params
}

/// Decode one parameter value.
pub fn decode_value(raw: String) -> Value {
    let bracketed = (raw.starts_with('{') && raw.ends_with('}'))
        || (raw.starts_with('[') && raw.ends_with(']'));
    if !bracketed {
        return Value::String(raw);
    }

    match serde_json::from_str::<Value>(&raw) {
        Ok(value) if value.is_object() || value.is_array() => value,
        Ok(_) => Value::String(raw),
        Err(e) => {
            tracing::warn!("Keeping parameter value as text, not valid JSON: {}", e);
            Value::String(raw)
        }
    }
}

/// Append `param` children for every entry of `params`.
pub fn render_params(element: &mut Element, params: &Parameters) {
    for (name, value) in params {
        let text = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if text.is_empty() {
            continue;
        }
        element.push_element(Element::new(PARAM).with_attr("name", name.as_str()).with_text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use serde_json::json;

    fn params_of(xml: &str) -> Parameters {
        let doc = Document::parse(xml).unwrap();
        extract_params(Some(doc.root()))
    }

    #[test]
    fn test_scalar_params_in_document_order() {
        let params = params_of(
            r#"<configuration>
                <param name="b">2</param>
                <param name="a">  one  </param>
            </configuration>"#,
        );
        let keys: Vec<&String> = params.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(params["a"], json!("one"));
        assert_eq!(params["b"], json!("2"));
    }

    #[test]
    fn test_object_and_array_values_are_decoded() {
        let params = params_of(
            r#"<configuration>
                <param name="obj">{"indent": 4, "tabs": false}</param>
                <param name="list">["a", "b"]</param>
            </configuration>"#,
        );
        assert_eq!(params["obj"], json!({"indent": 4, "tabs": false}));
        assert_eq!(params["list"], json!(["a", "b"]));
    }

    #[test]
    fn test_malformed_bracketed_values_stay_raw() {
        let params = params_of(
            r#"<configuration>
                <param name="obj">{not json}</param>
                <param name="list">[1, 2,</param>
                <param name="half">[1, 2}</param>
            </configuration>"#,
        );
        assert_eq!(params["obj"], json!("{not json}"));
        assert_eq!(params["list"], json!("[1, 2,"));
        assert_eq!(params["half"], json!("[1, 2}"));
    }

    #[test]
    fn test_empty_params_are_omitted() {
        let params = params_of(
            r#"<configuration>
                <param name="empty"></param>
                <param name="blank">   </param>
                <param name="set">x</param>
            </configuration>"#,
        );
        assert_eq!(params.len(), 1);
        assert!(params.contains_key("set"));
    }

    #[test]
    fn test_non_param_children_are_ignored() {
        let params = params_of(
            r#"<configuration>
                <chain name="c"><param name="inner">x</param></chain>
            </configuration>"#,
        );
        assert!(params.is_empty());
    }

    #[test]
    fn test_absent_container_yields_empty_mapping() {
        assert!(extract_params(None).is_empty());
    }

    #[test]
    fn test_render_params_writes_json_for_structured_values() {
        let mut params = Parameters::new();
        params.insert("name".to_string(), json!("value"));
        params.insert("list".to_string(), json!(["x"]));
        params.insert("skip".to_string(), json!(""));

        let mut element = Element::new("chain");
        render_params(&mut element, &params);

        let rendered: Vec<(String, String)> = element
            .elements()
            .map(|e| (e.attr_or_empty("name").to_string(), e.text()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("name".to_string(), "value".to_string()),
                ("list".to_string(), "[\"x\"]".to_string()),
            ]
        );
    }
}
