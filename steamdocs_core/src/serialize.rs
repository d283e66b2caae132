use crate::error::ExplorerError;
use crate::extract::{extract, insert_entry};
use crate::schema::ApiMethod;
use crate::value::Value;
use indexmap::IndexMap;
use url::form_urlencoded;

/// Reserved query field carrying the structured payload. A schema parameter
/// literally named like this would collide with it; that is a
/// schema-authoring constraint, not defended against at runtime.
pub const INPUT_JSON_FIELD: &str = "input_json";

/// Response format that needs no `format` query field.
pub const DEFAULT_FORMAT: &str = "json";

/// Serializes the method's parameter tree into `key=value` pairs, in
/// declaration order. Composite parameters with content are folded into a
/// single `input_json` payload appended last; a non-default format goes
/// first. The method's `has_arrays` flag records whether this pass produced
/// the hybrid form.
pub fn query_pairs(
    method: &mut ApiMethod,
    format: &str,
) -> Result<Vec<(String, String)>, ExplorerError> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    if format != DEFAULT_FORMAT {
        pairs.push(("format".to_owned(), format.to_owned()));
    }

    let mut payload: IndexMap<String, Value> = IndexMap::new();
    for param in &method.parameters {
        if param.children.is_some() {
            match extract(param) {
                Some(inner) => insert_entry(&mut payload, param, inner),
                // Empty composite carrying a direct scalar value: fall back
                // to a flat field instead of dropping the value.
                None if !param.value.is_empty() => {
                    pairs.push((param.name.clone(), param.value.clone()));
                }
                None => {}
            }
            continue;
        }
        if param.is_unset() {
            continue;
        }
        pairs.push((param.name.clone(), param.value.clone()));
    }

    let hybrid = !payload.is_empty();
    if hybrid {
        let encoded = serde_json::to_string(&Value::Object(payload))
            .map_err(ExplorerError::PayloadEncode)?;
        pairs.push((INPUT_JSON_FIELD.to_owned(), encoded));
    }
    method.has_arrays = hybrid;

    Ok(pairs)
}

/// Percent-encoded query string per standard form encoding, `a=1&b=2`.
pub fn query_string(method: &mut ApiMethod, format: &str) -> Result<String, ExplorerError> {
    let pairs = query_pairs(method, format)?;
    let mut enc = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        enc.append_pair(key, value);
    }
    Ok(enc.finish())
}
