// src/azure/json.rs
use serde_json::{Map, Value};

/// Output name to resolved value, as reported by a deployment
pub type DeploymentOutputs = Map<String, Value>;

/// Walk `path` through nested JSON objects.
///
/// Returns `None` as soon as a segment is missing or the current value is
/// not an object.
pub fn get_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}

/// Extract `properties.outputs` from a deployment response, stripping the
/// `{"value": ...}` wrapper from each entry.
///
/// `None` means the response has no outputs block at all (missing or null).
/// An outputs block that is present but empty yields `Some` of an empty map.
pub fn outputs_from_response(response: &Value) -> Option<DeploymentOutputs> {
    let outputs = match get_path(response, &["properties", "outputs"])? {
        Value::Null => return None,
        Value::Object(outputs) => outputs,
        other => {
            tracing::warn!(outputs = %other, "deployment outputs are not an object");
            return None;
        }
    };

    let unwrapped = outputs
        .iter()
        .filter_map(|(name, entry)| match entry.get("value") {
            Some(value) => Some((name.clone(), value.clone())),
            None => {
                tracing::warn!(output = %name, "deployment output has no value");
                None
            }
        })
        .collect();

    Some(unwrapped)
}
