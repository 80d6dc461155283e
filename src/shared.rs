//! Shared helpers used across auth and session code.
//!
//! The backend signals application-level outcomes through a `success` field on
//! otherwise free-form JSON bodies. Its presence and type are not guaranteed, so
//! the flag is read with the same truthiness the web client applied.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Read the `success` flag of a response body.
///
/// Missing, `null`, `false`, `0` and `""` are all a failure. A body that is not
/// an object has no flag and is a failure too.
pub fn success_flag(body: &Value) -> bool {
    match body.get("success") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// A `{success, ...}` envelope; fields other than `success` are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub success: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Value> for Outcome {
    fn from(body: Value) -> Self {
        let success = success_flag(&body);
        let extra = match body {
            Value::Object(mut map) => {
                map.remove("success");
                map
            }
            _ => Map::new(),
        };
        Self { success, extra }
    }
}
