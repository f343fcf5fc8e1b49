use crate::value::{Value, ValueError};
use serde_json::{Number, Value as JsonValue};

impl TryFrom<JsonValue> for Value {
    type Error = ValueError;

    fn try_from(json: JsonValue) -> Result<Self, Self::Error> {
        let value = match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(v) => Self::Bool(v),
            JsonValue::Number(n) => from_number(&n),
            JsonValue::String(s) => Self::Text(s),
            JsonValue::Array(items) => Self::List(
                items
                    .into_iter()
                    .map(Self::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            JsonValue::Object(map) => {
                return Err(ValueError::UnsupportedObject {
                    keys: map.keys().cloned().collect(),
                });
            }
        };

        Ok(value)
    }
}

// Prefer the signed representation so `1` decodes the same way an `i32`
// literal converts through `FieldValue`.
fn from_number(n: &Number) -> Value {
    if let Some(v) = n.as_i64() {
        Value::Int(v)
    } else if let Some(v) = n.as_u64() {
        Value::Uint(v)
    } else {
        n.as_f64().map_or(Value::Null, Value::Float64)
    }
}

/// Lossy in two places:
/// - blobs are encoded as arrays of byte values and decode back as lists;
/// - non-finite floats (NaN, ±inf) have no JSON form and encode as `null`.
impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Blob(bytes) => Self::Array(bytes.into_iter().map(Self::from).collect()),
            Value::Bool(v) => Self::Bool(v),
            Value::Float64(v) => Self::from(v),
            Value::Int(v) => Self::from(v),
            Value::List(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Null => Self::Null,
            Value::Text(s) => Self::String(s),
            Value::Uint(v) => Self::from(v),
        }
    }
}
