//! Conversions between [`Value`] and `serde_json::Value`.
//!
//! Both directions are fallible: JSON integers above `i64::MAX` have no
//! `Value::Int` representation, and non-finite floats (`NaN`, infinities)
//! have no JSON representation. Converting a map into a JSON object applies
//! the last-wins policy for duplicate keys.

use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::{error::ConvertError, Value};

impl TryFrom<JsonValue> for Value {
    type Error = ConvertError;

    fn try_from(v: JsonValue) -> Result<Self, ConvertError> {
        Ok(match v {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    return Err(ConvertError::IntOutOfRange(u));
                } else {
                    // only the f64 representation remains
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(s) => Value::Str(s),
            JsonValue::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            JsonValue::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(k, v)| Ok((k, Value::try_from(v)?)))
                    .collect::<Result<_, ConvertError>>()?,
            ),
        })
    }
}

impl TryFrom<Value> for JsonValue {
    type Error = ConvertError;

    fn try_from(v: Value) -> Result<Self, ConvertError> {
        Ok(match v {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Int(i) => JsonValue::Number(i.into()),
            Value::Float(f) => match Number::from_f64(f) {
                Some(n) => JsonValue::Number(n),
                None => return Err(ConvertError::NonFiniteFloat(f)),
            },
            Value::Str(s) => JsonValue::String(s),
            Value::Array(items) => JsonValue::Array(
                items
                    .into_iter()
                    .map(JsonValue::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Map(entries) => {
                // duplicate keys collapse here, the last occurrence wins
                let mut map = JsonMap::new();
                for (k, v) in entries {
                    map.insert(k, JsonValue::try_from(v)?);
                }
                JsonValue::Object(map)
            }
        })
    }
}
