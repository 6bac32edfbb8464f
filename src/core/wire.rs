//! `WireValue` for the primitive and collection types, plus helpers shared by
//! generated shapes.

use crate::domain::ports::WireValue;
use crate::domain::schema::FieldType;
use crate::utils::error::{ModelError, Result};
use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

impl WireValue for String {
    fn field_type() -> FieldType {
        FieldType::String
    }

    fn to_wire(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_wire(value: &Value, path: &str) -> Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| type_mismatch(path, "string", value))
    }
}

impl WireValue for i32 {
    fn field_type() -> FieldType {
        FieldType::Integer
    }

    fn to_wire(&self) -> Value {
        Value::from(*self)
    }

    fn from_wire(value: &Value, path: &str) -> Result<Self> {
        let wide = value
            .as_i64()
            .ok_or_else(|| type_mismatch(path, "integer", value))?;
        i32::try_from(wide)
            .map_err(|_| ModelError::marshalling(path, format!("{} does not fit in an integer", wide)))
    }
}

impl WireValue for i64 {
    fn field_type() -> FieldType {
        FieldType::Long
    }

    fn to_wire(&self) -> Value {
        Value::from(*self)
    }

    fn from_wire(value: &Value, path: &str) -> Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| type_mismatch(path, "long", value))
    }
}

impl WireValue for bool {
    fn field_type() -> FieldType {
        FieldType::Boolean
    }

    fn to_wire(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_wire(value: &Value, path: &str) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| type_mismatch(path, "boolean", value))
    }
}

/// Timestamps travel as epoch seconds with millisecond precision.
impl WireValue for DateTime<Utc> {
    fn field_type() -> FieldType {
        FieldType::Timestamp
    }

    fn to_wire(&self) -> Value {
        let millis = self.timestamp_millis();
        if millis % 1000 == 0 {
            Value::from(millis / 1000)
        } else {
            Number::from_f64(millis as f64 / 1000.0)
                .map(Value::Number)
                .unwrap_or_else(|| Value::from(self.timestamp()))
        }
    }

    fn from_wire(value: &Value, path: &str) -> Result<Self> {
        decode_timestamp(value)
            .map(Self::canonical)
            .ok_or_else(|| type_mismatch(path, "timestamp (epoch seconds or RFC 3339)", value))
    }

    fn canonical(self) -> Self {
        self.duration_trunc(TimeDelta::milliseconds(1)).unwrap_or(self)
    }
}

pub(crate) fn decode_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => {
            if let Some(secs) = n.as_i64() {
                DateTime::from_timestamp(secs, 0)
            } else {
                let secs = n.as_f64()?;
                DateTime::from_timestamp_millis((secs * 1000.0).round() as i64)
            }
        }
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    }
}

impl<T: WireValue> WireValue for Vec<T> {
    fn field_type() -> FieldType {
        FieldType::list(T::field_type())
    }

    fn to_wire(&self) -> Value {
        Value::Array(self.iter().map(WireValue::to_wire).collect())
    }

    fn from_wire(value: &Value, path: &str) -> Result<Self> {
        let items = value
            .as_array()
            .ok_or_else(|| type_mismatch(path, "list", value))?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| T::from_wire(item, &format!("{}[{}]", path, index)))
            .collect()
    }
    fn canonical(self) -> Self {
        self.into_iter().map(T::canonical).collect()
    }
}

impl<T: WireValue> WireValue for BTreeMap<String, T> {
    fn field_type() -> FieldType {
        FieldType::map(T::field_type())
    }

    fn to_wire(&self) -> Value {
        let mut map = Map::with_capacity(self.len());
        for (key, value) in self {
            map.insert(key.clone(), value.to_wire());
        }
        Value::Object(map)
    }

    fn from_wire(value: &Value, path: &str) -> Result<Self> {
        let entries = value
            .as_object()
            .ok_or_else(|| type_mismatch(path, "map", value))?;
        entries
            .iter()
            .map(|(key, item)| {
                T::from_wire(item, &format!("{}.{}", path, key)).map(|v| (key.clone(), v))
            })
            .collect()
    }
    fn canonical(self) -> Self {
        self.into_iter()
            .map(|(key, value)| (key, value.canonical()))
            .collect()
    }
}

/// Borrows the object a shape is decoded from.
pub fn expect_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| type_mismatch(path, "structure", value))
}

/// Decodes one member of a shape; a missing key and an explicit null are both absent.
pub fn decode_member<T: WireValue>(
    object: &Map<String, Value>,
    wire_name: &str,
    path: &str,
) -> Result<Option<T>> {
    match object.get(wire_name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::from_wire(value, &format!("{}.{}", path, wire_name)).map(Some),
    }
}

pub fn type_mismatch(path: &str, expected: &str, found: &Value) -> ModelError {
    ModelError::marshalling(path, format!("expected {}, found {}", expected, kind_of(found)))
}

pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "structure",
    }
}

/// Brace-form rendering of a payload: `{Key: InstanceId, Values: [i-0123456789abcdef0]}`.
pub fn render_payload(value: &Value) -> String {
    let mut out = String::new();
    render_into(value, &mut out);
    out
}

fn render_into(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(s),
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                render_into(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (index, (key, item)) in map.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push_str(": ");
                render_into(item, out);
            }
            out.push('}');
        }
    }
}
