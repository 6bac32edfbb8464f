use crate::config::MarshallerConfig;
use crate::core::registry::ModelRegistry;
use crate::core::wire::{expect_object, type_mismatch};
use crate::domain::ports::{Shape, WireValue};
use crate::domain::schema::{FieldDescriptor, FieldType, ShapeDescriptor};
use crate::utils::error::{ModelError, Result};
use crate::utils::validation;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A service error as it came off the wire: normalized code, message and the
/// diagnostic fields its descriptor declares (keyed by local name).
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceFault {
    pub code: String,
    pub message: String,
    pub fields: BTreeMap<String, Value>,
}

impl ServiceFault {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn string(&self, name: &str) -> Option<String> {
        self.fields.get(name).and_then(|v| v.as_str()).map(str::to_string)
    }

    pub fn integer(&self, name: &str) -> Option<i32> {
        self.fields
            .get(name)
            .and_then(|v| i32::from_wire(v, name).ok())
    }

    pub fn string_list(&self, name: &str) -> Option<Vec<String>> {
        self.fields
            .get(name)
            .and_then(|v| Vec::<String>::from_wire(v, name).ok())
    }
}

/// Encodes shapes to payloads and back, checks payloads against the registry and
/// turns error bodies into [`ServiceFault`]s.
#[derive(Debug, Clone)]
pub struct Marshaller {
    registry: Arc<ModelRegistry>,
    config: MarshallerConfig,
}

impl Marshaller {
    pub fn new(registry: Arc<ModelRegistry>, config: MarshallerConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn config(&self) -> &MarshallerConfig {
        &self.config
    }

    pub fn encode<S: Shape>(&self, shape: &S) -> Result<Value> {
        let payload = shape.to_wire();
        if self.config.client_side_validation {
            self.validate(S::SHAPE_NAME, &payload)?;
        }
        if self.config.log_payloads {
            debug!(shape = S::SHAPE_NAME, payload = %payload, "encoded payload");
        }
        Ok(payload)
    }

    /// An empty body (`null`) decodes as an all-absent shape.
    pub fn decode<S: Shape>(&self, payload: &Value) -> Result<S> {
        if self.config.log_payloads {
            debug!(shape = S::SHAPE_NAME, payload = %payload, "decoding payload");
        }
        if payload.is_null() {
            return S::from_wire(&Value::Object(Map::new()), S::SHAPE_NAME);
        }
        if self.config.reject_unknown_fields {
            self.normalize(S::SHAPE_NAME, payload)?;
        }
        S::from_wire(payload, S::SHAPE_NAME)
    }

    /// Checks a payload against a registered shape: types, required fields,
    /// lengths, patterns, numeric ranges and enum membership.
    pub fn validate(&self, shape_name: &str, payload: &Value) -> Result<()> {
        let shape = self.registry.shape(shape_name)?;
        self.validate_shape(shape, payload, shape_name)
    }

    fn validate_shape(&self, shape: &ShapeDescriptor, payload: &Value, path: &str) -> Result<()> {
        let object = expect_object(payload, path)?;
        for field in shape.fields() {
            let field_path = format!("{}.{}", path, field.wire_name());
            match object.get(field.wire_name()) {
                None | Some(Value::Null) => {
                    if field.is_required() {
                        return Err(ModelError::validation(field_path, "required field is missing"));
                    }
                }
                Some(value) => {
                    self.validate_value(field.field_type(), Some(field), value, &field_path)?
                }
            }
        }
        Ok(())
    }

    // Constraints apply to the field's own value; collection elements are only type-checked.
    fn validate_value(
        &self,
        field_type: &FieldType,
        field: Option<&FieldDescriptor>,
        value: &Value,
        path: &str,
    ) -> Result<()> {
        match field_type {
            FieldType::String => {
                let text = value
                    .as_str()
                    .ok_or_else(|| type_mismatch(path, "string", value))?;
                if let Some(field) = field {
                    validation::validate_length(path, text.chars().count(), field.constraints())?;
                    if let Some(pattern) = field.pattern() {
                        validation::validate_pattern(path, text, pattern)?;
                    }
                }
            }
            FieldType::Integer => {
                let number = i32::from_wire(value, path)?;
                if let Some(field) = field {
                    validation::validate_value_range(path, i64::from(number), field.constraints())?;
                }
            }
            FieldType::Long => {
                let number = i64::from_wire(value, path)?;
                if let Some(field) = field {
                    validation::validate_value_range(path, number, field.constraints())?;
                }
            }
            FieldType::Boolean => {
                bool::from_wire(value, path)?;
            }
            FieldType::Timestamp => {
                DateTime::<Utc>::from_wire(value, path)?;
            }
            FieldType::Enum(descriptor) => {
                let text = String::from_wire(value, path)?;
                validation::validate_enum_member(path, &text, descriptor)?;
            }
            FieldType::List(element) => {
                let items = value
                    .as_array()
                    .ok_or_else(|| type_mismatch(path, "list", value))?;
                if let Some(field) = field {
                    validation::validate_length(path, items.len(), field.constraints())?;
                }
                for (index, item) in items.iter().enumerate() {
                    self.validate_value(element, None, item, &format!("{}[{}]", path, index))?;
                }
            }
            FieldType::Map(element) => {
                let entries = value
                    .as_object()
                    .ok_or_else(|| type_mismatch(path, "map", value))?;
                if let Some(field) = field {
                    validation::validate_length(path, entries.len(), field.constraints())?;
                }
                for (key, item) in entries {
                    self.validate_value(element, None, item, &format!("{}.{}", path, key))?;
                }
            }
            FieldType::Structure(name) => {
                let nested = self.registry.shape(name)?;
                self.validate_shape(nested, value, path)?;
            }
        }
        Ok(())
    }

    /// Rewrites a payload into canonical form: declared fields only, in declaration
    /// order, with nulls dropped. Unknown fields are dropped, or rejected when
    /// `reject_unknown_fields` is set.
    pub fn normalize(&self, shape_name: &str, payload: &Value) -> Result<Value> {
        let shape = self.registry.shape(shape_name)?;
        self.normalize_shape(shape, payload, shape_name)
    }

    fn normalize_shape(&self, shape: &ShapeDescriptor, payload: &Value, path: &str) -> Result<Value> {
        let object = expect_object(payload, path)?;

        for key in object.keys() {
            if shape.field_by_wire_name(key).is_none() {
                if self.config.reject_unknown_fields {
                    return Err(ModelError::marshalling(
                        format!("{}.{}", path, key),
                        format!("{} has no member named {}", shape.name(), key),
                    ));
                }
                trace!(shape = shape.name(), field = %key, "dropping unknown field");
            }
        }

        let mut normalized = Map::with_capacity(shape.fields().len());
        for field in shape.fields() {
            match object.get(field.wire_name()) {
                None | Some(Value::Null) => {}
                Some(value) => {
                    let field_path = format!("{}.{}", path, field.wire_name());
                    let value = self.normalize_value(field.field_type(), value, &field_path)?;
                    normalized.insert(field.wire_name().to_string(), value);
                }
            }
        }
        Ok(Value::Object(normalized))
    }

    fn normalize_value(&self, field_type: &FieldType, value: &Value, path: &str) -> Result<Value> {
        match field_type {
            FieldType::Structure(name) => {
                let nested = self.registry.shape(name)?;
                self.normalize_shape(nested, value, path)
            }
            FieldType::List(element) => {
                let items = value
                    .as_array()
                    .ok_or_else(|| type_mismatch(path, "list", value))?;
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        self.normalize_value(element, item, &format!("{}[{}]", path, index))
                    })
                    .collect::<Result<Vec<_>>>()
                    .map(Value::Array)
            }
            FieldType::Map(element) => {
                let entries = value
                    .as_object()
                    .ok_or_else(|| type_mismatch(path, "map", value))?;
                let mut normalized = Map::with_capacity(entries.len());
                for (key, item) in entries {
                    let item = self.normalize_value(element, item, &format!("{}.{}", path, key))?;
                    normalized.insert(key.clone(), item);
                }
                Ok(Value::Object(normalized))
            }
            FieldType::Enum(_) => {
                String::from_wire(value, path)?;
                Ok(value.clone())
            }
            scalar => {
                self.validate_value(scalar, None, value, path)?;
                Ok(value.clone())
            }
        }
    }

    /// Builds a fault from an error code and error body. Declared diagnostic fields
    /// that are missing or ill-typed are left out.
    pub fn decode_fault(&self, code: &str, payload: &Value) -> ServiceFault {
        let code = error_code(code);
        let message = error_message(payload);
        let mut fault = ServiceFault::new(code, message);

        let Some(descriptor) = self.registry.error(code) else {
            debug!(code, "error code has no descriptor");
            return fault;
        };

        for field in descriptor.fields() {
            let Some(value) = payload.get(field.wire_name()).filter(|v| !v.is_null()) else {
                continue;
            };
            let path = format!("{}.{}", code, field.wire_name());
            match self.validate_value(field.field_type(), None, value, &path) {
                Ok(()) => {
                    fault.fields.insert(field.local_name().to_string(), value.clone());
                }
                Err(e) => warn!(code, field = field.wire_name(), error = %e, "ignoring diagnostic field"),
            }
        }
        fault
    }
}

/// `com.amazonaws.ssm#InvalidDocument` and `InvalidDocument:http://...` both name `InvalidDocument`.
pub fn error_code(raw: &str) -> &str {
    let code = raw.split(':').next().unwrap_or(raw);
    code.rsplit('#').next().unwrap_or(code).trim()
}

fn error_message(payload: &Value) -> String {
    ["message", "Message", "errorMessage"]
        .iter()
        .find_map(|key| payload.get(*key).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}
