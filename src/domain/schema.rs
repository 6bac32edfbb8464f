//! Descriptors for shapes, fields, enums, errors and operations.
//!
//! Descriptors are built once and shared; they carry no per-request state.

use crate::utils::error::{ModelError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Semantic type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Long,
    Boolean,
    Timestamp,
    List(Box<FieldType>),
    /// Map with string keys.
    Map(Box<FieldType>),
    /// Nested shape, referenced by name.
    Structure(String),
    Enum(Arc<EnumDescriptor>),
}

impl FieldType {
    pub fn list(element: FieldType) -> Self {
        FieldType::List(Box::new(element))
    }

    pub fn map(value: FieldType) -> Self {
        FieldType::Map(Box::new(value))
    }

    pub fn structure(name: impl Into<String>) -> Self {
        FieldType::Structure(name.into())
    }

    /// Parses the type notation used by service-model files, e.g. `list<structure:Target>`.
    pub fn parse(notation: &str, enums: &[Arc<EnumDescriptor>]) -> Result<Self> {
        let notation = notation.trim();
        if let Some(inner) = strip_wrapper(notation, "list") {
            return Ok(FieldType::list(FieldType::parse(inner, enums)?));
        }
        if let Some(inner) = strip_wrapper(notation, "map") {
            return Ok(FieldType::map(FieldType::parse(inner, enums)?));
        }
        if let Some(name) = notation.strip_prefix("structure:") {
            return Ok(FieldType::structure(name.trim()));
        }
        if let Some(name) = notation.strip_prefix("enum:") {
            let name = name.trim();
            return enums
                .iter()
                .find(|e| e.name() == name)
                .map(|e| FieldType::Enum(Arc::clone(e)))
                .ok_or_else(|| ModelError::schema(format!("undefined enum '{}'", name)));
        }
        match notation {
            "string" => Ok(FieldType::String),
            "integer" => Ok(FieldType::Integer),
            "long" => Ok(FieldType::Long),
            "boolean" => Ok(FieldType::Boolean),
            "timestamp" => Ok(FieldType::Timestamp),
            other => Err(ModelError::schema(format!("unknown field type '{}'", other))),
        }
    }

    /// Names of every nested structure this type refers to.
    pub fn referenced_shapes(&self) -> Vec<&str> {
        match self {
            FieldType::Structure(name) => vec![name.as_str()],
            FieldType::List(inner) | FieldType::Map(inner) => inner.referenced_shapes(),
            _ => Vec::new(),
        }
    }
}

fn strip_wrapper<'a>(notation: &'a str, wrapper: &str) -> Option<&'a str> {
    notation
        .strip_prefix(wrapper)
        .and_then(|rest| rest.strip_prefix('<'))
        .and_then(|rest| rest.strip_suffix('>'))
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => f.write_str("string"),
            FieldType::Integer => f.write_str("integer"),
            FieldType::Long => f.write_str("long"),
            FieldType::Boolean => f.write_str("boolean"),
            FieldType::Timestamp => f.write_str("timestamp"),
            FieldType::List(inner) => write!(f, "list<{}>", inner),
            FieldType::Map(inner) => write!(f, "map<{}>", inner),
            FieldType::Structure(name) => write!(f, "structure:{}", name),
            FieldType::Enum(e) => write!(f, "enum:{}", e.name()),
        }
    }
}

/// Declared constraints on a field. Length bounds apply to string characters and to
/// list/map sizes; value bounds apply to integers.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<String>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
}

impl Constraints {
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn min_value(mut self, min: i64) -> Self {
        self.min_value = Some(min);
        self
    }

    pub fn max_value(mut self, max: i64) -> Self {
        self.max_value = Some(max);
        self
    }

    pub fn is_empty(&self) -> bool {
        !self.required
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.pattern.is_none()
            && self.min_value.is_none()
            && self.max_value.is_none()
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.required {
            parts.push("required".to_string());
        }
        match (self.min_length, self.max_length) {
            (Some(min), Some(max)) => parts.push(format!("length {} - {}", min, max)),
            (Some(min), None) => parts.push(format!("length >= {}", min)),
            (None, Some(max)) => parts.push(format!("length <= {}", max)),
            (None, None) => {}
        }
        match (self.min_value, self.max_value) {
            (Some(min), Some(max)) => parts.push(format!("range {} - {}", min, max)),
            (Some(min), None) => parts.push(format!("value >= {}", min)),
            (None, Some(max)) => parts.push(format!("value <= {}", max)),
            (None, None) => {}
        }
        if let Some(pattern) = &self.pattern {
            parts.push(format!("pattern {}", pattern));
        }
        f.write_str(&parts.join(", "))
    }
}

#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    local_name: String,
    wire_name: String,
    field_type: FieldType,
    constraints: Constraints,
    compiled_pattern: Option<Regex>,
}

impl FieldDescriptor {
    pub fn new(
        local_name: impl Into<String>,
        wire_name: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self {
            local_name: local_name.into(),
            wire_name: wire_name.into(),
            field_type,
            constraints: Constraints::default(),
            compiled_pattern: None,
        }
    }

    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn wire_name(&self) -> &str {
        &self.wire_name
    }

    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn is_required(&self) -> bool {
        self.constraints.required
    }

    /// Compiled form of `constraints().pattern`, present once the owning shape is built.
    pub fn pattern(&self) -> Option<&Regex> {
        self.compiled_pattern.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct ShapeDescriptor {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl ShapeDescriptor {
    pub fn builder(name: impl Into<String>) -> ShapeDescriptorBuilder {
        ShapeDescriptorBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, local_name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.local_name == local_name)
    }

    pub fn field_by_wire_name(&self, wire_name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }
}

#[derive(Debug)]
pub struct ShapeDescriptorBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl ShapeDescriptorBuilder {
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Checks name uniqueness and compiles patterns.
    pub fn build(self) -> Result<ShapeDescriptor> {
        let mut local_names = HashSet::new();
        let mut wire_names = HashSet::new();
        let mut fields = Vec::with_capacity(self.fields.len());

        for mut field in self.fields {
            if !local_names.insert(field.local_name.clone()) {
                return Err(ModelError::schema(format!(
                    "shape {} declares field '{}' twice",
                    self.name, field.local_name
                )));
            }
            if !wire_names.insert(field.wire_name.clone()) {
                return Err(ModelError::schema(format!(
                    "shape {} declares wire name '{}' twice",
                    self.name, field.wire_name
                )));
            }
            if let Some(pattern) = &field.constraints.pattern {
                let regex = Regex::new(pattern).map_err(|e| {
                    ModelError::schema(format!(
                        "invalid pattern for {}.{}: {}",
                        self.name, field.local_name, e
                    ))
                })?;
                field.compiled_pattern = Some(regex);
            }
            fields.push(field);
        }

        Ok(ShapeDescriptor {
            name: self.name,
            fields,
        })
    }
}

/// Closed set of wire strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    name: String,
    values: Vec<String>,
}

impl EnumDescriptor {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

/// A wire error code and the diagnostic fields it may carry besides the message.
#[derive(Debug, Clone)]
pub struct ErrorDescriptor {
    code: String,
    fields: Vec<FieldDescriptor>,
}

impl ErrorDescriptor {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    name: String,
    input: String,
    output: String,
    errors: Vec<String>,
}

impl OperationDescriptor {
    pub fn new(name: impl Into<String>, input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            output: output.into(),
            errors: Vec::new(),
        }
    }

    pub fn with_errors<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors.extend(codes.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn declares_error(&self, code: &str) -> bool {
        self.errors.iter().any(|c| c == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_field_rejected() {
        let result = ShapeDescriptor::builder("Tag")
            .field(FieldDescriptor::new("key", "Key", FieldType::String))
            .field(FieldDescriptor::new("key", "Value", FieldType::String))
            .build();
        assert!(matches!(result, Err(ModelError::SchemaError { .. })));

        let result = ShapeDescriptor::builder("Tag")
            .field(FieldDescriptor::new("key", "Key", FieldType::String))
            .field(FieldDescriptor::new("other", "Key", FieldType::String))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_pattern_compiled_on_build() {
        let shape = ShapeDescriptor::builder("Target")
            .field(
                FieldDescriptor::new("key", "Key", FieldType::String)
                    .with_constraints(Constraints::default().pattern("^[a-z]+$")),
            )
            .build()
            .unwrap();
        let key = shape.field("key").unwrap();
        assert!(key.pattern().unwrap().is_match("abc"));
        assert_eq!(shape.field_by_wire_name("Key").unwrap().local_name(), "key");

        let bad = ShapeDescriptor::builder("Broken")
            .field(
                FieldDescriptor::new("key", "Key", FieldType::String)
                    .with_constraints(Constraints::default().pattern("([")),
            )
            .build();
        assert!(bad.is_err());
    }

    #[test]
    fn test_parse_field_type_notation() {
        let ping = Arc::new(EnumDescriptor::new("PingStatus", ["Online", "Inactive"]));
        let enums = vec![ping];

        assert_eq!(
            FieldType::parse("map<list<string>>", &enums).unwrap(),
            FieldType::map(FieldType::list(FieldType::String))
        );
        assert_eq!(
            FieldType::parse("list<structure:Target>", &enums).unwrap(),
            FieldType::list(FieldType::structure("Target"))
        );
        assert!(matches!(
            FieldType::parse("enum:PingStatus", &enums).unwrap(),
            FieldType::Enum(_)
        ));
        assert!(FieldType::parse("enum:Missing", &enums).is_err());
        assert!(FieldType::parse("float", &enums).is_err());
        assert_eq!(
            FieldType::parse("list<structure:Target>", &enums)
                .unwrap()
                .to_string(),
            "list<structure:Target>"
        );
    }

    #[test]
    fn test_constraints_render_only_what_is_declared() {
        assert!(Constraints::default().is_empty());
        assert!(!Constraints::default().required(true).is_empty());

        let bounded = Constraints::default().required(true).min_length(1).max_length(128);
        assert!(!bounded.is_empty());
        assert_eq!(bounded.to_string(), "required, length 1 - 128");
    }
}
