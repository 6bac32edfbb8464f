//! Service-model files: shapes, enums, errors and operations declared in TOML and loaded
//! into a [`ModelRegistry`] at runtime.
//!
//! ```toml
//! [service]
//! name = "SSM"
//! description = "${SSM_MODEL_DESCRIPTION}"
//!
//! [[enums]]
//! name = "PingStatus"
//! values = ["Online", "ConnectionLost", "Inactive"]
//!
//! [[shapes]]
//! name = "PingRequest"
//!
//! [[shapes.fields]]
//! name = "instance_id"
//! wire_name = "InstanceId"
//! type = "string"
//! required = true
//! pattern = "^i-[0-9a-f]{8,17}$"
//!
//! [[operations]]
//! name = "Ping"
//! input = "PingRequest"
//! output = "PingRequest"
//! errors = ["InternalServerError"]
//!
//! [[errors]]
//! code = "InternalServerError"
//! ```

use crate::core::registry::ModelRegistry;
use crate::domain::schema::{
    Constraints, EnumDescriptor, ErrorDescriptor, FieldDescriptor, FieldType, OperationDescriptor,
    ShapeDescriptor,
};
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceModelFile {
    pub service: ServiceSection,
    #[serde(default)]
    pub enums: Vec<EnumSection>,
    #[serde(default)]
    pub shapes: Vec<ShapeSection>,
    #[serde(default)]
    pub errors: Vec<ErrorSection>,
    #[serde(default)]
    pub operations: Vec<OperationSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumSection {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeSection {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSection {
    pub name: String,
    /// Defaults to `name`.
    pub wire_name: Option<String>,
    pub r#type: String,
    #[serde(default)]
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<String>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorSection {
    pub code: String,
    #[serde(default)]
    pub fields: Vec<FieldSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationSection {
    pub name: String,
    pub input: String,
    pub output: String,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ServiceModelFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ModelError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        let model: Self =
            toml::from_str(&processed_content).map_err(|e| ModelError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        model.validate()?;
        Ok(model)
    }

    /// Builds a standalone registry; every reference must resolve inside the file.
    pub fn into_registry(self) -> Result<ModelRegistry> {
        let mut registry = ModelRegistry::new(self.service.name.clone());
        self.extend_registry(&mut registry)?;
        Ok(registry)
    }

    /// Adds the file's definitions to `registry`. References may point at shapes and
    /// enums the registry already holds. Nothing is added unless the result validates.
    pub fn extend_registry(self, registry: &mut ModelRegistry) -> Result<()> {
        let mut additions = ModelRegistry::new(self.service.name.clone());

        for section in &self.enums {
            additions.add_enum(EnumDescriptor::new(&section.name, section.values.iter().cloned()))?;
        }

        let known_enums: Vec<Arc<EnumDescriptor>> = additions
            .enums()
            .chain(registry.enums())
            .map(|e| Arc::new(e.clone()))
            .collect();

        for section in &self.shapes {
            let mut builder = ShapeDescriptor::builder(&section.name);
            for field in &section.fields {
                builder = builder.field(field.to_descriptor(&known_enums)?);
            }
            additions.add_shape(builder.build()?)?;
        }

        for section in &self.errors {
            let mut descriptor = ErrorDescriptor::new(&section.code);
            for field in &section.fields {
                descriptor = descriptor.with_field(field.to_descriptor(&known_enums)?);
            }
            additions.add_error(descriptor)?;
        }

        for section in &self.operations {
            additions.add_operation(
                OperationDescriptor::new(&section.name, &section.input, &section.output)
                    .with_errors(section.errors.iter().cloned()),
            )?;
        }

        tracing::debug!(
            service = %self.service.name,
            shapes = self.shapes.len(),
            operations = self.operations.len(),
            "loaded service model"
        );

        let mut merged = registry.clone();
        merged.merge(additions)?;
        merged.validate()?;
        *registry = merged;
        Ok(())
    }
}

impl FieldSection {
    fn to_descriptor(&self, enums: &[Arc<EnumDescriptor>]) -> Result<FieldDescriptor> {
        let field_type = FieldType::parse(&self.r#type, enums)?;
        let mut constraints = Constraints::default().required(self.required);
        if let Some(min) = self.min_length {
            constraints = constraints.min_length(min);
        }
        if let Some(max) = self.max_length {
            constraints = constraints.max_length(max);
        }
        if let Some(pattern) = &self.pattern {
            constraints = constraints.pattern(pattern.clone());
        }
        if let Some(min) = self.min_value {
            constraints = constraints.min_value(min);
        }
        if let Some(max) = self.max_value {
            constraints = constraints.max_value(max);
        }

        let wire_name = self.wire_name.as_deref().unwrap_or(&self.name);
        Ok(FieldDescriptor::new(&self.name, wire_name, field_type).with_constraints(constraints))
    }
}

impl Validate for ServiceModelFile {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("service.name", &self.service.name)?;

        for section in &self.enums {
            validation::validate_non_empty_string("enums.name", &section.name)?;
            if section.values.is_empty() {
                return Err(ModelError::ConfigValidationError {
                    field: format!("enums.{}.values", section.name),
                    message: "an enum needs at least one value".to_string(),
                });
            }
        }

        for section in &self.shapes {
            validation::validate_non_empty_string("shapes.name", &section.name)?;
            for field in &section.fields {
                field.validate_bounds(&section.name)?;
            }
        }

        for section in &self.errors {
            validation::validate_non_empty_string("errors.code", &section.code)?;
        }

        for section in &self.operations {
            validation::validate_non_empty_string("operations.name", &section.name)?;
        }

        Ok(())
    }
}

impl FieldSection {
    fn validate_bounds(&self, shape: &str) -> Result<()> {
        let field = format!("shapes.{}.{}", shape, self.name);
        validation::validate_non_empty_string(&field, &self.name)?;
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(ModelError::InvalidConfigValueError {
                    field,
                    value: format!("{}..{}", min, max),
                    reason: "min_length is greater than max_length".to_string(),
                });
            }
        }
        if let (Some(min), Some(max)) = (self.min_value, self.max_value) {
            if min > max {
                return Err(ModelError::InvalidConfigValueError {
                    field,
                    value: format!("{}..{}", min, max),
                    reason: "min_value is greater than max_value".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Replaces `${VAR}` with the variable's value; unset variables are left as written.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ModelError::ConfigError {
        message: format!("invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}
