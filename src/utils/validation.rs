use crate::domain::schema::{Constraints, EnumDescriptor};
use crate::utils::error::{ModelError, Result};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks a string's character count or a collection's size against the length bounds.
pub fn validate_length(path: &str, length: usize, constraints: &Constraints) -> Result<()> {
    if let Some(min) = constraints.min_length {
        if length < min {
            return Err(ModelError::validation(
                path,
                format!("length {} is below the minimum of {}", length, min),
            ));
        }
    }
    if let Some(max) = constraints.max_length {
        if length > max {
            return Err(ModelError::validation(
                path,
                format!("length {} exceeds the maximum of {}", length, max),
            ));
        }
    }
    Ok(())
}

pub fn validate_pattern(path: &str, value: &str, pattern: &Regex) -> Result<()> {
    if !pattern.is_match(value) {
        return Err(ModelError::validation(
            path,
            format!("'{}' does not match pattern {}", value, pattern.as_str()),
        ));
    }
    Ok(())
}

pub fn validate_value_range(path: &str, value: i64, constraints: &Constraints) -> Result<()> {
    match (constraints.min_value, constraints.max_value) {
        (Some(min), Some(max)) => validate_range(path, value, min, max),
        (Some(min), None) if value < min => Err(ModelError::validation(
            path,
            format!("value {} is below the minimum of {}", value, min),
        )),
        (None, Some(max)) if value > max => Err(ModelError::validation(
            path,
            format!("value {} exceeds the maximum of {}", value, max),
        )),
        _ => Ok(()),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    path: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ModelError::validation(
            path,
            format!("value {} must be between {} and {}", value, min, max),
        ));
    }
    Ok(())
}

pub fn validate_enum_member(path: &str, value: &str, descriptor: &EnumDescriptor) -> Result<()> {
    if !descriptor.contains(value) {
        return Err(ModelError::validation(
            path,
            format!(
                "'{}' is not a member of {} (expected one of: {})",
                value,
                descriptor.name(),
                descriptor.values().join(", ")
            ),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
