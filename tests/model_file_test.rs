use anyhow::Result;
use serde_json::json;
use ssm_model::{ssm_registry, Marshaller, MarshallerConfig, ModelError, ServiceModelFile};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

const PARAMETER_MODEL: &str = r#"
[service]
name = "SSM"
description = "Parameter Store additions"

[[enums]]
name = "ParameterType"
values = ["String", "StringList", "SecureString"]

[[shapes]]
name = "PutParameterRequest"

[[shapes.fields]]
name = "name"
wire_name = "Name"
type = "string"
required = true
min_length = 1
max_length = 2048

[[shapes.fields]]
name = "value"
wire_name = "Value"
type = "string"
required = true

[[shapes.fields]]
name = "parameter_type"
wire_name = "Type"
type = "enum:ParameterType"

[[shapes.fields]]
name = "tags"
wire_name = "Tags"
type = "list<structure:Tag>"
max_length = 1000

[[shapes]]
name = "PutParameterResult"

[[shapes.fields]]
name = "version"
wire_name = "Version"
type = "long"
min_value = 1

[[errors]]
code = "ParameterAlreadyExists"

[[operations]]
name = "PutParameter"
input = "PutParameterRequest"
output = "PutParameterResult"
errors = ["ParameterAlreadyExists", "InternalServerError"]
"#;

fn write_model(dir: &TempDir, content: &str) -> Result<std::path::PathBuf> {
    let path = dir.path().join("parameters.toml");
    fs::write(&path, content)?;
    Ok(path)
}

#[test]
fn test_model_file_extends_builtin_registry() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_model(&temp_dir, PARAMETER_MODEL)?;

    let mut registry = ssm_registry()?;
    ServiceModelFile::from_file(&path)?.extend_registry(&mut registry)?;

    // Shapes from the file can reference built-in shapes and errors
    let operation = registry.operation("PutParameter")?;
    assert_eq!(operation.input(), "PutParameterRequest");
    assert!(operation.declares_error("InternalServerError"));
    assert!(registry.operation("CreateOpsItem").is_ok());

    let marshaller = Marshaller::new(Arc::new(registry), MarshallerConfig::default());
    marshaller.validate(
        "PutParameterRequest",
        &json!({
            "Name": "/app/db/host",
            "Value": "db.internal",
            "Type": "String",
            "Tags": [{"Key": "Team", "Value": "ops"}]
        }),
    )?;

    let err = marshaller
        .validate(
            "PutParameterRequest",
            &json!({"Name": "/app/db/host", "Value": "x", "Type": "Secret"}),
        )
        .unwrap_err();
    assert!(matches!(err, ModelError::ValidationError { .. }));
    Ok(())
}

#[test]
fn test_standalone_model_file_builds_registry() -> Result<()> {
    let standalone = PARAMETER_MODEL
        .replace(r#"type = "list<structure:Tag>""#, r#"type = "list<string>""#)
        .replace(r#", "InternalServerError""#, "");
    let temp_dir = TempDir::new()?;
    let path = write_model(&temp_dir, &standalone)?;

    let registry = ServiceModelFile::from_file(&path)?.into_registry()?;
    assert_eq!(registry.service_name(), "SSM");
    assert_eq!(registry.operations().count(), 1);
    assert!(registry.enum_type("ParameterType").is_some());
    Ok(())
}

#[test]
fn test_unresolved_references_are_schema_errors() -> Result<()> {
    // Tag and InternalServerError live only in the built-in registry
    let model = ServiceModelFile::from_toml_str(PARAMETER_MODEL)?;
    assert!(matches!(model.into_registry(), Err(ModelError::SchemaError { .. })));
    Ok(())
}

#[test]
fn test_duplicate_shape_is_rejected_on_merge() -> Result<()> {
    let clash = PARAMETER_MODEL.replace(
        r#"name = "PutParameterResult""#,
        r#"name = "CreateOpsItemResult""#,
    );
    let clash = clash.replace(
        r#"output = "PutParameterResult""#,
        r#"output = "CreateOpsItemResult""#,
    );

    let mut registry = ssm_registry()?;
    let shapes_before = registry.shapes().count();
    let result = ServiceModelFile::from_toml_str(&clash)?.extend_registry(&mut registry);
    assert!(result.is_err());
    assert_eq!(registry.shapes().count(), shapes_before);
    assert!(registry.shape("PutParameterRequest").is_err());
    Ok(())
}

#[test]
fn test_failed_extend_leaves_registry_unchanged() -> Result<()> {
    let dangling = PARAMETER_MODEL.replace(r#"type = "list<structure:Tag>""#, r#"type = "structure:Missing""#);

    let mut registry = ssm_registry()?;
    let shapes_before = registry.shapes().count();
    let operations_before = registry.operations().count();

    let result = ServiceModelFile::from_toml_str(&dangling)?.extend_registry(&mut registry);
    assert!(matches!(result, Err(ModelError::SchemaError { .. })));

    assert_eq!(registry.shapes().count(), shapes_before);
    assert_eq!(registry.operations().count(), operations_before);
    assert!(registry.shape("PutParameterRequest").is_err());
    assert!(registry.enum_type("ParameterType").is_none());
    registry.validate()?;
    Ok(())
}

#[test]
fn test_missing_and_malformed_files() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let missing = ServiceModelFile::from_file(temp_dir.path().join("absent.toml"));
    assert!(matches!(missing, Err(ModelError::IoError(_))));

    let path = write_model(&temp_dir, "[service\nname = ")?;
    let malformed = ServiceModelFile::from_file(&path);
    assert!(matches!(malformed, Err(ModelError::ConfigValidationError { .. })));
    Ok(())
}
