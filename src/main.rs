use clap::Parser;
use serde_json::Value;
use ssm_model::config::{CliConfig, Command, ENV_CLIENT_VALIDATION};
use ssm_model::utils::error::{ErrorSeverity, ModelError};
use ssm_model::utils::{logger, validation::Validate};
use ssm_model::{ssm_registry, Marshaller, MarshallerConfig, ModelRegistry, ServiceModelFile};
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(config: CliConfig) -> Result<(), ModelError> {
    config.validate()?;

    let mut registry = ssm_registry()?;
    if let Some(path) = &config.model {
        tracing::info!("📄 Loading service model from {}", path.display());
        ServiceModelFile::from_file(path)?.extend_registry(&mut registry)?;
    }

    // The CLI validates unless the environment explicitly turns it off
    let mut marshaller_config = MarshallerConfig::from_env()?;
    if std::env::var_os(ENV_CLIENT_VALIDATION).is_none() {
        marshaller_config = marshaller_config.with_client_side_validation(true);
    }
    let marshaller = Marshaller::new(Arc::new(registry), marshaller_config);

    match &config.command {
        Command::Operations => print_operations(marshaller.registry()),
        Command::Describe { shape } => describe_shape(marshaller.registry(), shape)?,
        Command::Validate { shape, payload } => {
            let payload = read_payload(payload).await?;
            marshaller.validate(shape, &payload)?;
            tracing::info!("✅ Payload conforms to {}", shape);
            println!("✅ Payload conforms to {}", shape);
        }
        Command::Normalize { shape, payload } => {
            let payload = read_payload(payload).await?;
            let normalized = marshaller.normalize(shape, &payload)?;
            println!("{}", serde_json::to_string_pretty(&normalized)?);
        }
    }

    Ok(())
}

async fn read_payload(path: &Path) -> Result<Value, ModelError> {
    let content = tokio::fs::read_to_string(path).await?;
    let payload: Value = serde_json::from_str(&content)?;
    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(payload)
}

fn print_operations(registry: &ModelRegistry) {
    println!("{} operations:", registry.service_name());
    for operation in registry.operations() {
        println!(
            "  {}: {} -> {}",
            operation.name(),
            operation.input(),
            operation.output()
        );
        if !operation.errors().is_empty() {
            println!("      errors: {}", operation.errors().join(", "));
        }
    }
}

fn describe_shape(registry: &ModelRegistry, name: &str) -> Result<(), ModelError> {
    let shape = registry.shape(name)?;
    println!("{}", shape.name());
    for field in shape.fields() {
        let constraints = field.constraints();
        println!(
            "  {:<40} {:<36} {}{}",
            field.wire_name(),
            field.field_type().to_string(),
            field.local_name(),
            if constraints.is_empty() {
                String::new()
            } else {
                format!("  [{}]", constraints)
            }
        );
    }
    Ok(())
}
