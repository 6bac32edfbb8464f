use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "ssm-model")]
#[command(about = "Inspect the SSM model and check wire payloads against it")]
pub struct CliConfig {
    /// Extra service-model file merged into the built-in SSM model
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List operations with their input, output and error codes
    Operations,
    /// Print a shape's fields, wire names, types and constraints
    Describe { shape: String },
    /// Check a JSON payload against a shape
    Validate { shape: String, payload: PathBuf },
    /// Print a JSON payload in canonical form
    Normalize { shape: String, payload: PathBuf },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(model) = &self.model {
            validation::validate_path("--model", &model.to_string_lossy())?;
        }
        match &self.command {
            Command::Operations => Ok(()),
            Command::Describe { shape } => validation::validate_non_empty_string("shape", shape),
            Command::Validate { shape, payload } | Command::Normalize { shape, payload } => {
                validation::validate_non_empty_string("shape", shape)?;
                validation::validate_path("payload", &payload.to_string_lossy())
            }
        }
    }
}
