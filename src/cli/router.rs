//! Command routing and execution
//!
//! Routes parsed commands to the core library and renders the result. Nothing
//! here writes to stdout; `main` prints whatever string comes back.

use crate::cli::args::Commands;
use crate::config::{Config, OutputFormat};
use crate::core::{Input, Operation, Output};
use anyhow::{Context, Result};
use tracing::{debug, trace};

/// Execute a CLI command and return the text to print
pub fn execute_command(command: Commands, config: &Config) -> Result<String> {
    match command {
        Commands::Run {
            operation,
            values,
            json,
        } => {
            let output = run_operation(operation, &values, json.as_deref())?;
            render_output(&output, config)
        }
        Commands::List => Ok(list_operations()),
    }
}

fn run_operation(operation: Operation, values: &[String], json: Option<&str>) -> Result<Output> {
    let kind = operation.input_kind();
    let input = match json {
        Some(json) => Input::from_json(kind, json)
            .with_context(|| format!("Failed to read {} input for {}", kind, operation))?,
        None => Input::from_args(kind, values)
            .with_context(|| format!("Failed to read {} input for {}", kind, operation))?,
    };
    trace!("Input: {:?}", input);

    let output = operation.apply(&input)?;
    debug!("{} produced {:?}", operation, output);
    Ok(output)
}

/// Render an operation result in the configured format
pub fn render_output(output: &Output, config: &Config) -> Result<String> {
    match config.output {
        OutputFormat::Plain => Ok(output.to_string()),
        OutputFormat::Json if config.pretty => {
            serde_json::to_string_pretty(output).context("Failed to serialize output")
        }
        OutputFormat::Json => serde_json::to_string(output).context("Failed to serialize output"),
    }
}

fn list_operations() -> String {
    let width = Operation::ALL
        .iter()
        .map(|op| op.name().len())
        .max()
        .unwrap_or(0);

    Operation::ALL
        .iter()
        .map(|op| {
            format!(
                "{:<width$}  {:<7}  {}",
                op.name(),
                op.input_kind(),
                op.description(),
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
