//! # FitCalc CLI Application
//!
//! Command-line front end for the `calc_core` calculators.
//!
//! ```text
//! calc_cli bmi --weight 80 --height 180
//! calc_cli --units imperial macros --method tdee --weight 176 --height 5 --inches 11 \
//!     --age 30 --gender male --activity moderate --goal maintain
//! echo '{"type":"heart-rate","age":30}' | calc_cli --format json run
//! ```
//!
//! Results go to stdout; logs and errors go to stderr. Validation failures
//! exit with status 1.

mod args;
mod render;

use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use calc_core::catalog::{self, ToolCategory};
use calc_core::{CalcError, CalculationItem};

use args::{Cli, Command, OutputFormat};

const DEFAULT_LOG_FILTER: &str = "calc_core=info,calc_cli=info";

fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(format!("calc_core={level},calc_cli={level}"))
            .with_context(|| format!("invalid log level '{}'", level))?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn read_item(file: Option<&std::path::Path>) -> Result<CalculationItem> {
    let json = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    Ok(CalculationItem::from_json(&json)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn list_tools(cli: &Cli, category: Option<&str>, search: Option<&str>) -> Result<()> {
    let category = category
        .map(ToolCategory::parse_filter)
        .transpose()?
        .flatten();

    let cards: Vec<_> = match search {
        Some(query) => catalog::search(query)
            .into_iter()
            .filter(|t| category.map_or(true, |c| t.category == c))
            .collect(),
        None => catalog::filter_by_category(category),
    };

    tracing::debug!(count = cards.len(), ?category, ?search, "Tools listed");

    match cli.format {
        OutputFormat::Json => print_json(&cards),
        OutputFormat::Text => {
            print!("{}", render::tools(&cards));
            Ok(())
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let item = match &cli.command {
        Command::Tools { category, search } => {
            return list_tools(cli, category.as_deref(), search.as_deref());
        }
        Command::Run { file } => read_item(file.as_deref())?,
        command => match command.to_item(&cli.settings())? {
            Some(item) => item,
            None => return Ok(()),
        },
    };

    let output = item.run()?;

    match cli.format {
        OutputFormat::Json => print_json(&output),
        OutputFormat::Text => {
            print!("{}", render::output(item.label(), &output));
            Ok(())
        }
    }
}

fn report(err: &anyhow::Error, format: OutputFormat) {
    match (format, err.downcast_ref::<CalcError>()) {
        (OutputFormat::Json, Some(calc_err)) => {
            let body = serde_json::json!({
                "code": calc_err.error_code(),
                "message": calc_err.to_string(),
                "error": calc_err,
            });
            eprintln!("{}", body);
        }
        _ => eprintln!("Error: {:#}", err),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_level.as_deref()) {
        eprintln!("Error: {:#}", err);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(calc_err) = err.downcast_ref::<CalcError>() {
                tracing::debug!(code = calc_err.error_code(), "Calculation rejected");
            }
            report(&err, cli.format);
            ExitCode::FAILURE
        }
    }
}
