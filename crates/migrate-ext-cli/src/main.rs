//! migrate-ext CLI - inspect provider features attached to migration commands.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use migrate_ext::{
    build_plan, Config, FeatureValue, InsertDataExpression, MigrateExtError, Provider,
    SupportAdditionalFeatures,
};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser)]
#[command(name = "migrate-ext")]
#[command(about = "Build insert commands from a plan and show their provider features")]
#[command(version)]
struct Cli {
    /// Path to YAML plan file
    #[arg(short, long, default_value = "plan.yaml")]
    config: PathBuf,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build every insert command and print its additional features
    Plan {
        /// Only show features owned by this provider (defaults to the plan target)
        #[arg(long)]
        provider: Option<String>,
    },

    /// Build every insert command and check it is well formed
    Validate,
}

/// One built command as printed by `plan`.
#[derive(Serialize)]
struct PlanEntry<'a> {
    table: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<&'a str>,
    rows: usize,
    features: BTreeMap<&'static str, &'a FeatureValue>,
}

impl<'a> PlanEntry<'a> {
    fn new(command: &'a InsertDataExpression, provider: Option<Provider>) -> Self {
        let features = command
            .additional_features()
            .iter()
            .filter(|(key, _)| provider.map_or(true, |p| p.owns(**key)))
            .map(|(key, value)| (key.as_str(), value))
            .collect();

        Self {
            table: command.table_name(),
            schema: command.schema_name(),
            rows: command.rows().len(),
            features,
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), MigrateExtError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format).map_err(MigrateExtError::Config)?;

    let config = Config::load(&cli.config)?;
    info!("Loaded plan from {:?}", cli.config);

    let commands = build_plan(&config)?;

    match cli.command {
        Commands::Plan { provider } => {
            let provider = match provider {
                Some(name) => Some(Provider::from_db_type(&name)?),
                None => config.target_provider()?,
            };

            let entries: Vec<PlanEntry<'_>> = commands
                .iter()
                .map(|command| PlanEntry::new(command, provider))
                .collect();

            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print_plan(&entries, provider);
            }
        }

        Commands::Validate => {
            if cli.output_json {
                let result = serde_json::json!({
                    "valid": true,
                    "commands": commands.len(),
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Validation completed successfully");
                println!("  Commands: {}", commands.len());
            }
        }
    }

    Ok(())
}

fn print_plan(entries: &[PlanEntry<'_>], provider: Option<Provider>) {
    if let Some(p) = provider {
        println!("Provider: {}", p.name());
    }

    for entry in entries {
        match entry.schema {
            Some(schema) => println!("\nInsert into {}.{}", schema, entry.table),
            None => println!("\nInsert into {}", entry.table),
        }
        println!("  Rows: {}", entry.rows);

        if entry.features.is_empty() {
            println!("  Features: none");
        } else {
            println!("  Features:");
            for (key, value) in &entry.features {
                println!("    {} = {}", key, value);
            }
        }
    }
}

fn setup_logging(verbosity: &str, format: &str) -> Result<(), String> {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        other => return Err(format!("unknown verbosity '{}'", other)),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        "json" => subscriber.json().init(),
        "text" => subscriber.init(),
        other => return Err(format!("unknown log format '{}'", other)),
    }

    Ok(())
}
