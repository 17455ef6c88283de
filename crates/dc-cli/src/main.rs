use clap::{Parser, Subcommand, ValueEnum};
use dc_spec::{
    QuestionFormHost, QuestionModel, QuestionType, RegionMap, UnknownTypePolicy, ValidationResult,
    prune, render_json, render_table_json, render_table_text, render_text, resolve, validate,
};
use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

const ON_UNKNOWN_ENV: &str = "DC_QUESTION_ON_UNKNOWN";

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Question-type field visibility helper",
    long_about = "Resolves which question editor field groups are shown for a question type and checks question models against those rules"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SchemaTarget {
    Model,
    Flags,
}

#[derive(Subcommand)]
enum Command {
    /// Show the field groups visible for one question type.
    Resolve {
        /// Type code (1-9) or type name.
        #[arg(value_name = "TYPE")]
        kind: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the visibility rules of every question type.
    Table {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Replay a sequence of type selections and print the resulting regions.
    Simulate {
        /// Selected type codes, in order.
        #[arg(value_name = "CODE", required = true, allow_negative_numbers = true)]
        codes: Vec<i64>,
        /// What to do with the regions on an unknown code: keep or hide-all (defaults to DC_QUESTION_ON_UNKNOWN, then keep).
        #[arg(long, value_name = "POLICY")]
        on_unknown: Option<String>,
    },
    /// Validate a question model JSON file.
    Check {
        #[arg(long, value_name = "MODEL")]
        model: PathBuf,
    },
    /// Print a question model with the settings its type hides removed.
    Prune {
        #[arg(long, value_name = "MODEL")]
        model: PathBuf,
    },
    /// Print the JSON Schema of the question model or of the visibility flags.
    Schema {
        #[arg(long, value_enum, default_value_t = SchemaTarget::Model)]
        target: SchemaTarget,
    },
}

#[derive(Serialize)]
struct SimulationReport {
    current: Option<u8>,
    rejected: Vec<i64>,
    regions: RegionMap,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Resolve { kind, format } => run_resolve(&kind, format),
        Command::Table { format } => run_table(format),
        Command::Simulate { codes, on_unknown } => run_simulate(&codes, on_unknown),
        Command::Check { model } => run_check(&model),
        Command::Prune { model } => run_prune(&model),
        Command::Schema { target } => run_schema(target),
    }
}

fn run_resolve(raw: &str, format: OutputFormat) -> CliResult<()> {
    let kind: QuestionType = raw.parse()?;
    let flags = resolve(kind);
    match format {
        OutputFormat::Text => println!("{}", render_text(kind, &flags)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&render_json(kind, &flags))?
        ),
    }
    Ok(())
}

fn run_table(format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Text => println!("{}", render_table_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&render_table_json())?),
    }
    Ok(())
}

fn run_simulate(codes: &[i64], on_unknown: Option<String>) -> CliResult<()> {
    let policy = resolve_policy(on_unknown)?;
    debug!(policy = policy.as_str(), selections = codes.len(), "simulating selections");

    let mut host = QuestionFormHost::new(RegionMap::new(), policy);
    let mut rejected = Vec::new();
    for code in codes {
        if let Err(err) = host.on_type_selected(*code) {
            eprintln!("Ignored selection: {}", err);
            rejected.push(*code);
        }
    }

    let report = SimulationReport {
        current: host.current().map(|(kind, _)| kind.code()),
        rejected,
        regions: host.into_sink(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn resolve_policy(flag: Option<String>) -> CliResult<UnknownTypePolicy> {
    let raw = match flag {
        Some(value) => value,
        None => match env::var(ON_UNKNOWN_ENV) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => return Ok(UnknownTypePolicy::default()),
        },
    };
    Ok(raw.parse::<UnknownTypePolicy>()?)
}

fn load_model(path: &Path) -> CliResult<QuestionModel> {
    let contents = fs::read_to_string(path)?;
    let model = serde_json::from_str(&contents)
        .map_err(|err| format!("failed to parse {}: {}", path.display(), err))?;
    Ok(model)
}

fn run_check(path: &Path) -> CliResult<()> {
    let model = load_model(path)?;
    let result = validate(&model);
    println!(
        "Validation result: {}",
        if result.valid { "valid" } else { "invalid" }
    );
    describe_validation(&result);

    if result.valid {
        Ok(())
    } else {
        Err("validation failed".into())
    }
}

fn describe_validation(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("Errors:");
        for error in &result.errors {
            println!("  {} - {} ({})", error.path, error.message, error.code);
        }
    }
}

fn run_prune(path: &Path) -> CliResult<()> {
    let model = load_model(path)?;
    println!("{}", serde_json::to_string_pretty(&prune(&model))?);
    Ok(())
}

fn run_schema(target: SchemaTarget) -> CliResult<()> {
    let schema = match target {
        SchemaTarget::Model => dc_spec::spec::model::schema(),
        SchemaTarget::Flags => dc_spec::visibility::flags_schema(),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
