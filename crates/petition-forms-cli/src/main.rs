mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "petition-forms")]
#[command(version, about = "Check petition form values against validation rules", long_about = None)]
struct Cli {
    /// Forms config file (falls back to the built-in presets when missing)
    #[arg(short, long, global = true, default_value = "forms.toml")]
    config: PathBuf,

    /// Log config loading and validation decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate field values against a form
    Check {
        /// Form name (e.g. register, supportTier)
        form: String,

        /// Field values as FIELD=VALUE; omitted fields are checked as empty
        #[arg(value_name = "FIELD=VALUE")]
        values: Vec<String>,

        /// Print errors as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate one value against inline rules
    Eval {
        /// Kind of rules
        #[arg(short, long, default_value = "text")]
        kind: RuleKind,

        /// Rules as JSON, e.g. '{"required":true,"maxLength":128}'
        #[arg(short, long, default_value = "{}")]
        rules: String,

        /// Value to evaluate
        value: String,
    },

    /// List configured forms and their rules
    Forms {
        /// Print the full config as TOML
        #[arg(long)]
        toml: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum RuleKind {
    /// Free text: required, minLength, maxLength, email
    Text,
    /// Number typed as text: required, minValue, maxValue, integer
    Number,
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let valid = match cli.command {
        Commands::Check { form, values, json } => {
            commands::check::execute(&cli.config, &form, &values, json)?
        }
        Commands::Eval { kind, rules, value } => commands::eval::execute(kind, &rules, &value)?,
        Commands::Forms { toml } => {
            commands::forms::execute(&cli.config, toml)?;
            true
        }
    };

    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
