use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

use credit_estimator::scoring::{Factor, ScoreInputs};

const EXIT_SUCCESS: i32 = 0;
const EXIT_RUNTIME: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive estimator (default if no subcommand)
    Tui,
    /// Compute a single score and print it
    Score(ScoreArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// On-time payment percentage (50-100)
    #[arg(long)]
    payment_history: Option<u16>,

    /// Share of available credit in use, percent (0-100)
    #[arg(long)]
    credit_utilization: Option<u16>,

    /// Age of the oldest account in years (0-20)
    #[arg(long)]
    account_age: Option<u16>,

    /// Number of distinct credit types (1-5)
    #[arg(long)]
    credit_mix: Option<u16>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl ScoreArgs {
    fn overrides(&self) -> [(Factor, Option<u16>); 4] {
        [
            (Factor::PaymentHistory, self.payment_history),
            (Factor::CreditUtilization, self.credit_utilization),
            (Factor::AccountAge, self.account_age),
            (Factor::CreditMix, self.credit_mix),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "credit-estimator")]
#[command(about = "Interactive credit score estimator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/credit-estimator/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Unparseable factor values are input errors like out-of-domain ones
        Err(e) if matches!(e.kind(), ErrorKind::ValueValidation | ErrorKind::InvalidValue) => {
            let _ = e.print();
            std::process::exit(EXIT_CONFIG);
        }
        Err(e) => e.exit(),
    };
    let command = cli.command.unwrap_or(Commands::Tui);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match credit_estimator::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = credit_estimator::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if let Err(e) = credit_estimator::telemetry::init(&config.log_level, cli.verbose) {
        eprintln!("Logging disabled: {}", e);
    }
    debug!(?config, "configuration loaded");

    let initial = match config.initial_inputs() {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    match command {
        Commands::Tui => {
            let theme = credit_estimator::tui::resolve_theme(config.theme);
            let app = credit_estimator::tui::App::new(
                credit_estimator::Estimator::new(initial),
                theme,
                config.tick_rate_ms,
            );
            if let Err(e) = credit_estimator::tui::run_tui(app).await {
                eprintln!("TUI error: {:#}", e);
                std::process::exit(EXIT_RUNTIME);
            }
        }
        Commands::Score(args) => {
            let inputs = match apply_overrides(initial, &args) {
                Ok(inputs) => inputs,
                Err(e) => {
                    eprintln!("Invalid input: {}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };
            let result = credit_estimator::scoring::calculate_score(&inputs);
            if result.breakdown.clamped {
                debug!(
                    raw_total = result.breakdown.raw_total,
                    score = result.score,
                    "weighted total outside display range, capped"
                );
            }

            match args.format {
                OutputFormat::Text => {
                    let use_colors = credit_estimator::output::should_use_colors();
                    println!(
                        "{}",
                        credit_estimator::output::format_result_text(&inputs, &result, use_colors)
                    );
                }
                OutputFormat::Json => {
                    match credit_estimator::output::format_result_json(&inputs, &result) {
                        Ok(json) => println!("{}", json),
                        Err(e) => {
                            eprintln!("Output error: {:#}", e);
                            std::process::exit(EXIT_RUNTIME);
                        }
                    }
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Apply command-line values on top of the configured starting inputs.
/// Any out-of-domain flag is rejected.
fn apply_overrides(
    initial: ScoreInputs,
    args: &ScoreArgs,
) -> Result<ScoreInputs, credit_estimator::EstimatorError> {
    args.overrides()
        .into_iter()
        .try_fold(initial, |inputs, (factor, value)| match value {
            Some(v) => inputs.with_wide_value(factor, v),
            None => Ok(inputs),
        })
}
