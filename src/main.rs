use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vocab_tools::utils::LoggingConfig;
use vocab_tools::{merge_directory, translate_batch, AppConfig, HttpTransport, MergeOutcome, Translator};

/// Exit status when the merge input holds no English-keyed vocabulary.
const EXIT_NO_INPUT: u8 = 2;

#[derive(Parser)]
#[command(name = "vocab-tools", version, about = "Build a multilingual vocabulary dataset")]
struct Cli {
    /// TOML configuration file (defaults to ./vocab-tools.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge vocabulary CSV files into a single English-keyed CSV
    Merge {
        /// Directory containing vocabulary CSV files
        input_dir: PathBuf,
        /// Output merged CSV path
        output_csv: PathBuf,
    },
    /// Translate Dutch-English pairs into the derived language-pair files using DeepL
    Translate {
        /// CSV file with Dutch-English pairs
        input_csv: PathBuf,
        /// Directory for translated CSV files
        output_dir: PathBuf,
        /// DeepL API key (Free or Pro)
        #[arg(long)]
        deepl_key: String,
        /// DeepL API endpoint
        #[arg(long)]
        endpoint: Option<String>,
    },
}

fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(format!("vocab_tools={}", config.level).parse()?);
    let json = config.format.eq_ignore_ascii_case("json");

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(&config.logging)?;

    match cli.command {
        Command::Merge { input_dir, output_csv } => match merge_directory(&input_dir, &output_csv)? {
            MergeOutcome::Written(_) => Ok(ExitCode::SUCCESS),
            MergeOutcome::NoPivotInput => Ok(ExitCode::from(EXIT_NO_INPUT)),
        },
        Command::Translate {
            input_csv,
            output_dir,
            deepl_key,
            endpoint,
        } => {
            let mut settings = config.translation;
            if let Some(endpoint) = endpoint {
                settings.endpoint = endpoint;
            }
            tracing::info!(endpoint = %settings.endpoint, input = %input_csv.display(), "Starting translation");

            let transport = HttpTransport::new(&settings.endpoint, deepl_key, settings.timeout())?;
            let mut translator = Translator::from_config(transport, &settings);
            translate_batch(&input_csv, &output_dir, &mut translator, settings.progress_every).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
