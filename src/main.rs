use anyhow::{Context, Result};
use autoapply_config::{
    prepare, ConfigClient, ConfigManager, PreferencesDraft, SubmissionFlow, SubmissionOutcome,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{error, info};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "autoapply")]
#[command(about = "Normalize job-search preferences and send them to the config endpoint")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the default preferences
    Defaults {
        #[arg(long, value_enum, default_value_t = Format::Yaml)]
        format: Format,
    },
    /// Show the payload that would be sent
    Preview {
        /// Preferences file (.yaml, .yml, .toml or .json); defaults when omitted
        #[arg(long)]
        prefs: Option<PathBuf>,
    },
    /// Validate, normalize and POST the preferences
    Submit {
        #[arg(long)]
        prefs: Option<PathBuf>,
        /// Overrides the configured endpoint base URL
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

async fn load_draft(prefs: Option<PathBuf>) -> Result<PreferencesDraft> {
    match prefs {
        Some(path) => PreferencesDraft::load(&path).await,
        None => Ok(PreferencesDraft::new()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Defaults { format } => {
            let defaults = PreferencesDraft::new().snapshot();
            let rendered = match format {
                Format::Yaml => serde_yaml::to_string(&defaults)
                    .context("Failed to render defaults as YAML")?,
                Format::Json => serde_json::to_string_pretty(&defaults)
                    .context("Failed to render defaults as JSON")?,
            };
            println!("{}", rendered);
        }

        Command::Preview { prefs } => {
            let draft = load_draft(prefs).await?;
            let config = prepare(&draft.snapshot())?;
            println!(
                "{}",
                serde_json::to_string_pretty(&config).context("Failed to render payload")?
            );
        }

        Command::Submit { prefs, endpoint } => {
            let draft = load_draft(prefs).await?;

            let mut config = ConfigManager::load()?;
            if let Some(url) = endpoint {
                config.endpoint.base_url = url.trim_end_matches('/').to_string();
            }
            info!("Environment: {}", config.environment);

            let flow = SubmissionFlow::new(ConfigClient::new(&config.endpoint)?);
            match flow.submit(&draft).await {
                SubmissionOutcome::Submitted(receipt) => {
                    println!(
                        "✓ Preferences for {} submitted ({})",
                        receipt.config.username, receipt.id
                    );
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&receipt.response.body)
                            .context("Failed to render response")?
                    );
                }
                SubmissionOutcome::Rejected { error, .. } => {
                    error!("Preferences rejected: {}", error);
                    anyhow::bail!("Preferences rejected: {}", error);
                }
                SubmissionOutcome::Failed { error, .. } => {
                    error!("Submission failed: {}", error);
                    anyhow::bail!(
                        "Submission failed: {}. Your preferences file is unchanged; run submit again to retry.",
                        error
                    );
                }
            }
        }
    }

    Ok(())
}
