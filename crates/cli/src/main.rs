//! # civic-intel: a command line front end for the civic intelligence library
//!
//! Every subcommand prints its result as pretty JSON on stdout. Logs go to
//! `civic-intel-cli.log` in the working directory.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use civic_intel::{
    config::{FallbackLlmConfig, PrimaryConfig, SearchConfig},
    constants::{DEEPSEEK_API_URL, GEMINI_API_BASE, SERPER_API_URL},
    ProvidersConfig,
};
use std::{fs::File, path::PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    backends: BackendArgs,
    #[command(subcommand)]
    command: Commands,
}

/// Credentials and endpoints, read from the environment (or `.env`) by default.
#[derive(Args, Debug)]
struct BackendArgs {
    #[arg(long, env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    gemini_api_key: String,
    #[arg(long, env = "SERP_API_KEY", default_value = "", hide_env_values = true)]
    serp_api_key: String,
    #[arg(long, env = "DEEPSEEK_API_KEY", default_value = "", hide_env_values = true)]
    deepseek_api_key: String,
    #[arg(long, env = "GEMINI_API_BASE", default_value = GEMINI_API_BASE, hide = true)]
    gemini_api_base: String,
    #[arg(long, env = "SERPER_API_URL", default_value = SERPER_API_URL, hide = true)]
    serper_api_url: String,
    #[arg(long, env = "DEEPSEEK_API_URL", default_value = DEEPSEEK_API_URL, hide = true)]
    deepseek_api_url: String,
}

impl BackendArgs {
    fn providers_config(&self) -> ProvidersConfig {
        ProvidersConfig {
            primary: PrimaryConfig {
                api_key: self.gemini_api_key.clone(),
                api_base: self.gemini_api_base.clone(),
                ..Default::default()
            },
            search: SearchConfig {
                api_key: self.serp_api_key.clone(),
                api_url: self.serper_api_url.clone(),
                ..Default::default()
            },
            fallback: FallbackLlmConfig {
                api_key: self.deepseek_api_key.clone(),
                api_url: self.deepseek_api_url.clone(),
                ..Default::default()
            },
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a raw prompt through the grounded query executor
    Query(QueryArgs),
    /// Live election records and seat trends
    Elections,
    /// Today's central government briefing
    National,
    /// Today's governance briefing for one state
    State {
        name: String,
    },
    /// Criminal cases and corruption allegations for a leader
    Legal {
        name: String,
        #[arg(long)]
        constituency: String,
    },
    /// Current civic notifications
    Notifications {
        #[arg(long)]
        state: Option<String>,
        /// A followed leader; repeat for several
        #[arg(long = "leader")]
        leaders: Vec<String>,
    },
    /// Political promises with verification sources
    Promises {
        #[arg(long)]
        query: Option<String>,
    },
    /// Today's significant political events
    Events,
    /// Official map details for a place
    Place {
        query: String,
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,
    },
    /// Ask the civic assistant a question
    Ask {
        message: String,
        #[arg(long, default_value = "Citizen")]
        user: String,
        #[arg(long, default_value = civic_intel::intel::assistant::DEFAULT_LANGUAGE)]
        language: String,
    },
}

#[derive(Args, Debug)]
struct QueryArgs {
    prompt: String,
    /// A JSON file holding the response schema
    #[arg(long)]
    schema_file: Option<PathBuf>,
    /// Ground the answer in live web search (enables the fallback path)
    #[arg(long)]
    grounded: bool,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Setup logging to a file
    let log_file = File::create("civic-intel-cli.log")?;
    let subscriber = fmt::Subscriber::builder()
        .with_writer(log_file)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let executor = civic_intel::providers::factory::build_executor(&cli.backends.providers_config())?;

    let output = commands::run(&executor, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
