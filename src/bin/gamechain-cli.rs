use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gamechain_sdk::config::load_config;
use gamechain_sdk::wallet::PRIVATE_KEY_ENV_VAR;
use gamechain_sdk::{GamechainSdk, SdkConfig, TokenRecord};

#[derive(Parser)]
#[command(name = "gamechain-cli")]
#[command(about = "Command-line client for the gamechain ledger", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hex-encoded private key. Falls back to GAMECHAIN_PRIVATE_KEY, then
    /// to a freshly generated wallet.
    #[arg(short, long)]
    key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a payment to an address
    Send {
        to: String,
        amount: f64,
        /// Fee to attach; the default fee applies when omitted
        #[arg(short, long)]
        fee: Option<f64>,
    },
    /// Issue a new token
    IssueToken { name: String, total_supply: u64 },
    /// Transfer units of a previously issued token
    TransferToken {
        /// Path to a JSON file holding the token record (as printed by issue-token)
        token_file: PathBuf,
        to: String,
        amount: u64,
    },
    /// Poll for ledger events and log them as they arrive
    Listen {
        /// Seconds to listen before exiting; runs until Ctrl-C when omitted
        #[arg(short, long)]
        duration: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gamechain_sdk=info,gamechain_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SdkConfig::default(),
    };

    let sdk = match &cli.key {
        Some(key) => GamechainSdk::with_private_key(config, key)?,
        None if std::env::var(PRIVATE_KEY_ENV_VAR).is_ok() => GamechainSdk::from_env(config)?,
        None => GamechainSdk::new(config)?,
    };

    match cli.command {
        Commands::Send { to, amount, fee } => {
            let receipt = match fee {
                Some(fee) => sdk.send_payment_with_fee(&to, amount, fee).await?,
                None => sdk.send_payment(&to, amount).await?,
            };
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
        Commands::IssueToken { name, total_supply } => {
            let token = sdk.issue_token(&name, total_supply)?;
            println!("{}", serde_json::to_string_pretty(&token)?);
        }
        Commands::TransferToken {
            token_file,
            to,
            amount,
        } => {
            let token: TokenRecord = serde_json::from_str(&std::fs::read_to_string(&token_file)?)?;
            let transfer = sdk.transfer_token(&token, &to, amount)?;
            println!("{}", serde_json::to_string_pretty(&transfer)?);
        }
        Commands::Listen { duration } => {
            sdk.start_event_listener();
            match duration {
                Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
                None => {
                    tokio::signal::ctrl_c().await?;
                }
            }
            sdk.stop_event_listener().await;
        }
    }

    Ok(())
}
