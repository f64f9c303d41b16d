//! OXR CLI
//!
//! Command-line interface for the Open Exchange Rates API.

use std::time::Duration;

use anyhow::Result;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oxr_client::{DEFAULT_BASE_URL, OpenExchangeRates, ReqwestTransport};
use oxr_types::ClientConfig;

#[derive(Parser)]
#[command(name = "oxr")]
#[command(author, version, about = "Open Exchange Rates CLI client", long_about = None)]
struct Cli {
    /// App ID issued by openexchangerates.org
    #[arg(long, env = "OXR_APP_ID", hide_env_values = true)]
    app_id: String,

    /// Root URL of the API
    #[arg(long, env = "OXR_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Currency all rates are expressed against
    #[arg(long, env = "OXR_BASE_CURRENCY", default_value = "USD")]
    base: String,

    /// Include alternative, black market and digital currencies
    #[arg(
        long,
        env = "OXR_SHOW_ALTERNATIVE",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    show_alternative: bool,

    /// Request timeout in seconds
    #[arg(long, env = "OXR_TIMEOUT_SECS", default_value = "30")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all currencies
    Currencies,
    /// Latest rates
    Latest {
        /// Limit results to these currencies (comma-separated)
        #[arg(long, value_delimiter = ',')]
        symbols: Vec<String>,
    },
    /// Rates at the end of a given day
    Historical {
        /// Date (YYYY-MM-DD)
        date: String,
        #[arg(long, value_delimiter = ',')]
        symbols: Vec<String>,
    },
    /// Daily rates between two dates
    TimeSeries {
        /// First day (YYYY-MM-DD)
        start: String,
        /// Last day (YYYY-MM-DD)
        end: String,
        #[arg(long, value_delimiter = ',')]
        symbols: Vec<String>,
    },
    /// Convert an amount between currencies
    Convert {
        amount: f64,
        /// Target currency
        to: String,
        /// Source currency (defaults to --base)
        #[arg(long)]
        from: Option<String>,
    },
    /// Open, high, low, close and average rates for one period
    Ohlc {
        /// Start time (YYYY-MM-DDThh:mm:00Z)
        start_time: String,
        /// One of 1m, 5m, 15m, 30m, 1h, 12h, 1d, 1w, 1mo
        period: String,
        #[arg(long, value_delimiter = ',')]
        symbols: Vec<String>,
    },
    /// Plan and quota usage for the app id
    Usage,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,oxr_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_client(cli: &Cli) -> Result<OpenExchangeRates> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.timeout))
        .build()?;
    let config = ClientConfig::new(&cli.app_id)
        .with_base_currency(&cli.base)
        .with_show_alternative(cli.show_alternative);
    Ok(
        OpenExchangeRates::with_transport(config, ReqwestTransport::with_client(http))
            .with_base_url(&cli.api_url),
    )
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let client = build_client(&cli)?;

    tracing::debug!(api_url = %cli.api_url, base = %cli.base, "client configured");

    match cli.command {
        Commands::Currencies => print_json(&client.currencies().await?)?,
        Commands::Latest { symbols } => print_json(&client.latest_rates(symbols).await?)?,
        Commands::Historical { date, symbols } => {
            print_json(&client.historical_rates(date, symbols).await?)?
        }
        Commands::TimeSeries {
            start,
            end,
            symbols,
        } => print_json(&client.time_series(start, end, symbols).await?)?,
        Commands::Convert { amount, to, from } => {
            print_json(&client.convert(amount, &to, from.as_deref()).await?)?
        }
        Commands::Ohlc {
            start_time,
            period,
            symbols,
        } => print_json(&client.ohlc_rates(start_time, &period, symbols).await?)?,
        Commands::Usage => print_json(&client.usage().await?)?,
    }

    Ok(())
}
