use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use carmatch::application::interfaces::DEFAULT_MODEL;
use carmatch::connector::adapter::DEFAULT_BASE_URL;
use carmatch::connector::api::router::DEFAULT_CORS_ORIGINS;
use carmatch::{
    run_server, Commands, CompareRequest, Container, ContainerConfig, PriceEstimateRequest,
    VehicleDescriptor,
};

#[derive(Parser)]
#[command(name = "carmatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(long, global = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, global = true, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Chat model used by the provider
    #[arg(
        long = "llm-model",
        id = "llm_model",
        global = true,
        env = "OPENAI_MODEL",
        default_value = DEFAULT_MODEL
    )]
    llm_model: String,

    /// Seconds to wait for a completion before giving up
    #[arg(long, global = true, default_value = "60")]
    request_timeout: u64,

    /// Answer with canned model replies instead of calling the provider
    #[arg(long, global = true)]
    mock_llm: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Arc::new(Container::new(ContainerConfig {
        api_key: cli.api_key,
        base_url: cli.base_url,
        model: cli.llm_model,
        request_timeout: Duration::from_secs(cli.request_timeout),
        mock_llm: cli.mock_llm,
    })?);

    match cli.command {
        Commands::Serve {
            host,
            port,
            cors_origins,
        } => {
            let addr: SocketAddr = format!("{host}:{port}")
                .parse()
                .with_context(|| format!("invalid listen address {host}:{port}"))?;
            let cors_origins = if cors_origins.is_empty() {
                DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect()
            } else {
                cors_origins
            };
            info!("Starting Car Match API (mock_llm={})", cli.mock_llm);
            run_server(container, addr, &cors_origins).await?;
        }

        Commands::Estimate { vehicle } => {
            let request = PriceEstimateRequest {
                car_details: vehicle.into_descriptor(),
            };
            let result = container.estimate_use_case().execute(request).await?;
            print_json(&result)?;
        }

        Commands::Compare { first, second } => {
            let request = CompareRequest {
                car1: VehicleDescriptor::new(first),
                car2: VehicleDescriptor::new(second),
            };
            let result = container.compare_use_case().execute(request).await?;
            print_json(&result)?;
        }

        Commands::Extract { description } => {
            let details = container.extract_use_case().execute(&description).await?;
            print_json(&details)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
