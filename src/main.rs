mod environment;
mod nasa;
mod numeric;
mod random;
mod web;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use utoipa::OpenApi;

use crate::nasa::ProviderKind;
use crate::web::api_doc::ApiDoc;
use crate::web::Config;

#[derive(Parser)]
#[command(name = "gaianet")]
#[command(about = "Synthetic environmental and satellite data API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// YAML configuration file
        #[arg(short, long)]
        config: Option<String>,
        /// Listen address, overrides `web.bind`
        #[arg(long)]
        bind: Option<String>,
        /// Seed for reproducible metric snapshots
        #[arg(long)]
        seed: Option<u64>,
        /// NASA data provider, overrides `nasa.provider`
        #[arg(long, value_enum)]
        provider: Option<ProviderKind>,
    },
    /// Print the OpenAPI document
    Openapi,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            bind,
            seed,
            provider,
        } => serve(config.as_deref(), bind, seed, provider).await,
        Commands::Openapi => openapi(),
    }
}

async fn serve(
    path: Option<&str>,
    bind: Option<String>,
    seed: Option<u64>,
    provider: Option<ProviderKind>,
) -> ExitCode {
    let mut config = match path {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    if let Some(bind) = bind {
        config.web.bind = bind;
    }
    if seed.is_some() {
        config.random.seed = seed;
    }
    if let Some(provider) = provider {
        config.nasa.provider = provider;
    }

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn openapi() -> ExitCode {
    match ApiDoc::openapi().to_pretty_json() {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to render OpenAPI document: {}", e);
            ExitCode::FAILURE
        }
    }
}
