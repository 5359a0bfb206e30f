use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use upload_relay::{
    api::create_router,
    application::builder::ApplicationBuilder,
    config::{LogFormat, StorageBackend},
    Config,
};

#[derive(Parser)]
#[command(name = "upload-relay")]
#[command(about = "Deduplicating image and video upload relay for cloud object storage")]
struct Args {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Interface to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Storage backend (overrides STORAGE_BACKEND)
    #[arg(long, value_enum)]
    backend: Option<StorageBackend>,

    /// Load environment variables from this file instead of ./.env
    #[arg(long)]
    env_file: Option<std::path::PathBuf>,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match &args.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load env file {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    // Load configuration
    let mut config = Config::from_env();
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(backend) = args.backend {
        config.storage_backend = backend;
    }

    init_tracing(config.log_format);
    info!("Starting upload relay");

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;
    info!(
        backend = ?config.storage_backend,
        bucket = %config.bucket_or_default(),
        "Configuration loaded and validated"
    );

    let listen_addr = config.listen_addr();
    let allowed_origins = config.allowed_origins.clone();

    let state = ApplicationBuilder::new(config)
        .with_storage()
        .map_err(|e| anyhow::anyhow!("Failed to initialize storage: {}", e))?
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build application: {}", e))?;

    let app = create_router(state, &allowed_origins);

    info!("Listening on {}", listen_addr);
    let listener = TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", listen_addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
