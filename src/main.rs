use clap::Parser;

use vidshare::server::MediaServer;
use vidshare::{cli, config, net};

/// Resolve on the first Ctrl+C.
async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = cli::Args::parse();

    let file_config = config::find_config_file(args.config.as_deref()).and_then(|path| {
        match config::load_config(&path) {
            Ok(cfg) => {
                tracing::debug!("Loaded config from {}", path.display());
                Some(cfg)
            }
            Err(e) => {
                tracing::warn!("Failed to load config file {}: {}", path.display(), e);
                None
            }
        }
    });

    let resolved = match config::Config::resolve(file_config, &args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    if !resolved.dir.is_dir() {
        tracing::warn!(
            "Video directory {} is not a readable directory yet; the catalog will be empty",
            resolved.dir.display()
        );
    }
    if !resolved.assets.join("index.html").is_file() {
        tracing::warn!("No index.html in {}; / will answer 404", resolved.assets.display());
    }

    let server_config = resolved.into_server_config(net::lan_ipv4);
    tracing::info!(
        "vidshare {} sharing {} (UI from {})",
        env!("CARGO_PKG_VERSION"),
        server_config.watched_dir.display(),
        server_config.assets_dir.display()
    );

    let server = match MediaServer::new(server_config).bind().await {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = server.serve(wait_for_shutdown()).await {
        tracing::error!("HTTP server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Goodbye.");
}
