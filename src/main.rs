use clap::Parser;

use dramalist::catalog::Catalog;
use dramalist::folders::FolderManager;
use dramalist::store::RecordStore;
use dramalist::{cli, config, http};

/// Resolve on the first Ctrl+C (graceful shutdown). A second Ctrl+C while
/// requests drain force-exits.
async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down, finishing in-flight requests...");

    // Keep listening so a second Ctrl+C can cut the drain short.
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\ndramalist: forced exit");
            std::process::exit(1);
        }
    });
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        )
        .init();

    let args = cli::Args::parse();

    let file_config = config::find_config_file(args.config.as_deref())
        .and_then(|path| {
            match config::load_config(&path) {
                Ok(cfg) => {
                    tracing::debug!("Loaded config from {}", path.display());
                    Some(cfg)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {}", e);
                    None
                }
            }
        });

    let config = config::Config::resolve(file_config, &args);

    let folders = FolderManager::new(&config.dramas_dir);
    if let Err(e) = folders.ensure_root() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    let store = RecordStore::new(&config.store);

    tracing::info!(
        "dramalist: store {}, folders under {}",
        store.path().display(),
        folders.root().display()
    );

    let state = http::state::AppState::new(Catalog::new(store, folders));
    let app = http::build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("error: failed to bind {}: {}", addr, e);
            std::process::exit(1);
        });
    tracing::info!("Listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
    {
        tracing::error!("HTTP server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Goodbye.");
}
