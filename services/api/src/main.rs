use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use api::{
    config::ServerConfig,
    repositories::{PlaylistRepository, TrackRepository},
    routes,
    state::AppState,
};
use common::database::{DatabaseConfig, DocumentStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting melo API service");

    // Establish the document-store handle. The service still comes up when
    // storage is unconfigured; the seed and diagnostic routes report it.
    let db_config = DatabaseConfig::from_env();
    let store = DocumentStore::connect(&db_config).await?;

    if store.is_connected() {
        match store.ping().await {
            Ok(()) => info!("Database connection successful"),
            Err(e) => warn!("Database configured but not reachable: {}", e),
        }
    }

    // Initialize repositories
    let track_repository = TrackRepository::new(store.clone());
    let playlist_repository = PlaylistRepository::new(store.clone());

    let app_state = AppState {
        store,
        track_repository,
        playlist_repository,
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let server_config = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(server_config.bind_addr()).await?;
    info!("melo API service listening on {}", server_config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
