use kb_server::error::{Result as ServerErrorResult, ServerError};
use kb_server::logger::{self, LogSink};
use kb_server::{AppState, FsBlobStore, build_router};

use kb_auth::{AuthProvider, JwtValidator, Principal};
use kb_core::User;
use kb_db::UserRepository;

use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = kb_config::Config::load()?;
    config.validate()?;

    // Ensure log directory exists when logging to a file
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(
        &config.logging,
        LogSink::new(log_file_path, config.logging.colored),
    )?;

    info!("Starting kb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database (migrations run on open)
    let database_path = config.database_path()?;
    info!("Opening database: {}", database_path.display());
    let pool = kb_db::open_pool(&database_path).await?;
    info!("Database ready");

    // Attachment storage
    let blob_dir = config.blob_dir()?;
    let blobs = FsBlobStore::open(&blob_dir).await?;
    info!("Blob store at {}", blob_dir.display());

    // Authentication (optional based on auth.enabled)
    let auth: Option<Arc<dyn AuthProvider>> = if config.auth.enabled {
        let secret = config
            .auth
            .jwt_secret
            .as_ref()
            .ok_or(ServerError::MissingJwtSecret)?;
        info!(
            "JWT: HS256 authentication enabled (leeway {}s)",
            config.auth.jwt_leeway_secs
        );
        Some(Arc::new(JwtValidator::with_hs256_leeway(
            secret.as_bytes(),
            config.auth.jwt_leeway_secs,
        )))
    } else {
        warn!("Authentication DISABLED - requests act as X-User-Id or the default user");
        None
    };

    // Default identity for unauthenticated mode
    let default_principal = Principal::new(
        config.auth.default_user_uuid()?,
        config.auth.default_username.clone(),
    );
    UserRepository::ensure(
        &pool,
        &User::new(default_principal.user_id, default_principal.username.clone()),
    )
    .await?;

    // Build application state and router
    let app_state = AppState::new(
        pool,
        auth,
        Arc::new(blobs),
        default_principal,
        config.validation.clone(),
    );
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
