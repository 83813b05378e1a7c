//! viewlink server entry point: loads configuration, wires adapters, serves HTTP.

use std::error::Error;
use std::sync::Arc;

use tracing::{info, warn};

use viewlink::adapters::{
    build_router, AppServices, IdentityToolkitConfig, IdentityToolkitSender,
    InMemoryAliasStore, MockVerificationSender, OidcConfig, OidcSessionValidator,
    PostgresAliasStore, RouterOptions,
};
use viewlink::config::{AppConfig, DatabaseConfig};
use viewlink::domain::foundation::AdminPolicy;
use viewlink::ports::{AliasStore, VerificationSender};
use viewlink::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    // No subscriber is installed on failure, so report on stderr.
    if let Err(e) = init_tracing(&config.server.log_level, config.is_production()) {
        eprintln!("viewlink: tracing init failed: {e}");
    }
    config.validate()?;

    let store = alias_store(config.database.as_ref()).await?;

    let validator = OidcSessionValidator::new(
        OidcConfig::new(
            config.auth.issuer.clone(),
            config.auth.audience.clone(),
            config.auth.jwks_url.clone(),
        )
        .with_cache_duration(config.auth.jwks_cache_ttl()),
    )?;

    let sender: Arc<dyn VerificationSender> = match config.auth.identity_toolkit_api_key.clone() {
        Some(api_key) => Arc::new(IdentityToolkitSender::new(IdentityToolkitConfig::new(api_key))?),
        None => {
            warn!("No identity toolkit key configured; verification emails are not delivered");
            Arc::new(MockVerificationSender::new())
        }
    };

    if config.auth.admin_email.is_none() {
        info!("No administrator configured");
    }

    let app = build_router(
        AppServices {
            store,
            validator: Arc::new(validator),
            sender,
            policy: Arc::new(AdminPolicy::new(config.auth.admin_email.clone())),
        },
        RouterOptions {
            request_timeout: config.server.request_timeout(),
            cors_origins: config.server.cors_origins_list(),
        },
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "viewlink listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("viewlink stopped");
    Ok(())
}

async fn alias_store(
    database: Option<&DatabaseConfig>,
) -> Result<Arc<dyn AliasStore>, Box<dyn Error>> {
    let Some(database) = database else {
        warn!("No database configured; aliases are kept in memory only");
        return Ok(Arc::new(InMemoryAliasStore::new()));
    };

    let pool = database.pool_options().connect(&database.url).await?;
    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
    }

    Ok(Arc::new(PostgresAliasStore::new(pool)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
