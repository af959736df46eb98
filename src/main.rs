//! Service entry point: wires configuration, storage, notification,
//! and the HTTP server together.

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use studio_quote::api::rest::{AppState, create_router};
use studio_quote::application::services::SubmissionService;
use studio_quote::config::AppConfig;
use studio_quote::domain::value_objects::RuleCatalog;
use studio_quote::infrastructure::notifications::{Notifier, SmtpNotifier};
use studio_quote::infrastructure::persistence::PostgresSubmissionRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load().context("loading configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .context("connecting to database")?;
    let repository = Arc::new(PostgresSubmissionRepository::new(pool));

    let notifier: Option<Arc<dyn Notifier>> = match &config.smtp {
        Some(smtp) => {
            let notifier =
                SmtpNotifier::from_config(smtp).context("building smtp notifier")?;
            Some(Arc::new(notifier))
        }
        None => {
            tracing::info!("smtp not configured, operator notifications disabled");
            None
        }
    };

    let catalog = Arc::new(RuleCatalog::standard());
    let service = SubmissionService::new(catalog, repository, notifier);
    let state = Arc::new(AppState {
        submissions: service,
    });

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "quote service listening");

    axum::serve(listener, create_router(state))
        .await
        .context("serving")?;

    Ok(())
}
