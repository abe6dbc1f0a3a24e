//! Serve command
//!
//! Opens the database, applies migrations, and runs the HTTP API.

use anyhow::Context;
use clap::Args;
use decilog_api::{api_router, AppState};
use decilog_core::logging::{self, Profile};
use std::net::SocketAddr;
use tracing::info;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on (falls back to PORT, then 3000)
    #[arg(long)]
    pub port: Option<u16>,

    /// SQLite database path (falls back to DECILOG_DB, then decilog.db)
    #[arg(long)]
    pub db: Option<String>,
}

pub async fn execute(args: ServeArgs) -> anyhow::Result<()> {
    let profile = match std::env::var("DECILOG_LOG_FORMAT").as_deref() {
        Ok("json") => Profile::Production,
        _ => Profile::Development,
    };
    logging::init(profile);

    let db_path = args
        .db
        .or_else(|| std::env::var("DECILOG_DB").ok())
        .unwrap_or_else(|| "decilog.db".to_string());
    let port = match args.port {
        Some(port) => port,
        None => std::env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(3000),
    };

    let mut conn = decilog_store::db::open(&db_path)
        .with_context(|| format!("opening database {db_path}"))?;
    decilog_store::db::configure(&conn)?;
    decilog_store::migrations::apply_migrations(&mut conn)?;

    let router = api_router(AppState::new(conn));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, db = %db_path, "decilog listening");

    axum::serve(listener, router).await?;
    Ok(())
}
