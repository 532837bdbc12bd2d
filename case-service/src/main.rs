//! Case Service Main Entry Point

use anyhow::Context;
use tracing::info;

use case_core::intake::FileIntake;
use case_core::store::CaseStore;
use case_service::{app::app, config::AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::default();

    let store = if config.storage.seed_demo_data {
        CaseStore::with_sample_data()
    } else {
        CaseStore::new()
    };
    let intake =
        FileIntake::new(&config.storage.upload_dir, config.storage.max_upload_bytes);
    intake
        .ensure_storage_dir()
        .await
        .with_context(|| format!("creating upload directory {:?}", config.storage.upload_dir))?;

    let app = app(AppState::new(store, intake));

    let addr = config.server.addr();
    info!("🚀 Forensic case service listening on {}", addr);
    info!("📋 Available endpoints:");
    info!("   • Health:        GET  /health");
    info!("   • Status:        GET  /api/v1/status");
    info!("   • Cases:         GET  /api/v1/cases");
    info!("   • Submissions:   POST /api/v1/submissions");
    info!("   • Evidence:      GET  /api/v1/evidence");
    info!("   • Analysis:      POST /api/v1/analysis");
    info!("   • Collaboration: POST /api/v1/collaboration");
    info!("   • Stored files:  GET  /uploads/{{filename}}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
