mod config;
mod controllers;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{extract::State, response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;

use config::environment::EnvironmentConfig;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Vehicle Rental System - Fleet API");
    info!("====================================");

    let config = EnvironmentConfig::default();

    // En desarrollo se permite cualquier origen; en producción solo los configurados
    let cors = if config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let app_state = AppState::new(config);
    let addr: SocketAddr = app_state.config.server_url().parse()?;

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   POST /api/vehicle - Agregar vehículo a la flota");
    info!("   GET  /api/vehicle - Listar vehículos");
    info!("   POST /api/vehicle/rent - Alquilar vehículo");
    info!("   POST /api/vehicle/return - Devolver vehículo");
    info!("   GET  /api/vehicle/report - Reporte de flota");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check del servicio
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "service": "rental-fleet",
        "status": "healthy",
        "fleet_size": state.fleet_size().await,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
