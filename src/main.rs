use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use fleet_pulse_api::config::{DatasetSource, EnvironmentConfig};
use fleet_pulse_api::repositories::MockFleetStore;
use fleet_pulse_api::routes::ROUTE_TABLE;
use fleet_pulse_api::utils::time::to_iso;
use fleet_pulse_api::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚚 FleetPulse - API de demo");
    info!("================================================");
    info!("🌍 Entorno: {}", config.environment);

    // Cargar dataset de la flota
    let dataset = match DatasetSource::from_config(&config).load() {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("❌ Error cargando el dataset: {}", e);
            return Err(anyhow::anyhow!("Error de dataset: {}", e));
        }
    };
    info!(
        "✅ Dataset cargado: {} vehículos, {} conductores, {} rutas",
        dataset.vehicles.len(),
        dataset.drivers.len(),
        dataset.routes.len()
    );

    let store = MockFleetStore::new(dataset);
    info!("🕒 Lecturas base fechadas en {}", to_iso(&store.loaded_at()));

    let app_state = AppState::new(config.clone(), store);
    let app = create_app(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    for route in ROUTE_TABLE {
        info!(
            "   {:<4} {}{}",
            route.method.as_str(),
            config.api_prefix,
            route.path
        );
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
