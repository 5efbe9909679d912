use std::net::SocketAddr;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use truckfleet_backend::config::EnvironmentConfig;
use truckfleet_backend::create_app;
use truckfleet_backend::database::DatabaseConnection;
use truckfleet_backend::repositories::FleetStore;
use truckfleet_backend::routes::ENDPOINTS;
use truckfleet_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env().context("Configuración inválida")?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚚 Truck Fleet Backend");
    info!("================================================");
    info!("🌍 Entorno: {}", config.environment);

    // Inicializar almacenamiento
    let store = match &config.database {
        Some(database) => {
            let connection = match DatabaseConnection::connect(database).await {
                Ok(connection) => connection,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {:#}", e);
                    return Err(e);
                }
            };
            if database.run_migrations {
                connection.run_migrations().await?;
            }
            FleetStore::postgres(connection.pool().clone())
        }
        None => {
            if config.is_production() {
                error!("❌ DATABASE_URL no definida en producción: los datos no se persistirán");
            } else if config.is_development() {
                info!("🧪 DATABASE_URL no definida: usando almacenamiento en memoria");
            } else {
                warn!("⚠️ DATABASE_URL no definida: usando almacenamiento en memoria");
            }
            FleetStore::in_memory()
        }
    };
    info!("💾 Almacenamiento: {}", store.backend);

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Dirección inválida: {}", config.server_url()))?;

    let app = create_app(AppState::new(store, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    for (methods, path) in ENDPOINTS {
        info!("   {:<15} {}", methods, path);
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("No se pudo abrir {}", addr))?;

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
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el manejador de SIGTERM: {}", e);
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
