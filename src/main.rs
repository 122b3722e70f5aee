use std::net::SocketAddr;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use automotriz_jj::config::environment::EnvironmentConfig;
use automotriz_jj::database::DatabaseConnection;
use automotriz_jj::services::PasswordHasher;
use automotriz_jj::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = EnvironmentConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Configuración inválida: {}", e))?;

    info!("🚗 {} v{}", config.app_name, config.app_version);
    info!("================================================");
    info!("🌍 Entorno: {}", config.environment);

    // Inicializar base de datos
    let hasher = PasswordHasher::new(config.bcrypt_cost);
    let db_connection = match DatabaseConnection::connect(&config, &hasher).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let app_state = AppState::new(db_connection.pool().clone(), config.clone())
        .map_err(|e| anyhow::anyhow!("Error inicializando el estado: {}", e))?;
    let app = create_router(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en {}", config.server_url());
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Información del servicio");
    info!("   GET  /health - Health check");
    info!("🔐 Autenticación:");
    info!("   POST /auth/login - Login (form: username, password)");
    info!("   GET  /auth/me - Vendedor actual");
    info!("   POST /auth/logout - Logout");
    info!("🚙 Ventas:");
    info!("   GET  /ventas/autos?search= - Vehículos disponibles");
    info!("   GET  /ventas/tipos-compra - Tipos de compra");
    info!("   POST /ventas - Registrar venta");
    info!("   GET  /ventas/mis-ventas?limit= - Historial del vendedor");
    info!("🛠️ Administración:");
    info!("   PUT  /admin/vendedores/:username/activo - Activar/desactivar vendedor");

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
