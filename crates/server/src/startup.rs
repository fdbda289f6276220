use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, ServerConfig, StoreBackend};
use dotenvy::dotenv;
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::customer::repo::seaorm::SeaOrmCustomerRepository;
use service::customer::repository::{memory::InMemoryCustomerRepository, CustomerRepository};

/// Initialize logging via shared common utils (`LOG_FORMAT=json` switches to JSON)
fn init_logging() {
    init_logging_from_env();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

/// Router over the given customer store, with the default CORS and trace layers.
pub fn app<R: CustomerRepository + 'static>(repo: R) -> Router {
    routes::build_router(ServerState::new(repo), build_cors())
}

/// Serve `app` on `listener` until Ctrl+C.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("received Ctrl+C, shutting down");
            }
        })
        .await?;
    Ok(())
}

async fn serve_store<R: CustomerRepository + 'static>(repo: R, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "starting customer api");
    serve(listener, app(repo)).await
}

/// Public entry: load config, wire the configured store and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let addr = bind_addr(&cfg.server)?;

    match cfg.store.backend {
        StoreBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            if cfg.database.auto_migrate {
                migration::Migrator::up(&db, None).await?;
                info!("database migrations applied");
            }
            serve_store(SeaOrmCustomerRepository::new(db), addr).await
        }
        StoreBackend::Memory => {
            warn!("using in-memory customer store; records are lost on exit");
            serve_store(InMemoryCustomerRepository::default(), addr).await
        }
    }
}
