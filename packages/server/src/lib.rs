#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web dashboard server for the animal shelter intake data.
//!
//! Loads the intake CSV once at startup and keeps it in shared, read-only
//! state. The frontend asks `/api/bounds` for the date picker limits and
//! view options, then calls `/api/chart` every time the range or view
//! changes. Each call re-runs the filter and aggregation from scratch and
//! returns a chart spec for the browser to draw.

mod handlers;
pub mod interactive;

use std::path::PathBuf;
use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use shelter_dash_source::{IntakeTable, load_csv, paths};

/// Default bind address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// Default port.
pub const DEFAULT_PORT: u16 = 8080;

/// Directory holding the built frontend.
pub const STATIC_DIR: &str = "app/dist";

/// Shared application state.
pub struct AppState {
    /// The full intake table. Never mutated after load.
    pub table: Arc<IntakeTable>,
}

/// Server startup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind.
    pub bind_addr: String,
    /// Port to bind.
    pub port: u16,
    /// Intake CSV to load.
    pub data_path: PathBuf,
}

impl ServerConfig {
    /// Reads `BIND_ADDR`, `PORT` and `INTAKES_CSV`, falling back to the
    /// defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            bind_addr,
            port,
            data_path: paths::intakes_csv_path(),
        }
    }
}

/// Registers the `/api` routes.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/bounds", web::get().to(handlers::bounds))
            .route("/chart", web::get().to(handlers::chart)),
    );
}

/// Starts the dashboard server.
///
/// Loads the intake table from `config.data_path` and serves the API plus
/// the static frontend. The caller provides the async runtime (e.g. via
/// `#[actix_web::main]`) and initializes logging.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the intake table cannot be loaded,
/// or if the HTTP server fails to bind or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let table = load_csv(&config.data_path).map_err(|e| {
        log::error!(
            "Failed to load intake data from {}: {e}",
            config.data_path.display()
        );
        std::io::Error::other(e)
    })?;

    let state = web::Data::new(AppState {
        table: Arc::new(table),
    });

    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure_api)
            // Serve frontend static files
            .service(Files::new("/", STATIC_DIR).index_file("index.html"))
    })
    .bind((config.bind_addr, config.port))?
    .run()
    .await
}
