#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web delivery layer for the incident dashboard.
//!
//! Serves the JSON API consumed by the dashboard page and the static
//! page itself. All business logic lives in the core crates; handlers
//! only translate query parameters in and results out. The record store
//! and category index are loaded once at startup and shared read-only,
//! so no locking is needed.

mod handlers;

use std::path::Path;
use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use incident_dash_categories::CategoryIndex;
use incident_dash_store::RecordStore;

/// Default location of the sample dataset, relative to the working
/// directory.
pub const DEFAULT_DATA_PATH: &str = "data/data_sample.csv";

/// Shared application state. Read-only after startup.
pub struct AppState {
    /// The loaded incident records.
    pub store: Arc<RecordStore>,
    /// Category expansion and color assignment derived from the store.
    pub index: Arc<CategoryIndex>,
}

/// Starts the dashboard server.
///
/// Loads the CSV dataset from `DATA_PATH` (default
/// [`DEFAULT_DATA_PATH`]), builds the category index, and serves the
/// API plus the static dashboard page. Bind address and port come from
/// `BIND_ADDR`/`PORT`. This is a regular async function — the caller
/// provides the runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind
/// or encounters a runtime error.
///
/// # Panics
///
/// Panics if the dataset cannot be loaded.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    let data_path = std::env::var("DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());

    log::info!("Loading dataset from {data_path}...");
    let store = RecordStore::from_csv_path(Path::new(&data_path)).expect("Failed to load dataset");
    let index = CategoryIndex::from_store(&store);

    log::info!(
        "Loaded {} incidents across {} causes",
        store.len(),
        index.causes().len()
    );

    let state = web::Data::new(AppState {
        store: Arc::new(store),
        index: Arc::new(index),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/categories", web::get().to(handlers::categories))
                    .route("/bars", web::get().to(handlers::bars))
                    .route("/points", web::get().to(handlers::points))
                    .route("/range", web::get().to(handlers::range)),
            )
            // Serve the dashboard page
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
