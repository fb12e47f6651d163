use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use pearl_trails::config::{Settings, StorageBackend};
use pearl_trails::core::CurrencyConverter;
use pearl_trails::models::RelevanceWeights;
use pearl_trails::routes::{self, AppState};
use pearl_trails::services::{Catalog, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

fn init_logging(level: &str, format: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.pretty().init();
    }
}

fn io_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    error!("{}: {}", context, err);
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting Pearl Trails service...");

    // Catalog
    let catalog = match &settings.catalog.path {
        Some(path) => Catalog::load_from(path).map_err(|e| io_error("Failed to load catalog", e))?,
        None => Catalog::builtin(),
    };

    info!(
        "Catalog loaded ({} destinations, {} featured, {} popular)",
        catalog.len(),
        catalog.featured().len(),
        catalog.popular().len()
    );

    // Preference store
    let store: Arc<dyn PreferenceStore> = match settings.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory preference store, nothing will be persisted");
            Arc::new(MemoryPreferenceStore::new())
        }
        StorageBackend::File => {
            let store = FilePreferenceStore::open(&settings.storage.path)
                .await
                .map_err(|e| io_error("Failed to open preference store", e))?;
            info!("Preference store opened at {}", settings.storage.path);
            Arc::new(store)
        }
    };

    let weights = RelevanceWeights::from(&settings.scoring.weights);

    let currency = match settings.currency.rates.clone() {
        Some(rates) => CurrencyConverter::new(rates),
        None => CurrencyConverter::default(),
    };

    info!("Search engine initialized with weights: {:?}", weights);

    // Build application state
    let app_state = AppState::new(catalog, weights, store, currency)
        .await
        .map_err(|e| io_error("Failed to load favorites", e))?;

    info!("Favorites hydrated ({} titles)", app_state.favorites.count());

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
