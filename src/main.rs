use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use octopets::config::{LoggingSettings, ProviderKind, Settings};
use octopets::routes::{self, errors, AppState};
use octopets::services::{
    seed_store, CompletionClient, DemoCompletionClient, ListingStore, OpenAiClient, PetAnalysisGateway,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // An optional first argument names a config file to use instead of config/
    let loaded = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            init_tracing(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_tracing(&settings.logging);
    info!("Starting Octopets API ({} environment)...", settings.server.environment);

    // Completion provider for the pet analysis gateway
    let client: Arc<dyn CompletionClient> = match settings.openai.provider {
        ProviderKind::Demo => {
            info!("Pet analysis running against the demo provider");
            Arc::new(DemoCompletionClient)
        }
        ProviderKind::OpenAi => {
            if settings.openai.api_key.trim().is_empty() {
                warn!("OpenAI API key not configured, pet analysis will return fallback results");
            }
            let client = OpenAiClient::new(
                settings.openai.base_url.clone(),
                settings.openai.api_key.clone(),
                settings.openai.model.clone(),
                Duration::from_secs(settings.openai.timeout_secs),
            )
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
            info!("OpenAI client initialized");
            Arc::new(client)
        }
    };

    let gateway = Arc::new(PetAnalysisGateway::new(client));
    info!("Pet analysis gateway ready (model: {})", gateway.model_name());

    let store = Arc::new(ListingStore::new());
    if settings.features.seed_data {
        let seeded = seed_store(&store).await;
        info!("Seeded {} sample listings", seeded);
    }

    info!(
        "Features: crud={}, detailed_errors={}",
        settings.features.enable_crud, settings.features.detailed_errors
    );

    let app_state = AppState {
        store,
        gateway,
        features: settings.features,
        server: settings.server.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let detailed_errors = settings.features.detailed_errors;

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(errors::json_config(detailed_errors))
            .app_data(errors::query_config(detailed_errors))
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
