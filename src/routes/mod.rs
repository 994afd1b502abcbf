// Route exports
pub mod errors;
pub mod health;
pub mod listings;
pub mod pet_analysis;
pub mod reviews;

use actix_web::web;
use std::sync::Arc;

use crate::config::{FeatureSettings, ServerSettings};
use crate::services::{ListingStore, PetAnalysisGateway};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ListingStore>,
    pub gateway: Arc<PetAnalysisGateway>,
    pub features: FeatureSettings,
    pub server: ServerSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check)).service(
        web::scope("/api")
            .configure(listings::configure)
            .configure(reviews::configure)
            .configure(pet_analysis::configure)
            .route("/debug/info", web::get().to(health::debug_info)),
    );
}
