use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

use crate::models::{CreateListingRequest, NewListing};
use crate::routes::{errors, AppState};

/// Configure listing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/listings", web::get().to(list_listings))
        .route("/listings", web::post().to(create_listing))
        .route("/listings/{id}", web::get().to(get_listing))
        .route("/listings/{id}/reviews", web::get().to(list_reviews));
}

/// GET /api/listings
async fn list_listings(state: web::Data<AppState>) -> impl Responder {
    let listings = state.store.list().await;
    tracing::debug!("Returning {} listings", listings.len());
    HttpResponse::Ok().json(listings)
}

/// GET /api/listings/{id}
async fn get_listing(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.store.get(path.into_inner()).await {
        Ok(listing) => HttpResponse::Ok().json(listing),
        Err(e) => errors::store_error(e),
    }
}

/// Create listing endpoint
///
/// POST /api/listings
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "description": "string",
///   "type": "park|cafe|hotel|...",
///   "location": "string",
///   "allowedPets": ["dogs"],
///   "amenities": ["water-bowls"],
///   "photos": [],
///   "contactInfo": { "phone": "", "email": "", "website": "" }
/// }
/// ```
async fn create_listing(
    state: web::Data<AppState>,
    req: web::Json<CreateListingRequest>,
) -> HttpResponse {
    if !state.features.enable_crud {
        return errors::crud_disabled();
    }

    if let Err(e) = req.validate() {
        tracing::info!("Rejected listing submission: {}", e);
        return errors::validation_failed(
            "Name, description, type and location are required",
            &e,
            state.features.detailed_errors,
        );
    }

    let listing = state.store.create(NewListing::from(req.into_inner())).await;
    tracing::info!("Created listing {} ({})", listing.id, listing.name);

    HttpResponse::Created().json(listing)
}

/// GET /api/listings/{id}/reviews
async fn list_reviews(state: web::Data<AppState>, path: web::Path<Uuid>) -> HttpResponse {
    match state.store.reviews(path.into_inner()).await {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(e) => errors::store_error(e),
    }
}
