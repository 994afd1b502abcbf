use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::models::{CreateReviewRequest, NewReview};
use crate::routes::{errors, AppState};

/// Configure review routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/reviews/by-listing/{id}", web::post().to(create_review));
}

/// Create review endpoint
///
/// POST /api/reviews/by-listing/{id}
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "userName": "string",
///   "rating": 1-5,
///   "comment": "string"
/// }
/// ```
async fn create_review(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<CreateReviewRequest>,
) -> HttpResponse {
    if !state.features.enable_crud {
        return errors::crud_disabled();
    }

    if let Err(e) = req.validate() {
        return errors::validation_failed(
            "User name and a rating between 1 and 5 are required",
            &e,
            state.features.detailed_errors,
        );
    }

    let listing_id = path.into_inner();
    match state.store.add_review(listing_id, NewReview::from(req.into_inner())).await {
        Ok(review) => {
            tracing::info!("Added review {} to listing {}", review.id, listing_id);
            HttpResponse::Created().json(review)
        }
        Err(e) => errors::store_error(e),
    }
}
