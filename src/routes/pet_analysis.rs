use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use validator::Validate;

use crate::core::Outcome;
use crate::models::{
    AnalysisHealthResponse, ErrorResponse, PetAnalysisRequest, PetProfile, RecommendationsQuery,
    RecommendationsResponse, VenueDescriptionQuery, VenueDescriptionResponse,
};
use crate::routes::{errors, AppState};
use crate::services::ProviderHealth;

/// Set to "true" when the body is a fallback rather than a provider answer
pub const DEGRADED_HEADER: &str = "X-Analysis-Degraded";

const SERVICE_NAME: &str = "OpenAI Pet Analysis Service";

/// Configure pet analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/pet-analysis")
            .route("/analyze", web::post().to(analyze))
            .route("/recommendations", web::post().to(recommendations))
            .route("/venue-description", web::post().to(venue_description))
            .route("/health", web::get().to(health)),
    );
}

fn respond<T: Serialize>(outcome: Outcome<T>) -> HttpResponse {
    match outcome {
        Outcome::Fresh(value) => HttpResponse::Ok().json(value),
        Outcome::Degraded { value, .. } => HttpResponse::Ok()
            .insert_header((DEGRADED_HEADER, "true"))
            .json(value),
    }
}

/// Reads an optional JSON array of strings from a request body
fn string_list_body(body: &[u8]) -> Result<Vec<String>, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(vec![]);
    }
    serde_json::from_slice(body)
}

fn invalid_list_body(field: &str, err: serde_json::Error, detailed: bool) -> HttpResponse {
    let message = if detailed {
        format!("Body must be a JSON array of {}: {}", field, err)
    } else {
        format!("Body must be a JSON array of {}", field)
    };
    HttpResponse::BadRequest().json(ErrorResponse::new("invalid_json", message, 400))
}

/// Pet compatibility analysis endpoint
///
/// POST /api/pet-analysis/analyze
///
/// Request body:
/// ```json
/// {
///   "petName": "string",
///   "petType": "string",
///   "breed": "string",
///   "age": 3,
///   "size": "Small|Medium|Large",
///   "temperamentDescription": "string",
///   "specialNeeds": ["string"],
///   "activityLevel": "Low|Medium|High"
/// }
/// ```
async fn analyze(state: web::Data<AppState>, req: web::Json<PetAnalysisRequest>) -> HttpResponse {
    if let Err(e) = req.validate() {
        return errors::validation_failed(
            "Pet name and type are required",
            &e,
            state.features.detailed_errors,
        );
    }

    let profile = PetProfile::from(req.into_inner());
    tracing::info!("Analyzing {} ({}) for venue compatibility", profile.pet_name, profile.pet_type);

    respond(state.gateway.analyze(&profile).await)
}

/// Venue recommendations endpoint
///
/// POST /api/pet-analysis/recommendations?petType=Dog&breed=Beagle
///
/// Body: JSON array of owner preferences (may be empty)
async fn recommendations(
    state: web::Data<AppState>,
    query: web::Query<RecommendationsQuery>,
    body: web::Bytes,
) -> HttpResponse {
    if let Err(e) = query.validate() {
        return errors::validation_failed("Pet type is required", &e, state.features.detailed_errors);
    }

    let preferences = match string_list_body(&body) {
        Ok(p) => p,
        Err(e) => return invalid_list_body("preferences", e, state.features.detailed_errors),
    };

    let outcome = state
        .gateway
        .recommend_venues(&query.pet_type, &query.breed, &preferences)
        .await;

    respond(outcome.map(|recommendations| RecommendationsResponse { recommendations }))
}

/// Venue description endpoint
///
/// POST /api/pet-analysis/venue-description?venueName=Paws&venueType=cafe
///
/// Body: JSON array of allowed pets (may be empty)
async fn venue_description(
    state: web::Data<AppState>,
    query: web::Query<VenueDescriptionQuery>,
    body: web::Bytes,
) -> HttpResponse {
    if let Err(e) = query.validate() {
        return errors::validation_failed(
            "Venue name and type are required",
            &e,
            state.features.detailed_errors,
        );
    }

    let allowed_pets = match string_list_body(&body) {
        Ok(p) => p,
        Err(e) => return invalid_list_body("allowed pets", e, state.features.detailed_errors),
    };

    let outcome = state
        .gateway
        .describe_venue(&query.venue_name, &query.venue_type, &allowed_pets)
        .await;

    respond(outcome.map(|description| VenueDescriptionResponse { description }))
}

/// Provider health endpoint
///
/// GET /api/pet-analysis/health
///
/// Runs a full probe analysis against the provider.
async fn health(state: web::Data<AppState>) -> impl Responder {
    match state.gateway.health_check().await {
        ProviderHealth::Healthy { last_analysis } => HttpResponse::Ok().json(AnalysisHealthResponse {
            status: "Healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            timestamp: chrono::Utc::now(),
            last_analysis: Some(last_analysis),
            error: None,
        }),
        ProviderHealth::Unhealthy { reason } => {
            tracing::warn!("Pet analysis provider unhealthy: {}", reason);
            HttpResponse::ServiceUnavailable().json(AnalysisHealthResponse {
                status: "Unhealthy".to_string(),
                service: SERVICE_NAME.to_string(),
                timestamp: chrono::Utc::now(),
                last_analysis: None,
                error: Some(reason),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_list_body() {
        assert!(string_list_body(b"").unwrap().is_empty());
        assert!(string_list_body(b"  \n").unwrap().is_empty());
        assert_eq!(string_list_body(br#"["quiet", "outdoor"]"#).unwrap(), vec!["quiet", "outdoor"]);
        assert!(string_list_body(br#"{"a": 1}"#).is_err());
    }
}
