use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use crate::models::ErrorResponse;
use crate::services::StoreError;

/// JSON error response for payload and query extraction errors
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
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(
            self.error.clone(),
            self.message.clone(),
            self.status_code,
        ))
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &HttpRequest,
    detailed: bool,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let message = if detailed {
        format!("Invalid JSON: {}", err)
    } else {
        "Request body could not be parsed".to_string()
    };

    JsonError {
        error: "invalid_json".to_string(),
        message,
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    req: &HttpRequest,
    detailed: bool,
) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    let message = if detailed {
        format!("Invalid query: {}", err)
    } else {
        "Query string could not be parsed".to_string()
    };

    JsonError {
        error: "invalid_query".to_string(),
        message,
        status_code: 400,
    }
    .into()
}

pub fn json_config(detailed: bool) -> web::JsonConfig {
    web::JsonConfig::default().error_handler(move |err, req| handle_json_payload_error(err, req, detailed))
}

pub fn query_config(detailed: bool) -> web::QueryConfig {
    web::QueryConfig::default().error_handler(move |err, req| handle_query_payload_error(err, req, detailed))
}

/// 400 for a request that parsed but failed field validation
pub fn validation_failed(summary: &str, errors: &ValidationErrors, detailed: bool) -> HttpResponse {
    let message = if detailed {
        format!("{}: {}", summary, errors)
    } else {
        summary.to_string()
    };
    HttpResponse::BadRequest().json(ErrorResponse::new("Validation failed", message, 400))
}

pub fn store_error(err: StoreError) -> HttpResponse {
    match err {
        StoreError::ListingNotFound(_) => {
            HttpResponse::NotFound().json(ErrorResponse::new("Not found", err.to_string(), 404))
        }
    }
}

pub fn crud_disabled() -> HttpResponse {
    HttpResponse::Forbidden().json(ErrorResponse::new(
        "crud_disabled",
        "Write endpoints are disabled in this environment",
        403,
    ))
}
