//! HTTP boundary for the standing data service.
//!
//! Route registration plus the mapping from store errors to HTTP responses.
//! The store distinguishes exactly one failure (unusable data root); it maps
//! to a 500 with a JSON `detail` body.

pub mod handlers;
pub mod models;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};

use crate::error::StandingDataError;

/// Register all HTTP routes for the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health))
        .route("/aircraft", web::get().to(handlers::aircraft))
        .route("/airlines", web::get().to(handlers::airlines))
        .route("/airports", web::get().to(handlers::airports))
        .route("/routes", web::get().to(handlers::routes))
        .route("/countries", web::get().to(handlers::countries))
        .route("/model-types", web::get().to(handlers::model_types))
        .route("/code-blocks", web::get().to(handlers::code_blocks))
        .route(
            "/registration-prefixes",
            web::get().to(handlers::registration_prefixes),
        );
}

impl ResponseError for StandingDataError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "detail": self.to_string()
        }))
    }
}
