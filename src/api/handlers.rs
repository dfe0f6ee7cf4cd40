//! HTTP request handlers, one per dataset plus health and the demo page.
//!
//! Handlers are thin: decode the query string, clamp the limit, call the
//! store, and map rows to their typed response views. "No rows found" is a
//! 200 with an empty list.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use super::models::{
    Aircraft, Airline, Airport, CodeBlock, Country, ModelType, RegistrationPrefix, Route,
};
use crate::constants::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};
use crate::error::StandingDataError;
use crate::store::{AircraftFilter, AirportFilter, RouteFilter, StandingDataStore};

const INDEX_PAGE: &str = include_str!("../../static/index.html");

/// An absent limit means 100; anything above the ceiling is clamped to it.
/// The store itself never clamps.
fn effective_limit(limit: Option<usize>) -> usize {
    limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT)
}

/// GET / - embedded HTML demo page
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_PAGE)
}

/// GET /health - liveness probe
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "message": "Standing Data API is running"
    }))
}

#[derive(Debug, Deserialize)]
pub struct AircraftQuery {
    pub icao: Option<String>,
    pub registration: Option<String>,
    pub operator: Option<String>,
    pub limit: Option<usize>,
}

/// GET /aircraft - search aircraft by ICAO, registration, or operator
pub async fn aircraft(
    store: web::Data<StandingDataStore>,
    query: web::Query<AircraftQuery>,
) -> Result<HttpResponse, StandingDataError> {
    let query = query.into_inner();
    let filter = AircraftFilter {
        icao: query.icao,
        registration: query.registration,
        operator: query.operator,
    };

    let records = store
        .search_aircraft(&filter, effective_limit(query.limit))
        .await?;
    let results: Vec<Aircraft> = records.iter().map(Aircraft::from_record).collect();
    Ok(HttpResponse::Ok().json(results))
}

#[derive(Debug, Deserialize)]
pub struct AirportQuery {
    /// Matches Code, ICAO, or IATA
    pub code: Option<String>,
    pub icao: Option<String>,
    pub iata: Option<String>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub limit: Option<usize>,
}

/// GET /airports - search airports by code, name, or country
pub async fn airports(
    store: web::Data<StandingDataStore>,
    query: web::Query<AirportQuery>,
) -> Result<HttpResponse, StandingDataError> {
    let query = query.into_inner();
    let filter = AirportFilter {
        code: query.code,
        icao: query.icao,
        iata: query.iata,
        name: query.name,
        country: query.country,
    };

    let records = store
        .search_airports(&filter, effective_limit(query.limit))
        .await?;
    let results: Vec<Airport> = records.iter().map(Airport::from_record).collect();
    Ok(HttpResponse::Ok().json(results))
}

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub callsign: Option<String>,
    pub code: Option<String>,
    pub airline_code: Option<String>,
    pub limit: Option<usize>,
}

/// GET /routes - search routes by callsign or airline code
pub async fn routes(
    store: web::Data<StandingDataStore>,
    query: web::Query<RouteQuery>,
) -> Result<HttpResponse, StandingDataError> {
    let query = query.into_inner();
    let filter = RouteFilter {
        callsign: query.callsign,
        code: query.code,
        airline_code: query.airline_code,
    };

    let records = store
        .search_routes(&filter, effective_limit(query.limit))
        .await?;
    let results: Vec<Route> = records.iter().map(Route::from_record).collect();
    Ok(HttpResponse::Ok().json(results))
}

/// GET /airlines - the full airlines dataset
pub async fn airlines(
    store: web::Data<StandingDataStore>,
) -> Result<HttpResponse, StandingDataError> {
    let records = store.airlines().await?;
    let results: Vec<Airline> = records.iter().map(Airline::from_record).collect();
    Ok(HttpResponse::Ok().json(results))
}

/// GET /countries - the full countries dataset
pub async fn countries(
    store: web::Data<StandingDataStore>,
) -> Result<HttpResponse, StandingDataError> {
    let records = store.countries().await?;
    let results: Vec<Country> = records.iter().map(Country::from_record).collect();
    Ok(HttpResponse::Ok().json(results))
}

/// GET /model-types - the full model types dataset
pub async fn model_types(
    store: web::Data<StandingDataStore>,
) -> Result<HttpResponse, StandingDataError> {
    let records = store.model_types().await?;
    let results: Vec<ModelType> = records.iter().map(ModelType::from_record).collect();
    Ok(HttpResponse::Ok().json(results))
}

/// GET /code-blocks - the full Mode-S code blocks dataset
pub async fn code_blocks(
    store: web::Data<StandingDataStore>,
) -> Result<HttpResponse, StandingDataError> {
    let records = store.code_blocks().await?;
    let results: Vec<CodeBlock> = records.iter().map(CodeBlock::from_record).collect();
    Ok(HttpResponse::Ok().json(results))
}

/// GET /registration-prefixes - the full registration prefixes dataset
pub async fn registration_prefixes(
    store: web::Data<StandingDataStore>,
) -> Result<HttpResponse, StandingDataError> {
    let records = store.registration_prefixes().await?;
    let results: Vec<RegistrationPrefix> = records
        .iter()
        .map(RegistrationPrefix::from_record)
        .collect();
    Ok(HttpResponse::Ok().json(results))
}
