//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! existing service layer for business logic.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use super::dto::{
    CatalogVisibilityRequest, CatalogVisibilityResponse, HealthResponse, ResolveQuery,
    ResolvedLocationDto, StarVisibilityRequest, StarVisibilityResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::services::{self, FilterOptions};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// UTC noon of the requested local date, used to probe the zone's UTC offset
/// for that night (daylight saving is date-dependent).
fn offset_probe(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc() + Duration::hours(12)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

// =============================================================================
// Location Resolution
// =============================================================================

/// GET /v1/locations/resolve?lat=..&lon=..
///
/// Resolve a coordinate pair to its IANA time zone, current UTC offset and
/// local time.
pub async fn resolve_location(
    Query(query): Query<ResolveQuery>,
) -> HandlerResult<ResolvedLocationDto> {
    let resolved = services::resolve_str(&query.lat, &query.lon, Utc::now())?;
    Ok(Json(resolved.into()))
}

// =============================================================================
// Visibility
// =============================================================================

/// POST /v1/visibility/star
///
/// Compute the visibility window and altitude curves for a single target.
pub async fn star_visibility(
    Json(request): Json<StarVisibilityRequest>,
) -> HandlerResult<StarVisibilityResponse> {
    let resolved = services::resolve(
        request.latitude_deg,
        request.longitude_deg,
        offset_probe(request.date),
    )?;
    let (result, series) = services::compute_single(
        request.ra_deg,
        request.dec_deg,
        request.date,
        resolved.timezone.utc_offset_hours,
        &resolved.location,
        &resolved.timezone,
    )?;

    Ok(Json(StarVisibilityResponse {
        duration_minutes: result.duration_minutes,
        window_start: result.window_start_string(),
        window_end: result.window_end_string(),
        timezone: resolved.timezone.iana_id,
        utc_offset_hours: resolved.timezone.utc_offset_hours,
        series,
    }))
}

/// POST /v1/visibility/catalog
///
/// Parse an uploaded catalog, compute visibility for every star and return
/// the filtered report rows.
pub async fn catalog_visibility(
    State(state): State<AppState>,
    Json(request): Json<CatalogVisibilityRequest>,
) -> HandlerResult<CatalogVisibilityResponse> {
    let cache = state.catalog_cache.clone();

    // Whole-catalog computation is CPU-bound, keep it off the async runtime
    let response = tokio::task::spawn_blocking(move || -> crate::error::Result<_> {
        let resolved = services::resolve(
            request.latitude_deg,
            request.longitude_deg,
            offset_probe(request.date),
        )?;
        let catalog = cache.load(&request.catalog_text)?;
        let results = services::compute_batch(
            &catalog.stars,
            request.date,
            resolved.timezone.utc_offset_hours,
            &resolved.location,
            &resolved.timezone,
        )?;

        let rows = services::assemble_rows(&catalog.stars, &results);
        let filters = FilterOptions {
            min_duration_minutes: request.min_duration_minutes,
            max_magnitude: request.max_magnitude,
        };
        let rows = services::apply_filters(rows, &filters);

        let mut warnings: Vec<String> =
            catalog.warnings.iter().map(ToString::to_string).collect();
        if let Some(warning) = resolved.timezone.fallback_warning() {
            warnings.push(warning);
        }

        Ok(CatalogVisibilityResponse {
            timezone: resolved.timezone.iana_id,
            utc_offset_hours: resolved.timezone.utc_offset_hours,
            total_rows: catalog.len(),
            matched_rows: rows.len(),
            rows,
            warnings,
        })
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
    .map_err(AppError::from)?;

    Ok(Json(response))
}
