//! Read-only site routes — route resolution, catalog, coverage.

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::nav::{Page, Route, dispatch};
use crate::services::coverage::{Coverage, check_zip};
use crate::site::{self, BUSINESS, SERVICES, Service, ServiceKind};

// =============================================================================
// ROUTE RESOLUTION
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    #[serde(default)]
    fragment: String,
}

#[derive(Debug, Serialize)]
pub struct ResolvedRoute {
    pub route: Route,
    pub page: Page,
}

/// `GET /api/route?fragment=...` — canonical route and selected page.
pub async fn resolve_route(Query(params): Query<RouteQuery>) -> Json<ResolvedRoute> {
    let route = Route::from_fragment(&params.fragment);
    let page = dispatch(&route);
    Json(ResolvedRoute { route, page })
}

// =============================================================================
// CATALOG
// =============================================================================

#[derive(Debug, Serialize)]
pub struct BusinessCard {
    pub name: &'static str,
    pub phone_display: &'static str,
    pub phone_tel: String,
    pub email: &'static str,
    pub service_area: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SiteProfile {
    pub business: BusinessCard,
    pub services: &'static [Service],
}

/// `GET /api/site` — business profile and ordered service catalog.
pub async fn site_profile() -> Json<SiteProfile> {
    let business = BusinessCard {
        name: BUSINESS.name,
        phone_display: BUSINESS.phone_display,
        phone_tel: BUSINESS.phone_tel(),
        email: BUSINESS.email,
        service_area: BUSINESS.service_area,
    };
    Json(SiteProfile { business, services: &SERVICES })
}

/// `GET /api/work/{service}` — one catalog entry with its work-page content.
pub async fn work_page(Path(key): Path<String>) -> Result<Json<&'static Service>, StatusCode> {
    let kind = ServiceKind::from_key(&key).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(site::service(kind)))
}

// =============================================================================
// COVERAGE
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct CoverageQuery {
    #[serde(default)]
    zip: String,
}

/// `GET /api/coverage?zip=...` — serviced-area check for a typed zip.
pub async fn coverage(Query(params): Query<CoverageQuery>) -> Json<Coverage> {
    Json(check_zip(&params.zip))
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
