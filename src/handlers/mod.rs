//! # Web Handlers
//!
//! This module contains the HTTP endpoint handlers for the Customer Manager.
//! Page handlers build a [`ModelAndView`] and render it to HTML.

use axum::{
    extract::{Query, State},
    response::{Html, Json},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::db;
use crate::error::{ApiError, service_unavailable};
use crate::models::{HealthStatus, customer};
use crate::server::AppState;
use crate::views::{INDEX_VIEW, ModelAndView};

/// Render-context key holding the customers shown on the index page.
pub const LIST_CUSTOMER_KEY: &str = "listCustomer";

/// Render-context key holding the search keyword, when there is one.
pub const KEYWORD_KEY: &str = "keyword";

/// Query string accepted by the search page.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Substring matched against name, email and address; missing means empty
    pub keyword: Option<String>,
}

/// Builds the index view for a list of customers.
pub fn customer_list_view(customers: &[customer::Model]) -> ModelAndView {
    let mut mav = ModelAndView::new(INDEX_VIEW);
    mav.add_object(LIST_CUSTOMER_KEY, customers);
    mav
}

/// Home page listing every customer
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Customer list page", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error", body = ApiError),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tag = "customers"
)]
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let list_customer = state.customer_service.list_all().await?;
    let mav = customer_list_view(&list_customer);
    Ok(Html(state.views.render(&mav)?))
}

/// Customer list page filtered by keyword
#[utoipa::path(
    get,
    path = "/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching customers page", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error", body = ApiError),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tag = "customers"
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, ApiError> {
    let keyword = params.keyword.unwrap_or_default();
    let list_customer = state.customer_service.search(&keyword).await?;

    let mut mav = customer_list_view(&list_customer);
    mav.add_object(KEYWORD_KEY, &keyword);
    Ok(Html(state.views.render(&mav)?))
}

/// Liveness probe that also checks the database
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service and database are up", body = HealthStatus),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tag = "health"
)]
pub async fn healthz(State(state): State<AppState>) -> Result<Json<HealthStatus>, ApiError> {
    db::health_check(&state.db).await.map_err(|err| {
        tracing::warn!(error = ?err, "health check failed");
        service_unavailable("Database unavailable")
    })?;
    Ok(Json(HealthStatus::default()))
}

#[cfg(test)]
mod tests;
