//! Veterinarian listing handlers

use crate::{
    api::negotiation,
    services::{resolve_page, VetListModel},
    state::AppState,
    views::{HtmlView, VET_LIST_VIEW},
    Result,
};
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

/// Paginated vet list rendered as HTML
///
/// GET /vets.html?page={n}
///
/// The query is taken as raw pairs so malformed or repeated `page` values
/// fall back instead of being rejected by the extractor. The first `page`
/// wins.
pub async fn show_vet_list(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<HtmlView<VetListModel>> {
    let raw_page = params
        .iter()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.as_str());
    let page = resolve_page(raw_page);
    let model = state.vet_service.list_page(page).await?;
    Ok(HtmlView::new(VET_LIST_VIEW, model))
}

/// Every vet as `{"vetList": [...]}`
///
/// GET /vets
pub async fn show_resources_vet_list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response> {
    negotiation::require_json(&headers)?;
    let vets = state.vet_service.list_all().await?;
    Ok((StatusCode::OK, Json(vets)).into_response())
}
