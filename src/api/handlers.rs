use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::{BoardPage, Highlight, ViewMode},
    render::render_page,
};

use super::AppState;

// Request types

/// Mode name, parsed like the path and query forms
#[derive(Debug, Deserialize)]
pub struct SetViewModeRequest {
    pub mode: String,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub mode: Option<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Render the board as HTML.
///
/// A `?mode=` parameter switches the shared active mode before rendering,
/// so this GET changes what later requests see.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Html<String>> {
    let page = match query.mode {
        Some(mode) => state.switch_mode(mode.parse()?).await,
        None => state.inner.read().await.current_page(),
    };

    Ok(Html(render_page(&page)))
}

/// Get the highlights panel
pub async fn get_highlights(State(state): State<AppState>) -> Json<Vec<Highlight>> {
    let inner = state.inner.read().await;
    Json(inner.highlights.clone())
}

/// Get the page for the active view mode
pub async fn get_view(State(state): State<AppState>) -> Json<BoardPage> {
    let inner = state.inner.read().await;
    Json(inner.current_page())
}

/// Set the active view mode
pub async fn set_view_mode(
    State(state): State<AppState>,
    Json(request): Json<SetViewModeRequest>,
) -> AppResult<Json<BoardPage>> {
    let mode: ViewMode = request.mode.parse()?;
    Ok(Json(state.switch_mode(mode).await))
}

/// Get the page for a given mode without changing the active one
pub async fn get_view_for_mode(
    State(state): State<AppState>,
    Path(mode): Path<String>,
) -> AppResult<Json<BoardPage>> {
    let mode: ViewMode = mode.parse()?;

    tracing::debug!(mode = %mode, "Rendering view for requested mode");

    let inner = state.inner.read().await;
    Ok(Json(inner.page(mode)))
}
