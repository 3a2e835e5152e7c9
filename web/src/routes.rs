use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use simplesite_common::error::ContentError;
use simplesite_common::request::RequestContext;
use simplesite_core::entity::EntitySummary;
use simplesite_core::listing::EntityListService;
use tracing::{Instrument, debug, error, info, info_span};

use crate::view;

/// Shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub listing: Arc<EntityListService>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(entity_list_page))
        .route("/entities", get(entity_list_page))
        .route("/api/entities", get(entity_list_json))
        .route("/health", get(health))
        .layer(middleware::from_fn(trace_request))
        .with_state(state)
}

/// Runs the request inside a `request` span carrying its method and path.
async fn trace_request(request: Request, next: Next) -> Response {
    let span = info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    );

    async move {
        let response = next.run(request).await;
        info!(status = response.status().as_u16(), "served");
        response
    }
    .instrument(span)
    .await
}

/// Any failure while handling a request. Rendered as a generic 500.
pub struct AppError(ContentError);

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

type QueryPairs = Query<Vec<(String, String)>>;

async fn entity_list_page(
    State(state): State<AppState>,
    Query(query): QueryPairs,
) -> Result<Html<String>, AppError> {
    let entities = list(&state, query).await?;
    Ok(Html(view::render_entity_list(&entities)))
}

async fn entity_list_json(
    State(state): State<AppState>,
    Query(query): QueryPairs,
) -> Result<Json<Vec<EntitySummary>>, AppError> {
    Ok(Json(list(&state, query).await?))
}

async fn health() -> &'static str {
    "ok"
}

async fn list(state: &AppState, query: Vec<(String, String)>) -> Result<Vec<EntitySummary>, AppError> {
    let request = RequestContext::new(query);
    let entities = state.listing.render_list(&request).await?;
    debug!(count = entities.len(), "rendered entity list");
    Ok(entities)
}
