#![cfg(test)]
use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use simplesite_common::config::Config;
use simplesite_common::content::query::SearchCustomEntityRenderSummariesQuery;
use simplesite_common::content::summary::{CustomEntityRenderSummary, PagedQueryResult};
use simplesite_common::error::ContentError;
use simplesite_common::repository::CustomEntityRepository;
use simplesite_core::editor::QueryVisualEditorStateService;
use simplesite_core::listing::EntityListService;
use simplesite_web::routes::{self, AppState};
use simplesite_web::site;
use tower::ServiceExt;

/// A store whose every search fails.
struct BrokenRepository;

#[async_trait::async_trait]
impl CustomEntityRepository for BrokenRepository {
    async fn search_custom_entity_render_summaries(
        &self,
        query: SearchCustomEntityRenderSummariesQuery,
    ) -> Result<PagedQueryResult<CustomEntityRenderSummary>, ContentError> {
        Err(ContentError::UnknownDefinition(query.definition_code))
    }
}

async fn app(visual_editor: bool) -> axum::Router {
    let cfg = Config::new(visual_editor, None).unwrap();
    routes::router(site::build(&cfg).await.unwrap())
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn titles(json: &str) -> Vec<String> {
    let value: Value = serde_json::from_str(json).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn demo_list_is_newest_first() {
    let (status, body) = get(app(false).await, "/api/entities").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["River Mill", "Harbour Lighthouse", "Clock Tower"]);
}

#[tokio::test]
async fn html_page_escapes_titles() {
    let (status, body) = get(app(true).await, "/?mode=preview&PageNumber=1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h2>River Mill &amp; Museum</h2>"));
    assert!(body.contains("<h2>Market Hall</h2>"));
}

#[tokio::test]
async fn malformed_parameters_still_render() {
    let (status, body) = get(app(false).await, "/api/entities?PageNumber=abc&PageSize=-1&CategoryId=x").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body).len(), 3);
}

#[tokio::test]
async fn pages_past_the_end_are_empty() {
    let (status, body) = get(app(false).await, "/entities?PageNumber=2").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No entities found."));
}

#[tokio::test]
async fn repository_failure_is_a_generic_500() {
    let listing = EntityListService::new(
        Arc::new(BrokenRepository),
        Arc::new(QueryVisualEditorStateService::new(false)),
    );
    let app = routes::router(AppState {
        listing: Arc::new(listing),
    });

    for uri in ["/entities", "/api/entities"] {
        let (status, body) = get(app.clone(), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Internal Server Error");
    }
}

#[tokio::test]
async fn health_check() {
    let (status, body) = get(app(false).await, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
