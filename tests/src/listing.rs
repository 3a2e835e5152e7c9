#![cfg(test)]
use std::sync::Arc;

use simplesite_common::content::registry::DefinitionRegistry;
use simplesite_common::request::RequestContext;
use simplesite_core::editor::QueryVisualEditorStateService;
use simplesite_core::entity::{EntityDefinition, EntitySummary};
use simplesite_core::listing::{EntityListService, PAGE_SIZE};
use simplesite_core::repository::InMemoryCustomEntityRepository;
use simplesite_core::seed;

/// Entity `n` is published on the `n`th day of 2024, so higher numbers are newer.
fn entity_json(n: usize) -> String {
    let month = 1 + n / 28;
    let day = 1 + n % 28;
    format!(
        r#"{{
            "urlSlug": "entity-{n}",
            "createDate": "2024-01-01T00:00:00Z",
            "publishDate": "2024-{month:02}-{day:02}T00:00:00Z",
            "published": {{ "title": "Entity {n}", "model": {{ "description": "number {n}" }} }}
        }}"#
    )
}

async fn service(json: &str, visual_editor: bool) -> EntityListService {
    let mut registry = DefinitionRegistry::new();
    registry.register(EntityDefinition).unwrap();

    let repository = InMemoryCustomEntityRepository::new(registry);
    seed::load_str(&repository, json).await.unwrap();

    EntityListService::new(
        Arc::new(repository),
        Arc::new(QueryVisualEditorStateService::new(visual_editor)),
    )
}

fn titles(list: &[EntitySummary]) -> Vec<&str> {
    list.iter().map(|e| e.title.as_str()).collect()
}

const MIXED: &str = r#"[
    {
        "urlSlug": "a",
        "createDate": "2024-01-01T00:00:00Z",
        "publishDate": "2024-01-03T00:00:00Z",
        "published": { "title": "A", "model": { "description": "a" } }
    },
    {
        "urlSlug": "b",
        "createDate": "2024-01-01T00:00:00Z",
        "publishDate": "2024-01-02T00:00:00Z",
        "published": { "title": "B", "model": { "description": "b" } },
        "draft": { "title": "B2", "model": { "description": "b2" } }
    },
    {
        "urlSlug": "c",
        "createDate": "2024-01-01T00:00:00Z",
        "draft": { "title": "C", "model": { "description": "c" } }
    }
]"#;

#[tokio::test]
async fn live_list_shows_published_newest_first() {
    let svc = service(MIXED, true).await;

    let list = svc.render_list(&RequestContext::default()).await.unwrap();

    assert_eq!(
        list,
        vec![
            EntitySummary {
                title: "A".to_string(),
                description: "a".to_string(),
            },
            EntitySummary {
                title: "B".to_string(),
                description: "b".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn preview_shows_latest_versions() {
    let svc = service(MIXED, true).await;
    let request = RequestContext::from_pairs([("mode", "preview")]);

    let list = svc.render_list(&request).await.unwrap();

    assert_eq!(titles(&list), vec!["A", "B2", "C"]);
}

#[tokio::test]
async fn preview_ignored_when_editor_disabled() {
    let svc = service(MIXED, false).await;
    let request = RequestContext::from_pairs([("mode", "edit")]);

    let list = svc.render_list(&request).await.unwrap();

    assert_eq!(titles(&list), vec!["A", "B"]);
}

#[tokio::test]
async fn pages_hold_thirty_entities() {
    let entities: Vec<String> = (0..45).map(entity_json).collect();
    let json = format!("[{}]", entities.join(","));
    let svc = service(&json, false).await;

    let first = svc
        .render_list(&RequestContext::from_pairs([("PageSize", "100")]))
        .await
        .unwrap();
    assert_eq!(first.len(), PAGE_SIZE as usize);
    assert_eq!(first[0].title, "Entity 44");

    let second = svc
        .render_list(&RequestContext::from_pairs([("PageNumber", "2"), ("PageSize", "5")]))
        .await
        .unwrap();
    assert_eq!(second.len(), 15);
    assert_eq!(second.last().map(|e| e.title.as_str()), Some("Entity 0"));

    let malformed = svc
        .render_list(&RequestContext::from_pairs([("PageNumber", "two")]))
        .await
        .unwrap();
    assert_eq!(malformed, first);
}
