//! Wires the content definitions, repository and services together.

use std::sync::Arc;

use anyhow::Context;
use simplesite_common::config::Config;
use simplesite_common::content::registry::DefinitionRegistry;
use simplesite_core::editor::QueryVisualEditorStateService;
use simplesite_core::entity::EntityDefinition;
use simplesite_core::listing::EntityListService;
use simplesite_core::repository::InMemoryCustomEntityRepository;
use simplesite_core::seed;
use tracing::info;

use crate::routes::AppState;

/// Demo content shown when no seed file is given.
pub const DEMO_CONTENT: &str = include_str!("../content/entities.json");

pub fn definitions() -> anyhow::Result<DefinitionRegistry> {
    let mut registry = DefinitionRegistry::new();
    registry.register(EntityDefinition)?;

    for definition in registry.iter() {
        info!(
            code = definition.code(),
            name = definition.name(),
            plural = definition.name_plural(),
            "custom entity definition"
        );
    }

    Ok(registry)
}

pub async fn build(cfg: &Config) -> anyhow::Result<AppState> {
    let repository = InMemoryCustomEntityRepository::new(definitions()?);

    match &cfg.seed {
        Some(path) => {
            seed::load_file(&repository, path)
                .await
                .with_context(|| format!("failed to load seed file {}", path.display()))?;
        }
        None => {
            let count = seed::load_str(&repository, DEMO_CONTENT)
                .await
                .context("failed to load demo content")?;
            info!(count, "loaded demo content");
        }
    }

    if cfg.visual_editor {
        info!("visual editor modes enabled, drafts visible with ?mode=preview");
    }

    let listing = EntityListService::new(
        Arc::new(repository),
        Arc::new(QueryVisualEditorStateService::new(cfg.visual_editor)),
    );

    Ok(AppState {
        listing: Arc::new(listing),
    })
}
