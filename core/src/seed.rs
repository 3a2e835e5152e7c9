//! # Content Seeding
//!
//! Loads custom entities from a JSON array into an [`InMemoryCustomEntityRepository`].
//!
//! ```json
//! [
//!   {
//!     "urlSlug": "first",
//!     "createDate": "2024-01-01T00:00:00Z",
//!     "publishDate": "2024-01-02T00:00:00Z",
//!     "published": { "title": "First", "model": { "description": "Hello" } }
//!   }
//! ]
//! ```
//!
//! `definitionCode` defaults to the Entity definition. An entity may carry a
//! `published` version, a `draft` version, or both.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use simplesite_common::error::ContentError;
use tracing::{debug, info};

use crate::entity::EntityDefinition;
use crate::repository::{EntityVersion, InMemoryCustomEntityRepository, StoredCustomEntity};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedEntity {
    #[serde(default = "default_definition_code")]
    definition_code: String,
    url_slug: String,
    create_date: DateTime<Utc>,
    #[serde(default)]
    publish_date: Option<DateTime<Utc>>,
    #[serde(default)]
    ordering: Option<i32>,
    #[serde(default)]
    page_urls: Vec<String>,
    #[serde(default)]
    published: Option<SeedVersion>,
    #[serde(default)]
    draft: Option<SeedVersion>,
}

#[derive(Debug, Deserialize)]
struct SeedVersion {
    title: String,
    model: Value,
}

fn default_definition_code() -> String {
    EntityDefinition::DEFINITION_CODE.to_string()
}

impl SeedEntity {
    fn into_stored(self) -> Result<StoredCustomEntity, ContentError> {
        let invalid = |reason: &str| ContentError::InvalidSeed {
            slug: self.url_slug.clone(),
            reason: reason.to_string(),
        };

        if self.published.is_none() && self.draft.is_none() {
            return Err(invalid("entity has neither a published nor a draft version"));
        }
        if self.published.is_some() && self.publish_date.is_none() {
            return Err(invalid("published entity is missing publishDate"));
        }

        let version = |v: SeedVersion| EntityVersion {
            title: v.title,
            model: v.model,
        };

        Ok(StoredCustomEntity {
            id: 0,
            definition_code: self.definition_code,
            url_slug: self.url_slug,
            create_date: self.create_date,
            publish_date: self.publish_date,
            ordering: self.ordering,
            page_urls: self.page_urls,
            published: self.published.map(version),
            draft: self.draft.map(version),
        })
    }
}

/// Parses `json` and inserts every entity. Returns the number of entities added.
///
/// Nothing is inserted if any entity is invalid.
pub async fn load_str(
    repository: &InMemoryCustomEntityRepository,
    json: &str,
) -> Result<usize, ContentError> {
    let seed: Vec<SeedEntity> = serde_json::from_str(json)?;

    let entities = seed
        .into_iter()
        .map(|entity| {
            let stored = entity.into_stored()?;
            repository.validate(&stored)?;
            Ok::<_, ContentError>(stored)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let count = entities.len();
    for entity in entities {
        let slug = entity.url_slug.clone();
        let id = repository.insert(entity).await?;
        debug!(id, slug = %slug, "seeded entity");
    }

    Ok(count)
}

/// Reads a seed file from disk, see [`load_str`].
pub async fn load_file(
    repository: &InMemoryCustomEntityRepository,
    path: &Path,
) -> Result<usize, ContentError> {
    let json = tokio::fs::read_to_string(path).await?;
    let count = load_str(repository, &json).await?;
    info!(path = %path.display(), count, "loaded seed content");
    Ok(count)
}
