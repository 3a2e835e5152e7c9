//! # In-Memory Custom Entity Repository
//!
//! Stores custom entities in process and answers render summary searches:
//! definition filter, publish status version selection, sorting and paging.

use std::cmp::Ordering as CmpOrdering;

use chrono::{DateTime, Utc};
use serde_json::Value;
use simplesite_common::content::definition::{SortDirection, SortType};
use simplesite_common::content::model::ErasedDataModel;
use simplesite_common::content::query::{PublishStatusQuery, SearchCustomEntityRenderSummariesQuery};
use simplesite_common::content::registry::DefinitionRegistry;
use simplesite_common::content::summary::{
    CustomEntityRenderSummary, PagedQueryResult, PublishStatus,
};
use simplesite_common::error::ContentError;
use simplesite_common::repository::CustomEntityRepository;
use tokio::sync::RwLock;
use tracing::debug;

/// One version (draft or published) of a stored entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityVersion {
    pub title: String,
    pub model: Value,
}

/// A custom entity as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredCustomEntity {
    pub id: u32,
    pub definition_code: String,
    pub url_slug: String,
    pub create_date: DateTime<Utc>,
    pub publish_date: Option<DateTime<Utc>>,
    pub ordering: Option<i32>,
    pub page_urls: Vec<String>,
    pub published: Option<EntityVersion>,
    pub draft: Option<EntityVersion>,
}

impl StoredCustomEntity {
    /// Picks the version matching `status`, if the entity has one.
    fn version_for(&self, status: PublishStatusQuery) -> Option<(PublishStatus, &EntityVersion)> {
        let published = self.published.as_ref().map(|v| (PublishStatus::Published, v));
        let draft = self.draft.as_ref().map(|v| (PublishStatus::Draft, v));

        match status {
            PublishStatusQuery::Published => published,
            PublishStatusQuery::Draft => draft,
            PublishStatusQuery::Latest => draft.or(published),
            PublishStatusQuery::PreferPublished => published.or(draft),
        }
    }

    fn to_summary(&self, status: PublishStatus, version: &EntityVersion) -> CustomEntityRenderSummary {
        CustomEntityRenderSummary {
            id: self.id,
            definition_code: self.definition_code.clone(),
            title: version.title.clone(),
            url_slug: self.url_slug.clone(),
            publish_status: status,
            model: ErasedDataModel::new(self.definition_code.clone(), version.model.clone()),
            create_date: self.create_date,
            publish_date: self.publish_date,
            ordering: self.ordering,
            page_urls: self.page_urls.clone(),
        }
    }
}

pub struct InMemoryCustomEntityRepository {
    registry: DefinitionRegistry,
    entities: RwLock<Vec<StoredCustomEntity>>,
}

impl InMemoryCustomEntityRepository {
    pub fn new(registry: DefinitionRegistry) -> Self {
        Self {
            registry,
            entities: RwLock::new(Vec::new()),
        }
    }

    pub fn registry(&self) -> &DefinitionRegistry {
        &self.registry
    }

    /// Checks that the entity's definition is registered and that every version's
    /// payload matches the definition's data model.
    pub fn validate(&self, entity: &StoredCustomEntity) -> Result<(), ContentError> {
        let definition = self.registry.get(&entity.definition_code)?;

        for version in entity.published.iter().chain(entity.draft.iter()) {
            definition.validate_model(&version.model)?;
        }
        Ok(())
    }

    /// Adds an entity, assigning the next id. Returns the assigned id.
    pub async fn insert(&self, mut entity: StoredCustomEntity) -> Result<u32, ContentError> {
        self.validate(&entity)?;

        let mut entities = self.entities.write().await;
        let id = entities.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        entity.id = id;
        entities.push(entity);
        Ok(id)
    }

    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entities.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl CustomEntityRepository for InMemoryCustomEntityRepository {
    async fn search_custom_entity_render_summaries(
        &self,
        query: SearchCustomEntityRenderSummariesQuery,
    ) -> Result<PagedQueryResult<CustomEntityRenderSummary>, ContentError> {
        let definition = self.registry.get(&query.definition_code)?;

        let (sort_by, direction) = match query.sort_by {
            SortType::Default => (definition.default_sort_type(), definition.default_sort_direction()),
            sort_by => (sort_by, query.sort_direction),
        };

        let mut matches: Vec<CustomEntityRenderSummary> = {
            let entities = self.entities.read().await;
            entities
                .iter()
                .filter(|e| e.definition_code == query.definition_code)
                .filter_map(|e| {
                    e.version_for(query.publish_status)
                        .map(|(status, version)| e.to_summary(status, version))
                })
                .collect()
        };

        sort_summaries(&mut matches, sort_by, direction);

        let total = matches.len();
        let page_number = query.page_number.max(1) as usize;
        let page = match usize::try_from(query.page_size) {
            Ok(size) if size > 0 => {
                let items = matches
                    .into_iter()
                    .skip((page_number - 1).saturating_mul(size))
                    .take(size)
                    .collect();
                PagedQueryResult::new(items, total, page_number, size)
            }
            _ => PagedQueryResult::new(matches, total, 1, 0),
        };

        debug!(
            code = %query.definition_code,
            total,
            returned = page.items.len(),
            page = page.page_number,
            "custom entity search"
        );

        Ok(page)
    }
}

/// Sorts summaries in place. Ties are broken by ascending id.
fn sort_summaries(items: &mut [CustomEntityRenderSummary], sort_by: SortType, direction: SortDirection) {
    let descending = match direction {
        SortDirection::Ascending => false,
        SortDirection::Descending => true,
        SortDirection::Default => matches!(sort_by, SortType::PublishDate | SortType::CreateDate),
    };

    let by_title = |a: &CustomEntityRenderSummary, b: &CustomEntityRenderSummary| {
        a.title.to_lowercase().cmp(&b.title.to_lowercase())
    };

    items.sort_by(|a, b| {
        let primary = match sort_by {
            SortType::PublishDate => {
                // Unpublished entities always sort last.
                return match (a.publish_date, b.publish_date) {
                    (Some(x), Some(y)) => directed(x.cmp(&y), descending),
                    (Some(_), None) => CmpOrdering::Less,
                    (None, Some(_)) => CmpOrdering::Greater,
                    (None, None) => CmpOrdering::Equal,
                }
                .then(a.id.cmp(&b.id));
            }
            SortType::CreateDate => a.create_date.cmp(&b.create_date),
            SortType::Title | SortType::Default => by_title(a, b),
            SortType::Natural => {
                // Manually ordered entities first, the rest by title.
                return match (a.ordering, b.ordering) {
                    (Some(x), Some(y)) => directed(x.cmp(&y), descending),
                    (Some(_), None) => CmpOrdering::Less,
                    (None, Some(_)) => CmpOrdering::Greater,
                    (None, None) => directed(by_title(a, b), descending),
                }
                .then(a.id.cmp(&b.id));
            }
        };

        directed(primary, descending).then(a.id.cmp(&b.id))
    });
}

fn directed(ordering: CmpOrdering, descending: bool) -> CmpOrdering {
    if descending { ordering.reverse() } else { ordering }
}
