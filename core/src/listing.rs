//! # Entity Listing Service
//!
//! Implements the "list entities" use case behind the site's entity list.
//!
//! The service parses paging parameters from the request, asks the
//! [`CustomEntityRepository`] for one page of Entity summaries filtered by the
//! ambient publish status, and maps each summary into an [`EntitySummary`].

use std::sync::Arc;

use simplesite_common::content::query::SearchCustomEntityRenderSummariesQuery;
use simplesite_common::content::summary::CustomEntityRenderSummary;
use simplesite_common::editor::VisualEditorStateService;
use simplesite_common::error::ContentError;
use simplesite_common::repository::CustomEntityRepository;
use simplesite_common::request::RequestContext;
use tracing::debug;

use crate::entity::{EntityDataModel, EntityDefinition, EntitySummary};

/// Number of entities on each page of the list.
///
/// The `PageSize` request parameter is read but does not override this.
pub const PAGE_SIZE: i32 = 30;

/// Paging and filter parameters accepted by the entity list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListingWebQuery {
    pub page_number: i32,
    pub page_size: i32,
    pub category_id: i32,
}

impl ListingWebQuery {
    /// Binds the query from request parameters. Missing or malformed values become `0`.
    pub fn bind(request: &RequestContext) -> Self {
        Self {
            page_number: request.query_int("PageNumber"),
            page_size: request.query_int("PageSize"),
            category_id: request.query_int("CategoryId"),
        }
    }
}

/// Application Service for the entity list.
pub struct EntityListService {
    repository: Arc<dyn CustomEntityRepository>,
    visual_editor: Arc<dyn VisualEditorStateService>,
}

impl EntityListService {
    pub fn new(
        repository: Arc<dyn CustomEntityRepository>,
        visual_editor: Arc<dyn VisualEditorStateService>,
    ) -> Self {
        Self {
            repository,
            visual_editor,
        }
    }

    /// Renders one page of entities for `request`.
    ///
    /// Errors from the repository, the visual editor service or payload conversion
    /// are returned unchanged.
    pub async fn render_list(
        &self,
        request: &RequestContext,
    ) -> Result<Vec<EntitySummary>, ContentError> {
        let web_query = ListingWebQuery::bind(request);
        let query = self.build_query(request, &web_query).await?;

        // TODO: filter by web_query.category_id once entities carry a category index.
        debug!(
            page_number = query.page_number,
            requested_page_size = web_query.page_size,
            category_id = web_query.category_id,
            publish_status = ?query.publish_status,
            "searching entities"
        );

        let entities = self
            .repository
            .search_custom_entity_render_summaries(query)
            .await?;

        map_entities(&entities.items)
    }

    async fn build_query(
        &self,
        request: &RequestContext,
        web_query: &ListingWebQuery,
    ) -> Result<SearchCustomEntityRenderSummariesQuery, ContentError> {
        // Editors previewing the site also see unpublished entities.
        let state = self.visual_editor.get_current(request).await?;

        let mut query = SearchCustomEntityRenderSummariesQuery::new(EntityDefinition::DEFINITION_CODE);
        query.page_number = web_query.page_number;
        query.page_size = PAGE_SIZE;
        query.publish_status = state.ambient_entity_publish_status_query();
        Ok(query)
    }
}

/// Projects render summaries into view records, preserving order.
pub fn map_entities(
    summaries: &[CustomEntityRenderSummary],
) -> Result<Vec<EntitySummary>, ContentError> {
    summaries
        .iter()
        .map(|summary| {
            let model: EntityDataModel = summary.model.cast()?;
            Ok(EntitySummary {
                title: summary.title.clone(),
                description: model.description,
            })
        })
        .collect()
}
