use crate::content::query::SearchCustomEntityRenderSummariesQuery;
use crate::content::summary::{CustomEntityRenderSummary, PagedQueryResult};
use crate::error::ContentError;

/// Defines the contract for querying stored custom entities.
#[async_trait::async_trait]
pub trait CustomEntityRepository: Send + Sync {
    /// Returns one page of render summaries matching `query`.
    ///
    /// # Errors
    /// * [`ContentError::UnknownDefinition`] if the query names an unregistered definition.
    async fn search_custom_entity_render_summaries(
        &self,
        query: SearchCustomEntityRenderSummariesQuery,
    ) -> Result<PagedQueryResult<CustomEntityRenderSummary>, ContentError>;
}
