use serde::{Deserialize, Serialize};

use crate::content::definition::{SortDirection, SortType};

/// Which version of an entity a query should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PublishStatusQuery {
    /// Only the published version; unpublished entities are excluded.
    #[default]
    Published,
    /// The draft version when one exists, otherwise the published version.
    Latest,
    /// The published version when one exists, otherwise the draft.
    PreferPublished,
    /// Only the draft version.
    Draft,
}

/// Searches the render summaries of a single custom entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCustomEntityRenderSummariesQuery {
    pub definition_code: String,
    /// 1-based page number. Values below 1 select the first page.
    pub page_number: i32,
    /// Values below 1 disable paging.
    pub page_size: i32,
    pub publish_status: PublishStatusQuery,
    pub sort_by: SortType,
    pub sort_direction: SortDirection,
}

impl SearchCustomEntityRenderSummariesQuery {
    pub fn new(definition_code: impl Into<String>) -> Self {
        Self {
            definition_code: definition_code.into(),
            page_number: 0,
            page_size: 0,
            publish_status: PublishStatusQuery::default(),
            sort_by: SortType::default(),
            sort_direction: SortDirection::default(),
        }
    }
}
