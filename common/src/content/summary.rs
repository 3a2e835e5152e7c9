use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::model::ErasedDataModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublishStatus {
    Draft,
    Published,
}

/// The data needed to render one custom entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomEntityRenderSummary {
    pub id: u32,
    pub definition_code: String,
    pub title: String,
    pub url_slug: String,
    /// Status of the version this summary was built from.
    pub publish_status: PublishStatus,
    pub model: ErasedDataModel,
    pub create_date: DateTime<Utc>,
    pub publish_date: Option<DateTime<Utc>>,
    pub ordering: Option<i32>,
    /// Urls of pages that display this entity.
    pub page_urls: Vec<String>,
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedQueryResult<T> {
    pub items: Vec<T>,
    /// Number of matching items across all pages.
    pub total_items: usize,
    pub page_number: usize,
    /// Zero when paging is disabled.
    pub page_size: usize,
    pub page_count: usize,
}

impl<T> PagedQueryResult<T> {
    /// Builds a result from a page slice. `page_size` of 0 means the page holds every item.
    pub fn new(items: Vec<T>, total_items: usize, page_number: usize, page_size: usize) -> Self {
        let page_count = match (total_items, page_size) {
            (0, _) => 0,
            (_, 0) => 1,
            (total, size) => total.div_ceil(size),
        };

        Self {
            items,
            total_items,
            page_number,
            page_size,
            page_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        let page: PagedQueryResult<u8> = PagedQueryResult::new(vec![1, 2], 61, 3, 30);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.total_items, 61);
    }

    #[test]
    fn unpaged_result_has_one_page() {
        let page: PagedQueryResult<u8> = PagedQueryResult::new(vec![1, 2, 3], 3, 1, 0);
        assert_eq!(page.page_count, 1);
        assert_eq!(PagedQueryResult::<u8>::new(Vec::new(), 0, 1, 30).page_count, 0);
    }
}
