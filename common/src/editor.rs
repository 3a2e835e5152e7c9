//! # Visual Editor State
//!
//! Editors browsing the site can switch between the live site and preview or edit
//! modes. The mode decides whether unpublished content is shown.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::content::query::PublishStatusQuery;
use crate::error::ContentError;
use crate::request::RequestContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisualEditorMode {
    /// The public site, published content only.
    #[default]
    Live,
    /// The site as it will look once drafts are published.
    Preview,
    /// Preview with editing tools enabled.
    Edit,
}

impl FromStr for VisualEditorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "preview" => Ok(Self::Preview),
            "edit" => Ok(Self::Edit),
            _ => Err(format!("unknown visual editor mode: {s}")),
        }
    }
}

/// Visual editor state for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualEditorState {
    pub mode: VisualEditorMode,
}

impl VisualEditorState {
    pub fn new(mode: VisualEditorMode) -> Self {
        Self { mode }
    }

    /// Publish status to use for entity queries made while rendering this request.
    pub fn ambient_entity_publish_status_query(&self) -> PublishStatusQuery {
        match self.mode {
            VisualEditorMode::Preview | VisualEditorMode::Edit => PublishStatusQuery::Latest,
            VisualEditorMode::Live => PublishStatusQuery::Published,
        }
    }
}

/// Resolves the visual editor state of a request.
#[async_trait::async_trait]
pub trait VisualEditorStateService: Send + Sync {
    async fn get_current(&self, request: &RequestContext) -> Result<VisualEditorState, ContentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_status_follows_mode() {
        let status = |mode| VisualEditorState::new(mode).ambient_entity_publish_status_query();

        assert_eq!(status(VisualEditorMode::Live), PublishStatusQuery::Published);
        assert_eq!(status(VisualEditorMode::Preview), PublishStatusQuery::Latest);
        assert_eq!(status(VisualEditorMode::Edit), PublishStatusQuery::Latest);
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("EDIT".parse::<VisualEditorMode>(), Ok(VisualEditorMode::Edit));
        assert_eq!(
            " preview ".parse::<VisualEditorMode>(),
            Ok(VisualEditorMode::Preview)
        );
        assert!("draft".parse::<VisualEditorMode>().is_err());
    }
}
