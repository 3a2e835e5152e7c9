use simplesite_common::editor::{VisualEditorMode, VisualEditorState, VisualEditorStateService};
use simplesite_common::error::ContentError;
use simplesite_common::request::RequestContext;
use tracing::debug;

/// Query parameter selecting the visual editor mode.
pub const MODE_PARAMETER: &str = "mode";

/// Reads the visual editor mode from the `mode` query parameter.
///
/// When disabled, every request is [`VisualEditorMode::Live`].
pub struct QueryVisualEditorStateService {
    enabled: bool,
}

impl QueryVisualEditorStateService {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait::async_trait]
impl VisualEditorStateService for QueryVisualEditorStateService {
    async fn get_current(&self, request: &RequestContext) -> Result<VisualEditorState, ContentError> {
        if !self.enabled {
            return Ok(VisualEditorState::default());
        }

        let mode: VisualEditorMode = request
            .query_value(MODE_PARAMETER)
            .and_then(|m| m.parse().ok())
            .unwrap_or_default();

        debug!(?mode, "visual editor state");
        Ok(VisualEditorState::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_is_always_live() {
        let svc = QueryVisualEditorStateService::new(false);
        let request = RequestContext::from_pairs([("mode", "edit")]);

        let state = svc.get_current(&request).await.unwrap();
        assert_eq!(state.mode, VisualEditorMode::Live);
    }

    #[tokio::test]
    async fn enabled_reads_mode() {
        let svc = QueryVisualEditorStateService::new(true);

        let edit = svc
            .get_current(&RequestContext::from_pairs([("Mode", "Edit")]))
            .await
            .unwrap();
        assert_eq!(edit.mode, VisualEditorMode::Edit);

        let unknown = svc
            .get_current(&RequestContext::from_pairs([("mode", "sideways")]))
            .await
            .unwrap();
        assert_eq!(unknown.mode, VisualEditorMode::Live);
    }
}
