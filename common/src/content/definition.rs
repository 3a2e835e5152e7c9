use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ContentError;

/// Keys of the admin terms a definition may relabel.
pub mod term_keys {
    pub const TITLE: &str = "title";
}

/// Field used to order collections of custom entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortType {
    /// Use the definition's default sort.
    #[default]
    Default,
    /// Manual ordering set by editors, falling back to title.
    Natural,
    Title,
    CreateDate,
    PublishDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// The natural direction of the sort type (newest first for dates, A-Z otherwise).
    #[default]
    Default,
    Ascending,
    Descending,
}

/// How far editors may manually order entities of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Ordering {
    #[default]
    None,
    Partial,
    Full,
}

/// Settings describing a custom entity type and how it behaves.
///
/// Implementations return fixed values for the lifetime of the process.
pub trait CustomEntityDefinition: Send + Sync {
    /// Unique six character code, uppercase by convention.
    fn code(&self) -> &'static str;

    fn name(&self) -> &'static str;

    fn name_plural(&self) -> &'static str;

    /// Short description shown as a tooltip in admin tooling.
    fn description(&self) -> &'static str;

    /// Whether url slugs must be unique within this type.
    fn force_url_slug_uniqueness(&self) -> bool;

    /// Whether url slugs are generated from the title rather than entered.
    fn auto_generate_url_slug(&self) -> bool;

    /// Whether saving an entity publishes it immediately.
    fn auto_publish(&self) -> bool;

    /// Whether entities are partitioned by locale.
    fn has_locale(&self) -> bool;

    /// Relabelled admin terms, keyed by [`term_keys`].
    fn custom_terms(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    fn default_sort_type(&self) -> SortType {
        SortType::Default
    }

    fn default_sort_direction(&self) -> SortDirection {
        SortDirection::Default
    }

    fn ordering(&self) -> Ordering {
        Ordering::None
    }

    /// Checks that a payload can be read as this definition's data model.
    ///
    /// Called before content is stored, so readers can rely on the payload shape.
    fn validate_model(&self, _model: &Value) -> Result<(), ContentError> {
        Ok(())
    }
}

/// Definition codes are exactly six ASCII alphanumeric characters.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == 6 && code.chars().all(|c| c.is_ascii_alphanumeric())
}
