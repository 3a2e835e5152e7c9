//! # Entity
//!
//! The single custom content type of the site.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use simplesite_common::content::definition::{
    CustomEntityDefinition, Ordering, SortDirection, SortType, term_keys,
};
use simplesite_common::content::model::{CustomEntityDataModel, ErasedDataModel};
use simplesite_common::error::ContentError;

/// Settings describing the Entity type.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityDefinition;

impl EntityDefinition {
    /// Code used to reference this definition in queries.
    pub const DEFINITION_CODE: &'static str = "CUSENT";
}

impl CustomEntityDefinition for EntityDefinition {
    fn code(&self) -> &'static str {
        Self::DEFINITION_CODE
    }

    fn name(&self) -> &'static str {
        "Entity"
    }

    fn name_plural(&self) -> &'static str {
        "Entites"
    }

    fn description(&self) -> &'static str {
        "Custom entity"
    }

    fn force_url_slug_uniqueness(&self) -> bool {
        true
    }

    fn auto_generate_url_slug(&self) -> bool {
        true
    }

    fn auto_publish(&self) -> bool {
        true
    }

    fn has_locale(&self) -> bool {
        false
    }

    /// Admins see "Name" instead of "Title".
    fn custom_terms(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(term_keys::TITLE.to_string(), "Name".to_string())])
    }

    fn default_sort_type(&self) -> SortType {
        SortType::PublishDate
    }

    fn default_sort_direction(&self) -> SortDirection {
        SortDirection::Default
    }

    fn ordering(&self) -> Ordering {
        Ordering::Full
    }

    fn validate_model(&self, model: &Value) -> Result<(), ContentError> {
        ErasedDataModel::new(Self::DEFINITION_CODE, model.clone())
            .cast::<EntityDataModel>()
            .map(|_| ())
    }
}

/// Data stored for each Entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDataModel {
    pub description: String,
}

impl CustomEntityDataModel for EntityDataModel {
    const DEFINITION_CODE: &'static str = EntityDefinition::DEFINITION_CODE;
}

/// View record rendered for each Entity in a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySummary {
    pub title: String,
    pub description: String,
}
