use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ContentError;

/// Typed payload stored against a custom entity.
///
/// Each data model belongs to exactly one definition.
pub trait CustomEntityDataModel: Serialize + DeserializeOwned {
    const DEFINITION_CODE: &'static str;
}

/// A stored payload whose concrete type is only known by its definition code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErasedDataModel {
    definition_code: String,
    data: Value,
}

impl ErasedDataModel {
    pub fn new(definition_code: impl Into<String>, data: Value) -> Self {
        Self {
            definition_code: definition_code.into(),
            data,
        }
    }

    pub fn from_model<M: CustomEntityDataModel>(model: &M) -> Result<Self, ContentError> {
        Ok(Self::new(M::DEFINITION_CODE, serde_json::to_value(model)?))
    }

    pub fn definition_code(&self) -> &str {
        &self.definition_code
    }

    /// Reads the payload as `M`.
    ///
    /// Fails with [`ContentError::SchemaMismatch`] when the payload belongs to another
    /// definition or its shape does not match `M`.
    pub fn cast<M: CustomEntityDataModel>(&self) -> Result<M, ContentError> {
        let mismatch = |reason: String| ContentError::SchemaMismatch {
            expected: M::DEFINITION_CODE.to_string(),
            found: self.definition_code.clone(),
            reason,
        };

        if self.definition_code != M::DEFINITION_CODE {
            return Err(mismatch("payload belongs to another definition".to_string()));
        }

        M::deserialize(&self.data).map_err(|e| mismatch(e.to_string()))
    }
}
