use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::content::definition::{self, CustomEntityDefinition};
use crate::error::ContentError;

/// Custom entity definitions known to the site, keyed by code.
#[derive(Default, Clone)]
pub struct DefinitionRegistry {
    definitions: HashMap<&'static str, Arc<dyn CustomEntityDefinition>>,
}

impl DefinitionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<D>(&mut self, definition: D) -> Result<(), ContentError>
    where
        D: CustomEntityDefinition + 'static,
    {
        let code = definition.code();

        if !definition::is_valid_code(code) {
            return Err(ContentError::InvalidDefinitionCode(code.to_string()));
        }
        if self.definitions.contains_key(code) {
            return Err(ContentError::DuplicateDefinition(code.to_string()));
        }

        debug!(code, name = definition.name(), "registered custom entity definition");
        self.definitions.insert(code, Arc::new(definition));
        Ok(())
    }

    pub fn get(&self, code: &str) -> Result<Arc<dyn CustomEntityDefinition>, ContentError> {
        self.definitions
            .get(code)
            .cloned()
            .ok_or_else(|| ContentError::UnknownDefinition(code.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn CustomEntityDefinition>> {
        self.definitions.values()
    }
}
