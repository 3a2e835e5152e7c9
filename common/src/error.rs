//! Error types shared across the workspace.

/// Errors raised while registering, storing or reading custom entity content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// No definition is registered for the requested code.
    #[error("unknown custom entity definition: {0}")]
    UnknownDefinition(String),

    /// A definition with the same code has already been registered.
    #[error("custom entity definition already registered: {0}")]
    DuplicateDefinition(String),

    /// Definition codes must be exactly six ASCII alphanumeric characters.
    #[error("invalid custom entity definition code: {0:?}")]
    InvalidDefinitionCode(String),

    /// A stored payload could not be read as the requested data model.
    #[error("schema mismatch: expected {expected} model, found {found}: {reason}")]
    SchemaMismatch {
        expected: String,
        found: String,
        reason: String,
    },

    /// Seed content was readable but describes an entity that cannot be stored.
    #[error("invalid seed entity {slug:?}: {reason}")]
    InvalidSeed { slug: String, reason: String },

    /// Failed to read seed content from disk.
    #[error("failed to read seed content: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode or decode JSON content.
    #[error("invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while building the process configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid listen url {url:?}: {reason}")]
    InvalidListenUrl { url: String, reason: String },
}
