//! # Custom Entity Content
//!
//! Models describing custom entity types and the content stored for them.
//!
//! * [`definition`]: The settings record each custom entity type provides.
//! * [`registry`]: Lookup of definitions by their six character code.
//! * [`model`]: Type-erased payloads and the checked conversion to typed data models.
//! * [`query`]: Search queries and publish status filters.
//! * [`summary`]: Render summaries and paged results returned by a repository.

pub mod definition;
pub mod model;
pub mod query;
pub mod registry;
pub mod summary;
