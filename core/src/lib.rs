//! # Simplesite Core
//!
//! The Entity content type, the services that render it, and in-process
//! implementations of the content ports.
//!
//! * **[`entity`]**: The Entity definition and its data model.
//! * **[`listing`]**: Renders a page of entities as view records.
//! * **[`repository`]**: In-memory custom entity store and query engine.
//! * **[`editor`]**: Visual editor state derived from the request query.
//! * **[`seed`]**: Loads entity content from JSON.

pub mod editor;
pub mod entity;
pub mod listing;
pub mod repository;
pub mod seed;
