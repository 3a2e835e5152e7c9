//! # Simplesite Common
//!
//! Shared models and boundaries for the site.
//!
//! * **[`content`]**: Custom entity definitions, typed payloads, summaries and queries.
//! * **[`editor`]**: Visual editor state and the ambient publish status derived from it.
//! * **[`repository`]**: The port through which custom entities are queried.
//! * **[`request`]**: Per-request context and query parameter helpers.
//! * **[`config`]**: Process configuration (listen addresses, feature switches).
//! * **[`error`]**: Error types shared by every crate in the workspace.

pub mod config;
pub mod content;
pub mod editor;
pub mod error;
pub mod repository;
pub mod request;
