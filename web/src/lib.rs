//! # Simplesite Web Host
//!
//! The HTTP side of the site: routes, views, bootstrap and logging.

pub mod routes;
pub mod server;
pub mod site;
pub mod terminal;
pub mod view;
