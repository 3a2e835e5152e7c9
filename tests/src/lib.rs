//! Integration tests across the content, listing and HTTP layers.

mod listing;
mod web;
