//! Bookshelf Server Library
//!
//! This module exports the web front-end components for testing and reuse.

pub mod handlers;
pub mod render;
pub mod routes;
pub mod state;
