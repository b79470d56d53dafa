//! melo API service
//!
//! HTTP surface for the music-streaming demo: track and playlist endpoints
//! over the shared document store, plus seed and diagnostic routes.

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod serialize;
pub mod state;
pub mod validation;
