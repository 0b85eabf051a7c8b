//! API client, configuration and data models

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
