//! Bible CLI - client library for the API.Bible scripture service
//!
//! Lists the translations available for a language and prints the text
//! of a passage from a given translation.

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod extract;

#[cfg(test)]
mod test_server;

// Re-export key types for convenience
pub use self::core::{
    client::BibleClient,
    config::ApiConfig,
    models::{ContentType, PassageOptions, Translation, TranslationsResponse},
    errors::BibleError,
};

pub use extract::{collect_text, extract_text};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
