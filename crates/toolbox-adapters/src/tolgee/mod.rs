//! Tolgee REST API adapter.

mod client;
mod json;

pub use client::{API_KEY_HEADER, ApiKey, HttpTolgeeClient};
