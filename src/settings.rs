//! Console settings
//!
//! Resolved once at startup: environment variables (via dotenvy in the
//! binary) provide the base layer, CLI flags override.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BUBBLE_COUNT, DEFAULT_VIEWPORT_WIDTH};

/// Backend base URL when `POKEBASE_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "POKEBASE_API_URL";

/// Environment variable overriding the bubble count.
pub const BUBBLES_ENV: &str = "POKEBASE_BUBBLES";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Backend base URL, e.g. `http://localhost:8000/api/v1`
    pub api_base_url: String,
    /// Bubbles spawned into the field view
    pub bubble_count: usize,
    /// Reference viewport width in pixels, the unit basis for bubble radii
    pub viewport_width: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            bubble_count: DEFAULT_BUBBLE_COUNT,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }
}

impl Settings {
    /// Build settings from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                settings.api_base_url = url;
            }
        }
        if let Ok(count) = std::env::var(BUBBLES_ENV) {
            match count.parse::<usize>() {
                Ok(n) => settings.bubble_count = n,
                Err(_) => log::warn!("Ignoring unparsable {BUBBLES_ENV}={count}"),
            }
        }

        settings
    }
}
