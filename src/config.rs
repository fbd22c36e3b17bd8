//! App Configuration
//!
//! Optional settings embedded in the host page as
//! `<script id="far-away-config" type="application/json">`.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::{SortBy, MAX_QUANTITY, MIN_QUANTITY};

/// Element id of the embedded JSON block
pub const CONFIG_ELEMENT_ID: &str = "far-away-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Heading shown by the logo
    pub title: String,
    /// Largest quantity offered by the add form
    pub max_quantity: u32,
    pub default_sort: SortBy,
    pub log_level: String,
    /// Prompt shown before clearing the list
    pub clear_confirm_message: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "🌴 Far Away 💼".to_string(),
            max_quantity: MAX_QUANTITY,
            default_sort: SortBy::Input,
            log_level: "info".to_string(),
            clear_confirm_message: "Are you sure you want to delete all the items?".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = serde_json::from_str(json)?;
        config.max_quantity = config.max_quantity.clamp(MIN_QUANTITY, MAX_QUANTITY);
        Ok(config)
    }

    /// Read the embedded config block, falling back to defaults
    pub fn load() -> Self {
        let text = leptos::prelude::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        Self::from_embedded(text.as_deref())
    }

    /// Config from the embedded block text; absent or invalid gives defaults
    pub fn from_embedded(text: Option<&str>) -> Self {
        let Some(text) = text else {
            return Self::default();
        };

        match Self::from_json(text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring embedded config: {}", e);
                Self::default()
            }
        }
    }
}
