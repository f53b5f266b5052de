//! Renderer configuration.
//!
//! Every id and class token the renderer writes comes from here, so a
//! stylesheet or a different copy of the background map can be matched
//! without code changes. All fields default, so a JSON file only has to name
//! the values it overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ids, class tokens and label placement used by the renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderConfig {
    /// Id of the `<g>` that holds all generated content.
    pub overlay_id: String,
    /// Id given to a standalone map root.
    pub map_root_id: String,
    pub time_label_x: f64,
    pub time_label_y: f64,
    pub time_label_font_size: u32,
    /// Symbol referenced by supply-center markers.
    pub supply_center_symbol: String,
    /// Class of the wide primitive painted under every order line.
    pub border_class: String,
    /// Appended to the country to form the attack line class.
    pub attack_class_suffix: String,
    /// Appended to the country to form the support line class.
    pub support_class_suffix: String,
    /// Marker id for attack arrowheads.
    pub attack_marker: String,
    /// Marker id for support arrowheads.
    pub support_marker: String,
    /// Draw only attack orders from resolution results.
    pub attacks_only: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            overlay_id: "insertedByJS".to_string(),
            map_root_id: "mapSvgTag".to_string(),
            time_label_x: 5.0,
            time_label_y: 20.0,
            time_label_font_size: 20,
            supply_center_symbol: "sc".to_string(),
            border_class: "border".to_string(),
            attack_class_suffix: "-attack".to_string(),
            support_class_suffix: "-order support".to_string(),
            attack_marker: "arrow".to_string(),
            support_marker: "support-arrow".to_string(),
            attacks_only: false,
        }
    }
}

impl RenderConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&data)
    }

    /// Class of an attack line drawn for `country`.
    pub fn attack_class(&self, country: &str) -> String {
        format!("{}{}", country, self.attack_class_suffix)
    }

    /// Class of a support line drawn for `country`.
    pub fn support_class(&self, country: &str) -> String {
        format!("{}{}", country, self.support_class_suffix)
    }

    /// Inline style for the time label.
    pub fn time_label_style(&self) -> String {
        format!("font-size: {}px", self.time_label_font_size)
    }
}

/// `url(#id)` reference for a marker or symbol.
pub fn url_ref(id: &str) -> String {
    format!("url(#{})", id)
}

/// `#id` reference for `xlink:href`.
pub fn href(id: &str) -> String {
    format!("#{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stylesheet_contract() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.overlay_id, "insertedByJS");
        assert_eq!(cfg.attack_class("france"), "france-attack");
        assert_eq!(cfg.support_class("italy"), "italy-order support");
        assert_eq!(cfg.time_label_style(), "font-size: 20px");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = RenderConfig::from_json(r#"{"overlay-id": "orders", "attacks-only": true}"#)
            .unwrap();
        assert_eq!(cfg.overlay_id, "orders");
        assert!(cfg.attacks_only);
        assert_eq!(cfg.supply_center_symbol, "sc");
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(matches!(
            RenderConfig::from_json("{"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn references() {
        assert_eq!(url_ref("arrow"), "url(#arrow)");
        assert_eq!(href("sc"), "#sc");
    }
}
