//! Board configuration
//!
//! Zoom limits, wheel sensitivity and card defaults. Every value has a
//! default, so a host may pass a partial JSON object.

use serde::{Deserialize, Serialize};
use crate::error::ConfigError;
use crate::math::Size;

/// Smallest allowed viewport scale
pub const MIN_ZOOM: f32 = 0.25;

/// Largest allowed viewport scale
pub const MAX_ZOOM: f32 = 4.0;

/// Wheel delta that corresponds to a full 100% zoom step
pub const ZOOM_SENSITIVITY: f32 = 500.0;

/// Card footprint in world units, used for hit testing
pub const DEFAULT_CARD_SIZE: Size = Size::new(200.0, 48.0);

/// Text given to cards placed by clicking the background
pub const DEFAULT_CARD_TEXT: &str = "Text";

/// Board configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Lower scale bound
    pub min_zoom: f32,
    /// Upper scale bound
    pub max_zoom: f32,
    /// Divisor applied to wheel deltas
    pub zoom_sensitivity: f32,
    /// Card size in world units
    pub card_size: Size,
    /// Text for cards placed in create mode
    pub default_card_text: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_sensitivity: ZOOM_SENSITIVITY,
            card_size: DEFAULT_CARD_SIZE,
            default_card_text: DEFAULT_CARD_TEXT.to_string(),
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON configuration object
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the viewport relies on.
    ///
    /// A valid config guarantees every clamped scale is strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_zoom_bound("minZoom", self.min_zoom)?;
        check_zoom_bound("maxZoom", self.max_zoom)?;

        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::ZoomRangeInverted {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }

        if !self.zoom_sensitivity.is_finite() || self.zoom_sensitivity <= 0.0 {
            return Err(ConfigError::InvalidSensitivity(self.zoom_sensitivity));
        }

        let size = self.card_size;
        if size.is_empty() || !size.width.is_finite() || !size.height.is_finite() {
            return Err(ConfigError::InvalidCardSize {
                width: size.width,
                height: size.height,
            });
        }

        Ok(())
    }
}

fn check_zoom_bound(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidZoomBound { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.min_zoom - 0.25).abs() < 0.001);
        assert!((config.max_zoom - 4.0).abs() < 0.001);
        assert!((config.zoom_sensitivity - 500.0).abs() < 0.001);
        assert_eq!(config.default_card_text, "Text");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = BoardConfig::from_json(r#"{ "maxZoom": 8.0 }"#).unwrap();
        assert!((config.max_zoom - 8.0).abs() < 0.001);
        assert!((config.min_zoom - MIN_ZOOM).abs() < 0.001);
        assert_eq!(config.card_size, DEFAULT_CARD_SIZE);
    }

    #[test]
    fn test_rejects_non_positive_min_zoom() {
        let config = BoardConfig {
            min_zoom: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidZoomBound { name: "minZoom", value: 0.0 })
        );
    }

    #[test]
    fn test_rejects_inverted_range() {
        let config = BoardConfig {
            min_zoom: 2.0,
            max_zoom: 1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZoomRangeInverted { .. })));
    }

    #[test]
    fn test_rejects_bad_sensitivity_and_card_size() {
        let config = BoardConfig {
            zoom_sensitivity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSensitivity(_))));

        let config = BoardConfig {
            card_size: Size::new(0.0, 10.0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCardSize { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let err = BoardConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
