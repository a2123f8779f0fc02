//! Error types for the board
//!
//! Board operations themselves are total: stale card ids and missing
//! surfaces are silent no-ops. Errors only arise at the edges, when
//! configuration or JSON crosses into the engine.

/// Errors raised while validating or parsing a [`BoardConfig`](crate::BoardConfig).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A zoom bound is zero, negative or not finite.
    #[error("invalid {name}: {value} (must be finite and > 0)")]
    InvalidZoomBound { name: &'static str, value: f32 },

    /// The zoom range is empty.
    #[error("zoom range inverted: min {min} > max {max}")]
    ZoomRangeInverted { min: f32, max: f32 },

    /// Zoom sensitivity is zero, negative or not finite.
    #[error("invalid zoom sensitivity: {0} (must be finite and > 0)")]
    InvalidSensitivity(f32),

    /// Card hit-test size is degenerate.
    #[error("invalid card size: {width}x{height}")]
    InvalidCardSize { width: f32, height: f32 },

    /// Configuration JSON could not be decoded.
    #[error("config parse error: {0}")]
    Parse(String),
}

/// Errors surfaced by the board's outer API.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BoardError {
    /// Configuration was rejected.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A value could not be encoded for the host.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        BoardError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let e = ConfigError::ZoomRangeInverted { min: 4.0, max: 0.25 };
        assert_eq!(e.to_string(), "zoom range inverted: min 4 > max 0.25");

        let e = ConfigError::InvalidZoomBound { name: "minZoom", value: 0.0 };
        assert!(e.to_string().contains("minZoom"));
    }

    #[test]
    fn test_board_error_from_config() {
        let e: BoardError = ConfigError::InvalidSensitivity(-1.0).into();
        assert!(matches!(e, BoardError::Config(ConfigError::InvalidSensitivity(_))));
        assert!(e.to_string().starts_with("configuration error"));
    }
}
