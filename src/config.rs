use serde::{Deserialize, Serialize};
use yew::Callback;

use crate::error::ConfigError;

pub const DEFAULT_MIN_SCALE: f64 = 0.5;
pub const DEFAULT_MAX_SCALE: f64 = 5.0;
pub const DEFAULT_INITIAL_SCALE: f64 = 1.0;

/// Scale bounds and starting zoom. Field names follow the camelCase form used
/// in `data-pinch-zoom` attributes, e.g. `{"minScale": 1, "maxScale": 8}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ZoomConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    pub initial_scale: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            initial_scale: DEFAULT_INITIAL_SCALE,
        }
    }
}

impl ZoomConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: ZoomConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject bounds the clamp cannot work with. Inverted bounds are an error, not swapped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("minScale", self.min_scale), ("maxScale", self.max_scale)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidBound { name, value });
            }
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::InvertedBounds {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if !self.initial_scale.is_finite() {
            return Err(ConfigError::InvalidInitialScale(self.initial_scale));
        }
        Ok(())
    }

    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

// Change notifications, fired synchronously after each committed transform change.
#[derive(Clone, Default, PartialEq)]
pub struct ZoomCallbacks {
    pub on_zoom: Option<Callback<f64>>,
    pub on_pan: Option<Callback<(f64, f64)>>,
}

impl ZoomCallbacks {
    pub fn emit_zoom(&self, scale: f64) {
        if let Some(cb) = &self.on_zoom {
            cb.emit(scale);
        }
    }

    pub fn emit_pan(&self, x: f64, y: f64) {
        if let Some(cb) = &self.on_pan {
            cb.emit((x, y));
        }
    }
}

impl std::fmt::Debug for ZoomCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoomCallbacks")
            .field("on_zoom", &self.on_zoom.is_some())
            .field("on_pan", &self.on_pan.is_some())
            .finish()
    }
}
