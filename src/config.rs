//! Editor configuration.
//!
//! `EditorConfig` holds the tunables the engine consults at runtime; hosts
//! construct one directly, or overlay a partial `ConfigOverlay` (typically
//! parsed from JSON) onto the defaults. Out-of-range values are normalized
//! rather than rejected; only malformed JSON is an error.

use crate::constants::{
    GRID_SIZE, MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT, ZOOM_STEP,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse editor config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Runtime tunables for an editor instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Lower zoom bound
    pub zoom_min: f32,
    /// Upper zoom bound
    pub zoom_max: f32,
    /// Step applied by the zoom-in/zoom-out operations
    pub zoom_step: f32,
    /// Multiplicative factor for one wheel notch toward the cursor
    pub wheel_zoom_in: f32,
    /// Multiplicative factor for one wheel notch away from the cursor
    pub wheel_zoom_out: f32,
    /// Grid spacing in world units
    pub grid_size: f32,
    /// Whether the renderer emits grid lines
    pub show_grid: bool,
    /// Whether a connect gesture may terminate on its own source node
    pub allow_self_loops: bool,
    /// Screen-space distance a pointer must travel before a press on a node
    /// counts as a drag rather than a click
    pub drag_threshold: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            zoom_min: MIN_ZOOM,
            zoom_max: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
            wheel_zoom_in: WHEEL_ZOOM_IN,
            wheel_zoom_out: WHEEL_ZOOM_OUT,
            grid_size: GRID_SIZE,
            show_grid: true,
            allow_self_loops: true,
            drag_threshold: 0.0,
        }
    }
}

impl EditorConfig {
    /// Parse a JSON overlay and apply it onto the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let overlay: ConfigOverlay = serde_json::from_str(json)?;
        let mut config = Self::default();
        config.apply(&overlay);
        Ok(config)
    }

    /// Merge an overlay's set fields onto this config, then normalize.
    pub fn apply(&mut self, overlay: &ConfigOverlay) {
        if let Some(v) = overlay.zoom_min {
            self.zoom_min = v;
        }
        if let Some(v) = overlay.zoom_max {
            self.zoom_max = v;
        }
        if let Some(v) = overlay.zoom_step {
            self.zoom_step = v;
        }
        if let Some(v) = overlay.wheel_zoom_in {
            self.wheel_zoom_in = v;
        }
        if let Some(v) = overlay.wheel_zoom_out {
            self.wheel_zoom_out = v;
        }
        if let Some(v) = overlay.grid_size {
            self.grid_size = v;
        }
        if let Some(v) = overlay.show_grid {
            self.show_grid = v;
        }
        if let Some(v) = overlay.allow_self_loops {
            self.allow_self_loops = v;
        }
        if let Some(v) = overlay.drag_threshold {
            self.drag_threshold = v;
        }
        self.normalize();
    }

    /// Clamp/repair values instead of rejecting them: non-positive bounds
    /// fall back to defaults, inverted bounds are swapped.
    fn normalize(&mut self) {
        if !self.zoom_min.is_finite() || self.zoom_min <= 0.0 {
            warn!(zoom_min = self.zoom_min, "invalid zoom_min, using default");
            self.zoom_min = MIN_ZOOM;
        }
        if !self.zoom_max.is_finite() || self.zoom_max <= 0.0 {
            warn!(zoom_max = self.zoom_max, "invalid zoom_max, using default");
            self.zoom_max = MAX_ZOOM;
        }
        if self.zoom_min > self.zoom_max {
            warn!(
                zoom_min = self.zoom_min,
                zoom_max = self.zoom_max,
                "zoom bounds out of order, swapping"
            );
            std::mem::swap(&mut self.zoom_min, &mut self.zoom_max);
        }
        if !self.zoom_step.is_finite() || self.zoom_step <= 0.0 {
            self.zoom_step = ZOOM_STEP;
        }
        if !self.grid_size.is_finite() || self.grid_size <= 0.0 {
            self.grid_size = GRID_SIZE;
        }
        if !self.drag_threshold.is_finite() || self.drag_threshold < 0.0 {
            self.drag_threshold = 0.0;
        }
    }

}

/// Partial configuration; unset fields keep their current values.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConfigOverlay {
    pub zoom_min: Option<f32>,
    pub zoom_max: Option<f32>,
    pub zoom_step: Option<f32>,
    pub wheel_zoom_in: Option<f32>,
    pub wheel_zoom_out: Option<f32>,
    pub grid_size: Option<f32>,
    pub show_grid: Option<bool>,
    pub allow_self_loops: Option<bool>,
    pub drag_threshold: Option<f32>,
}
