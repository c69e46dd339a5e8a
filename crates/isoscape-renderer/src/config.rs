use crate::{base_scale, Camera};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Side of one tile, in pixels.
    pub tile_size: f32,
    /// Height of one elevation level as a fraction of a tile, before perspective correction.
    pub step_size: f32,
    pub camera: Camera,
    /// Hex color that faded and boundary faces blend into.
    pub background: String,
    /// Hex colors for each elevation level, lowest first.
    pub colors: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tile_size: 45.0,
            step_size: 0.25,
            camera: Camera::default(),
            background: "#00148c".into(),
            colors: [
                "#0c4278", "#008fb0", "#5ebeed", "#efef8f", "#b3e481", "#7ac76b", "#29a38f", "#ffffff", "#eeccff", "#ff99cc",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl RenderConfig {
    /// Height of one elevation level as a fraction of a tile, corrected for the configured camera tilt. Dragging the
    /// camera afterwards doesn't change it.
    pub fn z_step(&self) -> f32 {
        base_scale(self.camera.base_x) * self.step_size
    }
}
