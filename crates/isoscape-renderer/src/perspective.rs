use serde::{Deserialize, Serialize};

/// Default tilt of the scene away from the viewer: one radian, in degrees.
pub const BASE_X: f32 = 57.2958;
/// Default turn of the scene about the vertical axis, in degrees.
pub const BASE_Z: f32 = 45.0;

/// Degrees of camera rotation per unit of pointer movement.
const DRAG_SPEED: f32 = 0.25;

/// Vertical stretch that compensates for the foreshortening of a scene tilted by `base_x` degrees.
pub fn base_scale(base_x: f32) -> f32 {
    1.0 / (base_x + 90.0).to_radians().sin()
}

/// An orbiting view of the scene.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Camera {
    /// Tilt in `[0, 90]` degrees; 0 looks straight down.
    pub base_x: f32,
    /// Turn in `[0, 90]` degrees.
    pub base_z: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            base_x: BASE_X,
            base_z: BASE_Z,
        }
    }
}

impl Camera {
    /// Orbits the camera by a pointer movement. Vertical movement tilts, horizontal movement turns.
    pub fn drag(&mut self, movement_x: f32, movement_y: f32) {
        self.base_x = (self.base_x - movement_y * DRAG_SPEED).clamp(0.0, 90.0);
        self.base_z = (self.base_z - movement_x * DRAG_SPEED).clamp(0.0, 90.0);
    }

    /// The CSS transform of the element that holds every tile.
    pub fn scene_transform(&self) -> String {
        format!("rotateX({}deg) rotateZ({}deg)", self.base_x, self.base_z)
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
