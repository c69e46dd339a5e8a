//! Turns windowed terrain into styled, colored faces for a CSS 3D scene.

mod colors;
mod config;
mod css;
mod draw;
mod perspective;

pub use colors::*;
pub use config::*;
pub use css::*;
pub use draw::*;
pub use perspective::*;
