use crate::RenderConfig;

use isoscape_map::Elevation;
use palette::{rgb::FromHexError, LinSrgb, Mix, Srgb};
use thiserror::Error;

/// An 8-bit sRGB color.
pub type Rgb = Srgb<u8>;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("{value:?} is not a hex color: {source}")]
    InvalidHex { value: String, source: FromHexError },
    #[error("the color ramp needs at least one color")]
    EmptyRamp,
}

/// Parses `#rrggbb` or `#rgb`. The `#` is optional.
pub fn parse_hex(value: &str) -> Result<Rgb, ColorError> {
    value.trim().parse().map_err(|source| ColorError::InvalidHex {
        value: value.to_string(),
        source,
    })
}

pub fn to_hex(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Moves `ratio` of the way from `color` toward `other`, in linear light. `ratio` is clamped to `[0, 1]`.
pub fn blend(color: Rgb, other: Rgb, ratio: f32) -> Rgb {
    if ratio <= 0.0 {
        return color;
    }
    if ratio >= 1.0 {
        return other;
    }
    let from: LinSrgb = color.into_format::<f32>().into_linear();
    let to: LinSrgb = other.into_format::<f32>().into_linear();
    Srgb::from_linear(from.mix(&to, ratio)).into_format()
}

/// Colors by elevation, plus the background that distant and boundary faces blend into.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    levels: Vec<Rgb>,
    background: Rgb,
}

impl Palette {
    pub fn new(levels: Vec<Rgb>, background: Rgb) -> Result<Self, ColorError> {
        if levels.is_empty() {
            return Err(ColorError::EmptyRamp);
        }
        Ok(Self { levels, background })
    }

    pub fn from_config(config: &RenderConfig) -> Result<Self, ColorError> {
        let levels = config
            .colors
            .iter()
            .map(|c| parse_hex(c))
            .collect::<Result<Vec<Rgb>, _>>()?;
        log::debug!("palette of {} levels over {}", levels.len(), config.background);
        Self::new(levels, parse_hex(&config.background)?)
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// The color of elevation `z + offset`. Fractional elevations blend the two nearest levels; elevations past either
    /// end of the ramp use the end color.
    pub fn color_at(&self, z: Elevation, offset: f32) -> Rgb {
        let last = self.levels.len() - 1;
        let position = (z as f32 + offset).clamp(0.0, last as f32);
        let lower = position.floor() as usize;
        let upper = (lower + 1).min(last);
        blend(self.levels[lower], self.levels[upper], position - lower as f32)
    }

    /// Blends `color` toward the background by `fade`.
    pub fn faded(&self, color: Rgb, fade: f32) -> Rgb {
        blend(color, self.background, fade)
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
