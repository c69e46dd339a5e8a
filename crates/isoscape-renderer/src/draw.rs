use crate::{blend, face_style, FaceStyle, Palette, RenderConfig, Rgb};

use isoscape_core::{geometry::Face, glam::IVec2};
use isoscape_map::{Decoration, RampGeometry, Tile, Wall};

/// How far south-facing walls are shaded toward the background.
const SOUTH_SHADE: f32 = 0.2;
/// How far east-facing walls are shaded toward the background.
const EAST_SHADE: f32 = 0.3;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FaceKind {
    Top,
    Extra,
    SouthWall,
    EastWall,
    SouthEdge,
    EastEdge,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaceDraw {
    pub kind: FaceKind,
    pub style: FaceStyle,
    pub color: Rgb,
}

/// Everything needed to draw one tile: a positioner and its faces, back to front.
#[derive(Clone, Debug, PartialEq)]
pub struct TileDraw {
    pub position: IVec2,
    /// The positioner's `transform`, placing the tile at its column, row and elevation.
    pub translate3d: String,
    pub faces: Vec<FaceDraw>,
    pub decoration: Option<Decoration>,
}

pub fn draw_tile(tile: &Tile, geometry: &RampGeometry, palette: &Palette, config: &RenderConfig) -> TileDraw {
    let t = config.tile_size;
    let translate3d = format!(
        "translate3d({}px, {}px, {}px)",
        tile.position.x as f32 * t,
        tile.position.y as f32 * t,
        tile.z as f32 * config.z_step() * t
    );

    let surface_color = |face: &Face| palette.color_at(tile.z, face.level_offset);
    let wall_color = |wall: &Wall, shade: f32| {
        if wall.boundary {
            palette.background()
        } else {
            blend(surface_color(&wall.face), palette.background(), shade)
        }
    };

    let mut faces = Vec::with_capacity(6);
    let mut push = |kind, face: &Face, color: Rgb| {
        faces.push(FaceDraw {
            kind,
            style: face_style(face, t),
            color: palette.faded(color, tile.fade),
        })
    };

    if let Some(edge) = &geometry.south_edge {
        push(FaceKind::SouthEdge, &edge.face, wall_color(edge, SOUTH_SHADE));
    }
    if let Some(edge) = &geometry.east_edge {
        push(FaceKind::EastEdge, &edge.face, wall_color(edge, EAST_SHADE));
    }
    let top = &geometry.surface.top;
    push(FaceKind::Top, top, surface_color(top));
    if let Some(extra) = &geometry.surface.extra {
        push(FaceKind::Extra, extra, surface_color(extra));
    }
    if let Some(wall) = &geometry.south_wall {
        push(FaceKind::SouthWall, &wall.face, wall_color(wall, SOUTH_SHADE));
    }
    if let Some(wall) = &geometry.east_wall {
        push(FaceKind::EastWall, &wall.face, wall_color(wall, EAST_SHADE));
    }

    TileDraw {
        position: tile.position,
        translate3d,
        faces,
        decoration: tile.decoration,
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod test {
    use super::*;
    use crate::{to_hex, Camera};

    use isoscape_map::{derive_geometry, Neighborhood, Signature};

    fn tile(bits: u8, z: i32, deltas: [Option<i32>; 8]) -> Tile {
        Tile {
            position: IVec2::new(2, -1),
            z,
            signature: Signature::new(bits),
            deltas: Neighborhood::new(deltas),
            fade: 0.0,
            decoration: None,
        }
    }

    fn draw(tile: &Tile) -> TileDraw {
        let config = RenderConfig::default();
        let palette = Palette::from_config(&config).unwrap();
        let geometry = derive_geometry(config.tile_size, config.z_step(), tile);
        draw_tile(tile, &geometry, &palette, &config)
    }

    fn kinds(d: &TileDraw) -> Vec<FaceKind> {
        d.faces.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn flat_interior_tile() {
        let d = draw(&tile(0b0000, 0, [Some(0); 8]));
        assert_eq!(kinds(&d), [FaceKind::Top]);
        assert_eq!(to_hex(d.faces[0].color), "#0c4278");
        assert_eq!(d.faces[0].style.transform, "none");
        assert_eq!(d.translate3d, "translate3d(90px, -45px, 0px)");
    }

    #[test]
    fn positioner_uses_the_corrected_z_step() {
        // Looking straight down, one level is exactly `step_size` tiles.
        let config = RenderConfig {
            camera: Camera {
                base_x: 0.0,
                base_z: 45.0,
            },
            step_size: 0.5,
            tile_size: 10.0,
            ..Default::default()
        };
        let palette = Palette::from_config(&config).unwrap();
        let t = tile(0b0000, 3, [Some(0); 8]);
        let d = draw_tile(&t, &derive_geometry(10.0, config.z_step(), &t), &palette, &config);
        assert_eq!(d.translate3d, "translate3d(20px, -10px, 15px)");
    }

    #[test]
    fn sloped_tops_take_the_half_level_color() {
        let d = draw(&tile(0b0110, 1, [Some(0); 8]));
        let palette = Palette::from_config(&RenderConfig::default()).unwrap();
        let top = d.faces.iter().find(|f| f.kind == FaceKind::Top).unwrap();
        assert_eq!(top.color, palette.color_at(1, 0.5));
    }

    #[test]
    fn boundary_walls_are_background() {
        let d = draw(&tile(0b0000, 2, [Some(0), Some(0), Some(0), Some(0), None, None, Some(-3), Some(0)]));
        assert_eq!(kinds(&d), [FaceKind::Top, FaceKind::SouthWall, FaceKind::EastWall]);
        let palette = Palette::from_config(&RenderConfig::default()).unwrap();

        let south = &d.faces[1];
        assert_eq!(south.color, blend(palette.color_at(2, 0.0), palette.background(), SOUTH_SHADE));
        let east = &d.faces[2];
        assert_eq!(east.color, palette.background());
    }

    #[test]
    fn edges_are_drawn_first() {
        // Rising to the left and up; lower neighbors to the right and below.
        let d = draw(&tile(0b1100, 2, [Some(1), Some(1), Some(1), Some(0), Some(-1), Some(-1), Some(-1), Some(0)]));
        assert_eq!(kinds(&d)[0], FaceKind::SouthEdge);
        assert!(kinds(&d).contains(&FaceKind::Top));
        assert!(!kinds(&d).contains(&FaceKind::SouthWall));
    }

    #[test]
    fn fade_pulls_every_face_to_the_background() {
        let mut t = tile(0b0000, 4, [Some(0), Some(0), Some(0), Some(0), None, None, None, Some(0)]);
        t.fade = 1.0;
        let d = draw(&t);
        let background = Palette::from_config(&RenderConfig::default()).unwrap().background();
        assert!(d.faces.iter().all(|f| f.color == background));
    }
}
