use crate::Config;

use isoscape_core::glam::IVec2;
use isoscape_map::{
    decorate, generate, resolve_with_stats, window, ElevationGrid, GeometryCache, GridError, ResolveStats, Terrain,
    TerrainUnits,
};
use isoscape_renderer::{draw_tile, Camera, ColorError, Palette, TileDraw};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LandscapeError {
    #[error("failed to build the elevation grid: {0}")]
    Grid(#[from] GridError),
    #[error("bad palette: {0}")]
    Palette(#[from] ColorError),
}

/// One step of the window center.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    pub fn offset(self) -> IVec2 {
        match self {
            Move::Up => IVec2::new(0, -1),
            Move::Down => IVec2::new(0, 1),
            Move::Left => IVec2::new(-1, 0),
            Move::Right => IVec2::new(1, 0),
        }
    }
}

/// A resolved, decorated terrain and a movable view of it.
pub struct Landscape {
    config: Config,
    terrain: Terrain,
    stats: ResolveStats,
    center: IVec2,
    camera: Camera,
    palette: Palette,
    cache: GeometryCache,
}

impl Landscape {
    /// Generates a heightmap from `config` and builds a landscape on it.
    pub fn new(config: Config) -> Result<Self, LandscapeError> {
        let grid = generate(&config.map.generator)?;
        Self::from_grid(&grid, config)
    }

    pub fn from_grid(grid: &ElevationGrid, config: Config) -> Result<Self, LandscapeError> {
        let palette = Palette::from_config(&config.render)?;
        let (mut terrain, stats) = resolve_with_stats(grid, &config.map.classifier);
        let decorated = decorate(&mut terrain, &config.map.decoration);
        log::info!(
            "built {}x{} landscape: {} raises, {} reclassified, {} decorations",
            grid.width(),
            grid.height(),
            stats.raises,
            stats.reclassified,
            decorated
        );

        Ok(Self {
            camera: config.render.camera,
            config,
            terrain,
            stats,
            center: IVec2::ZERO,
            palette,
            cache: GeometryCache::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn stats(&self) -> ResolveStats {
        self.stats
    }

    pub fn center(&self) -> TerrainUnits<IVec2> {
        TerrainUnits(self.center)
    }

    /// Moves the window center one cell. Returns `false` and stays put if that would leave the terrain.
    pub fn pan(&mut self, step: Move) -> bool {
        let next = self.center + step.offset();
        if !self.terrain.contains(next) {
            log::debug!("can't pan {:?} past {}", step, self.center);
            return false;
        }
        self.center = next;
        true
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Orbits the camera. Elevation spacing stays fixed by the configured camera.
    pub fn drag(&mut self, movement_x: f32, movement_y: f32) {
        self.camera.drag(movement_x, movement_y);
    }

    /// The `transform` of the element holding every tile.
    pub fn scene_transform(&self) -> String {
        self.camera.scene_transform()
    }

    /// The tiles around the center, keyed relative to it.
    pub fn visible(&self) -> Terrain {
        window(&self.terrain, self.center(), &self.config.map.window)
    }

    /// Draw commands for every visible tile, back to front.
    pub fn draw_list(&mut self) -> Vec<TileDraw> {
        let render = &self.config.render;
        let z_step = render.z_step();
        let visible = self.visible();
        let draws: Vec<TileDraw> = visible
            .iter_row_major()
            .map(|tile| {
                let geometry = self.cache.geometry(render.tile_size, z_step, tile);
                draw_tile(tile, &geometry, &self.palette, render)
            })
            .collect();
        log::debug!(
            "{} tiles drawn, {} distinct surfaces cached",
            draws.len(),
            self.cache.len()
        );
        draws
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
