use clap::Parser;
use isoscape::{
    isoscape_map::{Terrain, Vegetation},
    isoscape_renderer::{to_hex, TileDraw},
    Config, Landscape,
};
use std::{fmt::Write, path::PathBuf};

/// Prints the visible part of a generated landscape.
#[derive(Parser)]
#[command(name = "preview")]
struct Cli {
    /// RON config file. Defaults are used when omitted.
    config: Option<PathBuf>,
    /// Print an HTML page of CSS 3D faces instead of an ASCII map.
    #[arg(long)]
    html: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::read_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    let mut landscape = match Landscape::new(config) {
        Ok(landscape) => landscape,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    if cli.html {
        let draws = landscape.draw_list();
        print!("{}", html_page(&landscape, &draws));
    } else {
        print!("{}", ascii_map(&landscape.visible()));
    }
}

/// One hex digit per tile for its signature, or a letter for its vegetation.
fn ascii_map(terrain: &Terrain) -> String {
    let (min, max) = match terrain.bounds() {
        Some(bounds) => bounds,
        None => return String::new(),
    };
    let mut out = String::new();
    for y in min.y..=max.y {
        for x in min.x..=max.x {
            let c = match terrain.get([x, y].into()) {
                None => ' ',
                Some(tile) => match tile.decoration.map(|d| d.kind) {
                    Some(Vegetation::Tree) => 'T',
                    Some(Vegetation::Bush) => 'b',
                    Some(Vegetation::Weed) => 'w',
                    None => std::char::from_digit(u32::from(tile.signature.bits()), 16).unwrap_or('?'),
                },
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}

fn html_page(landscape: &Landscape, draws: &[TileDraw]) -> String {
    let render = &landscape.config().render;
    let size = render.tile_size;
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>\n<html>\n<body style=\"margin: 0; background: {};\">", render.background);
    let _ = writeln!(
        out,
        "<div style=\"position: absolute; left: 50%; top: 50%; transform-style: preserve-3d; transform: {};\">",
        landscape.scene_transform()
    );
    for draw in draws {
        let _ = writeln!(
            out,
            "  <div style=\"position: absolute; transform-style: preserve-3d; transform: {};\">",
            draw.translate3d
        );
        for face in &draw.faces {
            let _ = writeln!(
                out,
                "    <div style=\"position: absolute; width: {}px; height: {}px; background: {}; {}\"></div>",
                size,
                size,
                to_hex(face.color),
                face.style.declarations()
            );
        }
        let _ = writeln!(out, "  </div>");
    }
    let _ = writeln!(out, "</div>\n</body>\n</html>");
    out
}
