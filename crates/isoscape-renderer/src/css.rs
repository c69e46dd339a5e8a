//! CSS 3D transforms for [`Face`]s.
//!
//! Every face is drawn as a `tile_size` square positioned at its tile. The generated `transform` lists the face's
//! lift, yaw, tilt, scale and shift in that order, and pivots about `transform-origin`. Identity parts are left out.

use isoscape_core::geometry::{Axis, ClipPolygon, Face, FaceTransform};

#[derive(Clone, Debug, PartialEq)]
pub struct FaceStyle {
    /// The `transform` property, or `"none"`.
    pub transform: String,
    pub transform_origin: String,
    /// The `clip-path` property, if the face is masked.
    pub clip_path: Option<String>,
}

impl FaceStyle {
    /// The style as inline CSS declarations.
    pub fn declarations(&self) -> String {
        let mut css = format!(
            "transform: {}; transform-origin: {};",
            self.transform, self.transform_origin
        );
        if let Some(clip) = &self.clip_path {
            css.push_str(&format!(" clip-path: {};", clip));
        }
        css
    }
}

pub fn face_style(face: &Face, tile_size: f32) -> FaceStyle {
    let origin = face.anchor.point();
    FaceStyle {
        transform: transform(&face.transform, tile_size),
        transform_origin: format!("{} {}", percent(origin.x), percent(origin.y)),
        clip_path: clip_path(&face.clip),
    }
}

fn transform(t: &FaceTransform, tile_size: f32) -> String {
    let mut parts = Vec::new();
    if t.lift != 0.0 {
        parts.push(format!("translateZ({}px)", t.lift));
    }
    if t.yaw != 0.0 {
        parts.push(format!("rotateZ({}deg)", t.yaw));
    }
    if let Some(tilt) = t.tilt {
        let axis = match tilt.axis {
            Axis::X => "X",
            Axis::Y => "Y",
        };
        parts.push(format!("rotate{}({}deg)", axis, tilt.degrees));
    }
    if t.scale.x != 1.0 {
        parts.push(format!("scaleX({})", t.scale.x));
    }
    if t.scale.y != 1.0 {
        parts.push(format!("scaleY({})", t.scale.y));
    }
    if t.shift.x != 0.0 || t.shift.y != 0.0 {
        parts.push(format!(
            "translate({}px, {}px)",
            t.shift.x * tile_size,
            t.shift.y * tile_size
        ));
    }

    if parts.is_empty() {
        "none".into()
    } else {
        parts.join(" ")
    }
}

fn clip_path(clip: &ClipPolygon) -> Option<String> {
    if clip.is_full() {
        return None;
    }
    let points: Vec<String> = clip
        .points()
        .iter()
        .map(|p| format!("{} {}", percent(p.x), percent(p.y)))
        .collect();
    Some(format!("polygon({})", points.join(", ")))
}

fn percent(fraction: f32) -> String {
    format!("{}%", fraction * 100.0)
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

    use isoscape_core::geometry::{Anchor, Tilt};

    #[test]
    fn flat_face_has_no_transform_or_clip() {
        let style = face_style(&Face::flat(), 45.0);
        assert_eq!(style.transform, "none");
        assert_eq!(style.transform_origin, "50% 50%");
        assert_eq!(style.clip_path, None);
        assert_eq!(style.declarations(), "transform: none; transform-origin: 50% 50%;");
    }

    #[test]
    fn transform_parts_keep_their_order() {
        let face = Face {
            transform: FaceTransform::IDENTITY
                .lifted(11.25)
                .yawed(45.0)
                .tilted(Tilt::about_y(-30.0))
                .scaled(2.0, 1.5)
                .shifted(-1.0, 0.0),
            clip: ClipPolygon::new(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]),
            anchor: Anchor::BottomLeft,
            level_offset: 0.5,
        };
        let style = face_style(&face, 40.0);
        assert_eq!(
            style.transform,
            "translateZ(11.25px) rotateZ(45deg) rotateY(-30deg) scaleX(2) scaleY(1.5) translate(-40px, 0px)"
        );
        assert_eq!(style.transform_origin, "0% 100%");
        assert_eq!(style.clip_path.as_deref(), Some("polygon(0% 0%, 100% 0%, 0% 100%)"));
        assert!(style.declarations().ends_with("clip-path: polygon(0% 0%, 100% 0%, 0% 100%);"));
    }

    #[test]
    fn walls_rotate_about_x() {
        let face = Face {
            transform: FaceTransform::IDENTITY.tilted(Tilt::about_x(90.0)).scaled(1.0, 0.5),
            anchor: Anchor::Bottom,
            ..Default::default()
        };
        let style = face_style(&face, 45.0);
        assert_eq!(style.transform, "rotateX(90deg) scaleY(0.5)");
        assert_eq!(style.transform_origin, "50% 100%");
    }
}
