use crate::{
    coordinates::{neighbors, Direction, Neighborhood},
    grid::Elevation,
    sampling::NeighborSet,
    signature::Signature,
};

use isoscape_core::glam::IVec2;
use serde::{Deserialize, Serialize};

/// Signed elevation differences `neighbor - z` for each neighbor. Absent neighbors stay absent.
pub type NeighborDeltas = Neighborhood<Option<i32>>;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// The largest step up that is still bridged by a ramp. Larger steps are cliffs and don't affect the signature.
    pub flat_threshold: i32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { flat_threshold: 1 }
    }
}

/// The result of classifying one cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Classification {
    /// The cell's elevation after any raises.
    pub z: Elevation,
    /// Never [`Signature::ALL_RISING`].
    pub signature: Signature,
    /// Deltas relative to the final `z`.
    pub deltas: NeighborDeltas,
    /// How many levels the cell was raised to get rid of an all-rising signature.
    pub raises: u32,
}

impl Classification {
    /// If the cell was raised, its neighbors may see it differently and must be reclassified.
    pub fn needs_recheck(&self) -> bool {
        self.raises > 0
    }

    /// The cells at risk of being stale after classifying the cell at `p`.
    pub fn invalidated(&self, p: IVec2) -> impl Iterator<Item = IVec2> {
        let count = if self.needs_recheck() { 8 } else { 0 };
        neighbors(p).take(count)
    }
}

/// Computes the signature of a cell at elevation `z` surrounded by `neighbors`.
///
/// If all four edges rise, the cell is really a one-cell pit. It is raised by one level and classified again against the
/// same neighbors until the signature is something else. This always terminates: once `z` reaches the highest present
/// neighbor, no neighbor rises and the signature is flat.
pub fn classify(z: Elevation, neighbors: &NeighborSet, config: &ClassifierConfig) -> Classification {
    let mut z = z;
    let mut raises = 0;
    loop {
        let (signature, deltas) = edge_signature(z, neighbors, config.flat_threshold);
        if !signature.is_all_rising() {
            return Classification {
                z,
                signature,
                deltas,
                raises,
            };
        }
        z += 1;
        raises += 1;
    }
}

fn edge_signature(
    z: Elevation,
    neighbors: &NeighborSet,
    flat_threshold: i32,
) -> (Signature, NeighborDeltas) {
    use Direction::*;

    let deltas = neighbors.map(|n| n.map(|n| n - z));
    // "Flat enough" includes neighbors at the same level. Absent neighbors are neither flat nor rising.
    let flat = deltas.map(|d| matches!(d, Some(d) if (0..=flat_threshold).contains(&d)));
    let up = deltas.map(|d| matches!(d, Some(d) if d > 0 && d <= flat_threshold));

    // Each edge pairs two cardinal neighbors with the corner neighbor between them.
    let edge_neighbors = [(L, D, LD), (L, U, LU), (U, R, RU), (R, D, RD)];
    let mut edges = [false; 4];
    for (rising, (a, b, corner)) in edges.iter_mut().zip(edge_neighbors) {
        *rising = up[a] || up[b];
        // A higher corner still shows as a step when the cardinals beside it are level with this cell.
        if !*rising && (flat[a] || flat[b]) {
            *rising = up[corner];
        }
    }

    (Signature::from_edges(edges), deltas)
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

    fn neighbors_from(values: [Option<Elevation>; 8]) -> NeighborSet {
        Neighborhood::new(values)
    }

    fn uniform(z: Elevation) -> NeighborSet {
        neighbors_from([Some(z); 8])
    }

    #[test]
    fn level_neighbors_are_flat() {
        let c = classify(4, &uniform(4), &ClassifierConfig::default());
        assert_eq!(c.signature, Signature::FLAT);
        assert_eq!(c.deltas.values, [Some(0); 8]);
        assert!(!c.needs_recheck());
        assert_eq!(c.invalidated(IVec2::ZERO).count(), 0);
    }

    #[test]
    fn pit_is_raised_to_flat() {
        let c = classify(0, &uniform(1), &ClassifierConfig::default());
        assert_eq!(c.z, 1);
        assert_eq!(c.raises, 1);
        assert_eq!(c.signature, Signature::FLAT);
        assert_eq!(c.deltas.values, [Some(0); 8]);

        let invalidated: Vec<_> = c.invalidated(IVec2::new(5, 5)).collect();
        assert_eq!(invalidated.len(), 8);
        assert!(invalidated.contains(&IVec2::new(4, 4)));
        assert!(invalidated.contains(&IVec2::new(6, 6)));
    }

    #[test]
    fn single_rising_cardinal_sets_two_edges() {
        use Direction::*;

        // Only the left neighbor is one level up; it borders both the "left" and "up" edges.
        let mut n = uniform(0);
        n[L] = Some(1);
        let c = classify(0, &n, &ClassifierConfig::default());
        assert_eq!(c.signature, Signature::new(0b1100));
        assert_eq!(c.deltas[L], Some(1));
    }

    #[test]
    fn rising_corner_alone_sets_one_edge() {
        use Direction::*;

        let mut n = uniform(2);
        n[RD] = Some(3);
        let c = classify(2, &n, &ClassifierConfig::default());
        assert_eq!(c.signature, Signature::new(0b0001));
    }

    #[test]
    fn rising_corner_between_lower_cardinals_is_ignored() {
        use Direction::*;

        // Both cardinals next to the corner are lower, so the corner doesn't produce a step on this tile.
        let mut n = uniform(2);
        n[R] = Some(1);
        n[D] = Some(1);
        n[RD] = Some(3);
        let c = classify(2, &n, &ClassifierConfig::default());
        assert_eq!(c.signature, Signature::FLAT);
        assert_eq!(c.deltas[R], Some(-1));
    }

    #[test]
    fn cliffs_above_the_threshold_do_not_ramp() {
        use Direction::*;

        let mut n = uniform(0);
        n[U] = Some(2);
        let c = classify(0, &n, &ClassifierConfig::default());
        assert_eq!(c.signature, Signature::FLAT);
        assert_eq!(c.deltas[U], Some(2));

        let relaxed = ClassifierConfig { flat_threshold: 2 };
        let c = classify(0, &n, &relaxed);
        assert_eq!(c.signature, Signature::new(0b0110));
    }

    #[test]
    fn absent_neighbors_never_rise() {
        let c = classify(0, &neighbors_from([None; 8]), &ClassifierConfig::default());
        assert_eq!(c.signature, Signature::FLAT);
        assert_eq!(c.deltas.values, [None; 8]);
    }

    #[test]
    fn pit_below_cliffs_is_left_alone() {
        use Direction::*;

        let mut n = uniform(2);
        n[LU] = Some(5);

        // Two levels down every neighbor is a cliff, so nothing rises and nothing is raised.
        let c = classify(0, &n, &ClassifierConfig::default());
        assert_eq!(c.raises, 0);
        assert_eq!(c.signature, Signature::FLAT);

        // One level down it is a pit. The corner stays a cliff after the raise.
        let c = classify(1, &n, &ClassifierConfig::default());
        assert_eq!(c.z, 2);
        assert_eq!(c.deltas[LU], Some(3));
        assert_eq!(c.raises, 1);
        assert!(!c.signature.is_all_rising());
    }
}
