use std::fmt;

/// One of the four tile edges that can carry a rising transition.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Edge {
    Left,
    Up,
    Right,
    Down,
}

impl Edge {
    /// In signature bit order: left is the most significant bit.
    pub const ALL: [Self; 4] = [Self::Left, Self::Up, Self::Right, Self::Down];

    #[inline]
    pub const fn bit(self) -> u8 {
        match self {
            Edge::Left => 0b1000,
            Edge::Up => 0b0100,
            Edge::Right => 0b0010,
            Edge::Down => 0b0001,
        }
    }
}

/// Two adjacent rising edges; the tile is one plane tilted about a full side.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EdgePair {
    LeftUp,
    UpRight,
    RightDown,
    DownLeft,
}

/// Two opposite rising edges; the tile splits into two half ramps.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SplitAxis {
    /// `0b1010`
    LeftRight,
    /// `0b0101`
    UpDown,
}

/// The geometric class of a tile, determined entirely by its [`Signature`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RampClass {
    Flat,
    OneUp(Edge),
    TwoUp(EdgePair),
    /// `low` is the only edge that does not rise.
    ThreeUp { low: Edge },
    Split(SplitAxis),
    /// Never present in a resolved terrain; such a tile is raised one level and reclassified.
    AllRising,
}

/// A 4-bit description of which tile edges need a rising transition toward a higher neighbor.
///
/// Bit order is `[left, up, right, down]`, most significant first.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Signature(u8);

impl Signature {
    pub const FLAT: Self = Self(0b0000);
    pub const ALL_RISING: Self = Self(0b1111);

    /// Panics if `bits` doesn't fit in 4 bits.
    pub const fn new(bits: u8) -> Self {
        assert!(bits <= 0b1111, "signatures only have 4 bits");
        Self(bits)
    }

    /// `edges` in [`Edge::ALL`] order.
    pub fn from_edges(edges: [bool; 4]) -> Self {
        let mut bits = 0;
        for (edge, rising) in Edge::ALL.into_iter().zip(edges) {
            if rising {
                bits |= edge.bit();
            }
        }
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn has(self, edge: Edge) -> bool {
        self.0 & edge.bit() != 0
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn class(self) -> RampClass {
        match self.0 {
            0b0000 => RampClass::Flat,
            0b1000 => RampClass::OneUp(Edge::Left),
            0b0100 => RampClass::OneUp(Edge::Up),
            0b0010 => RampClass::OneUp(Edge::Right),
            0b0001 => RampClass::OneUp(Edge::Down),
            0b1100 => RampClass::TwoUp(EdgePair::LeftUp),
            0b0110 => RampClass::TwoUp(EdgePair::UpRight),
            0b0011 => RampClass::TwoUp(EdgePair::RightDown),
            0b1001 => RampClass::TwoUp(EdgePair::DownLeft),
            0b0111 => RampClass::ThreeUp { low: Edge::Left },
            0b1011 => RampClass::ThreeUp { low: Edge::Up },
            0b1101 => RampClass::ThreeUp { low: Edge::Right },
            0b1110 => RampClass::ThreeUp { low: Edge::Down },
            0b1010 => RampClass::Split(SplitAxis::LeftRight),
            0b0101 => RampClass::Split(SplitAxis::UpDown),
            _ => RampClass::AllRising,
        }
    }

    pub fn is_flat(self) -> bool {
        self == Self::FLAT
    }

    pub fn is_one_up(self) -> bool {
        matches!(self.class(), RampClass::OneUp(_))
    }

    pub fn is_two_up(self) -> bool {
        matches!(self.class(), RampClass::TwoUp(_))
    }

    pub fn is_three_up(self) -> bool {
        matches!(self.class(), RampClass::ThreeUp { .. })
    }

    pub fn is_split(self) -> bool {
        matches!(self.class(), RampClass::Split(_))
    }

    pub fn is_all_rising(self) -> bool {
        self == Self::ALL_RISING
    }

    /// Every valid signature, in increasing numeric order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=0b1111).map(Self)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({:#06b})", self.0)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
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

    #[test]
    fn edges_pack_left_first() {
        assert_eq!(Signature::from_edges([true, false, false, false]).bits(), 0b1000);
        assert_eq!(Signature::from_edges([false, false, false, true]).bits(), 0b0001);
        assert_eq!(Signature::from_edges([true; 4]), Signature::ALL_RISING);
        assert!(Signature::new(0b0110).has(Edge::Up));
        assert!(!Signature::new(0b0110).has(Edge::Left));
    }

    #[test]
    fn classes_partition_all_signatures() {
        let mut counts = [0; 6];
        for s in Signature::all() {
            let i = match s.class() {
                RampClass::Flat => 0,
                RampClass::OneUp(_) => 1,
                RampClass::TwoUp(_) => 2,
                RampClass::ThreeUp { .. } => 3,
                RampClass::Split(_) => 4,
                RampClass::AllRising => 5,
            };
            counts[i] += 1;

            // The predicates agree with the class.
            let predicates = [
                s.is_flat(),
                s.is_one_up(),
                s.is_two_up(),
                s.is_three_up(),
                s.is_split(),
                s.is_all_rising(),
            ];
            assert_eq!(predicates.iter().filter(|p| **p).count(), 1, "{:?}", s);
            assert!(predicates[i], "{:?}", s);
        }
        assert_eq!(counts, [1, 4, 4, 4, 2, 1]);
    }

    #[test]
    fn three_up_names_the_low_edge() {
        for low in Edge::ALL {
            let s = Signature::new(0b1111 & !low.bit());
            assert_eq!(s.class(), RampClass::ThreeUp { low });
            assert_eq!(s.count(), 3);
        }
    }

    #[test]
    fn display_is_binary() {
        assert_eq!(Signature::new(0b0101).to_string(), "0101");
        assert_eq!(format!("{:?}", Signature::new(0b0011)), "Signature(0b0011)");
    }
}
