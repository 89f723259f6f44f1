//! Lookup tables classifying wall endpoints against the three boundaries of a beam.
//!
//! A normalized beam (source behind its window `p1→p2`) is bounded by three lines:
//!
//! ```text
//!   FAR  \  inside  /  NEAR
//!         p2------p1        <- WINDOW line
//!           \    /
//!            \  /
//!          source
//! ```
//!
//! - the *far* edge through the source and window `p2`,
//! - the *window* line itself,
//! - the *near* edge through the source and window `p1`.
//!
//! Each wall endpoint gets one bit per boundary it lies outside of, packed as
//! `far << 2 | window << 1 | near`. A point with index `0` is inside the beam.

/// Outside the far edge (through window `p2`).
pub const FAR: u8 = 0b100;
/// Behind (or on) the window line, on the source's side.
pub const WINDOW: u8 = 0b010;
/// Outside the near edge (through window `p1`).
pub const NEAR: u8 = 0b001;

/// Which beam boundaries a point lies outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EndpointClass {
    pub far: bool,
    pub window: bool,
    pub near: bool,
}

impl EndpointClass {
    pub const fn from_index(index: u8) -> Self {
        Self {
            far: index & FAR != 0,
            window: index & WINDOW != 0,
            near: index & NEAR != 0,
        }
    }

    pub const fn index(self) -> u8 {
        (self.far as u8) << 2 | (self.window as u8) << 1 | self.near as u8
    }

    pub const fn is_inside(self) -> bool {
        self.index() == 0
    }

    /// True if both points are outside the same boundary, so the segment between them
    /// cannot enter the beam.
    pub const fn shares_outside(self, other: Self) -> bool {
        self.index() & other.index() != 0
    }
}

/// Candidate boundaries crossed between an inside endpoint and an outside endpoint of
/// class `index`, as a `FAR | WINDOW | NEAR` mask.
///
/// Candidates are tried in `FAR`, `WINDOW`, `NEAR` order. An outside point beyond both
/// edges but in front of the window (`FAR | NEAR`) can only be reached across the far edge.
pub const SINGLE_CROSSING: [u8; 8] = [
    0,                     // 000: inside, no crossing
    NEAR,                  // 001
    WINDOW,                // 010
    WINDOW | NEAR,         // 011
    FAR,                   // 100
    FAR,                   // 101
    FAR | WINDOW,          // 110
    FAR | WINDOW | NEAR,   // 111
];

/// How a wall relates to a beam, given the classes of both of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairCrossing {
    /// Both endpoints lie outside one shared boundary; no overlap possible.
    Disjoint,
    /// Both endpoints inside: the whole wall is visible.
    Inside,
    /// Exactly one endpoint inside: clip at one boundary from [`SINGLE_CROSSING`].
    OneInside,
    /// Enters across the far edge, leaves across the window line.
    FarWindow,
    /// Enters across the window line, leaves across the near edge.
    WindowNear,
    /// Passes in front of the window, crossing both edges.
    FarNear,
    /// No pair of boundaries the segment could cross.
    Miss,
}

/// Classify an endpoint pair. Symmetric in its arguments.
pub const fn pair_crossing(a: EndpointClass, b: EndpointClass) -> PairCrossing {
    if a.shares_outside(b) {
        PairCrossing::Disjoint
    } else if a.is_inside() && b.is_inside() {
        PairCrossing::Inside
    } else if a.is_inside() || b.is_inside() {
        PairCrossing::OneInside
    } else if (a.far && b.window) || (b.far && a.window) {
        PairCrossing::FarWindow
    } else if (a.window && b.near) || (b.window && a.near) {
        PairCrossing::WindowNear
    } else if ((a.far && b.near) || (b.far && a.near)) && !a.window && !b.window {
        PairCrossing::FarNear
    } else {
        PairCrossing::Miss
    }
}

const fn build_pair_table() -> [[PairCrossing; 8]; 8] {
    let mut table = [[PairCrossing::Miss; 8]; 8];
    let mut i = 0;
    while i < 8 {
        let mut j = 0;
        while j < 8 {
            table[i][j] = pair_crossing(
                EndpointClass::from_index(i as u8),
                EndpointClass::from_index(j as u8),
            );
            j += 1;
        }
        i += 1;
    }
    table
}

/// All 64 endpoint-pair combinations, indexed by `[a.index()][b.index()]`.
pub const PAIR_CROSSING: [[PairCrossing; 8]; 8] = build_pair_table();
