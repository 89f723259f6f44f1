use crate::beam::region::{
    EndpointClass, FAR, NEAR, PAIR_CROSSING, PairCrossing, SINGLE_CROSSING, WINDOW,
};
use crate::float_types::Real;
use crate::geometry::{Intersection, Segment, in_front_of, segment_intersect};
use nalgebra::Point2;

/// The wedge of space reachable from a (virtual) source through a window on a wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beam {
    /// Apex of the wedge: the real source or one of its mirror images.
    pub source: Point2<Real>,
    /// The part of the last reflecting wall that the beam passes through.
    pub window: Segment,
}

impl Beam {
    pub const fn new(source: Point2<Real>, window: Segment) -> Self {
        Beam { source, window }
    }

    /// Same beam with the window oriented so the source is not in front of it.
    ///
    /// [`Beam::classify`] and [`Beam::clip`] rely on this orientation.
    pub fn normalized(self) -> Self {
        if in_front_of(&self.source, &self.window.p1, &self.window.p2) {
            Beam::new(self.source, self.window.reversed())
        } else {
            self
        }
    }

    /// Which boundaries of the (normalized) beam `point` lies outside of.
    pub fn classify(&self, point: &Point2<Real>) -> EndpointClass {
        EndpointClass {
            far: !in_front_of(point, &self.source, &self.window.p2),
            window: !in_front_of(point, &self.window.p1, &self.window.p2),
            near: in_front_of(point, &self.source, &self.window.p1),
        }
    }

    /// Crossing of `wall`'s line with one boundary. The edges are parametrized as rays
    /// leaving the window endpoints away from the source, the window line from `p1` to `p2`,
    /// so `on_ray_a` tells whether the crossing lies past the start of that boundary.
    fn boundary_crossing(&self, boundary: u8, wall: &Segment) -> Option<Intersection> {
        let Segment { p1, p2 } = self.window;
        let beyond = |p: Point2<Real>| Point2::from(p.coords * 2.0 - self.source.coords);
        let (start, end) = match boundary {
            FAR => (p2, beyond(p2)),
            WINDOW => (p1, p2),
            _ => (p1, beyond(p1)),
        };
        segment_intersect(&start, &end, &wall.p1, &wall.p2)
    }

    /// Try the `candidates` boundaries in far, window, near order and return the first
    /// crossing lying on its boundary's forward ray; the last candidate is taken as is.
    fn first_crossing(&self, candidates: u8, wall: &Segment) -> Option<Point2<Real>> {
        let mut remaining = candidates;
        for boundary in [FAR, WINDOW, NEAR] {
            if candidates & boundary == 0 {
                continue;
            }
            remaining &= !boundary;
            let crossing = self.boundary_crossing(boundary, wall);
            if remaining == 0 {
                return crossing.map(|c| c.point);
            }
            if let Some(crossing) = crossing.filter(|c| c.on_ray_a) {
                return Some(crossing.point);
            }
        }
        None
    }

    /// Clip `wall` to this beam. The beam must be [normalized](Beam::normalized).
    ///
    /// Returns the visible part of the wall (the window of the reflected beam), or `None`
    /// when the wall cannot be reached through this beam.
    pub fn clip(&self, wall: &Segment) -> Option<Segment> {
        let c1 = self.classify(&wall.p1);
        let c2 = self.classify(&wall.p2);

        let clipped = match PAIR_CROSSING[c1.index() as usize][c2.index() as usize] {
            PairCrossing::Disjoint | PairCrossing::Miss => None,
            PairCrossing::Inside => Some(*wall),
            PairCrossing::OneInside => {
                let (inside, outside) = if c1.is_inside() {
                    (wall.p1, c2)
                } else {
                    (wall.p2, c1)
                };
                self.first_crossing(SINGLE_CROSSING[outside.index() as usize], wall)
                    .map(|exit| Segment::new(inside, exit))
            },
            PairCrossing::FarWindow => {
                let enter = self.boundary_crossing(FAR, wall).filter(|c| c.on_ray_a)?;
                let exit = self.boundary_crossing(WINDOW, wall)?;
                Some(Segment::new(enter.point, exit.point))
            },
            PairCrossing::WindowNear => {
                let enter = self.boundary_crossing(WINDOW, wall).filter(|c| c.on_ray_a)?;
                let exit = self.boundary_crossing(NEAR, wall)?;
                Some(Segment::new(enter.point, exit.point))
            },
            PairCrossing::FarNear => {
                let enter = self.boundary_crossing(FAR, wall)?;
                let exit = self.boundary_crossing(NEAR, wall)?;
                Some(Segment::new(enter.point, exit.point))
            },
        };

        clipped.filter(Segment::is_finite)
    }
}
