//! Hull values produced by the algorithms.
//!
//! A `Hull` owns its vertices in one winding, starting at the vertex the
//! producing algorithm anchored on. Graham scan yields counter-clockwise
//! hulls, Chan's gift wrapping clockwise ones; `canonical` brings either to
//! a common form for comparison without touching the original.

use std::fmt;

use crate::error::HullError;
use crate::geom2::{left, left_on, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

/// Ordered, cyclic vertex sequence with no repeated vertex and at least one point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hull {
    vertices: Vec<Point>,
    winding: Winding,
}

impl Hull {
    pub(crate) fn new(vertices: Vec<Point>, winding: Winding) -> Self {
        debug_assert!(!vertices.is_empty(), "hull must keep at least one vertex");
        Self { vertices, winding }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    #[inline]
    pub fn winding(&self) -> Winding {
        self.winding
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// One or two vertices: every input point was identical or collinear.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Caller policy: demand a proper polygon.
    pub fn require_polygon(&self) -> Result<&Self, HullError> {
        if self.is_degenerate() {
            return Err(HullError::degenerate(self.len()));
        }
        Ok(self)
    }

    /// Same vertex cycle, opposite winding, same start vertex.
    pub fn reversed(&self) -> Hull {
        let mut vertices = Vec::with_capacity(self.len());
        vertices.push(self.vertices[0]);
        vertices.extend(self.vertices[1..].iter().rev());
        let winding = match self.winding {
            Winding::CounterClockwise => Winding::Clockwise,
            Winding::Clockwise => Winding::CounterClockwise,
        };
        Hull::new(vertices, winding)
    }

    /// Copy in counter-clockwise order starting at the coordinate-minimal vertex.
    pub fn canonical(&self) -> Hull {
        let mut out = match self.winding {
            Winding::CounterClockwise => self.clone(),
            Winding::Clockwise => self.reversed(),
        };
        if let Some(start) = out
            .vertices
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| **p)
            .map(|(i, _)| i)
        {
            out.vertices.rotate_left(start);
        }
        out
    }

    /// True when both hulls describe the same vertex cycle.
    pub fn same_polygon(&self, other: &Hull) -> bool {
        self.canonical().vertices == other.canonical().vertices
    }

    /// Every point lies in the closed hull: on the `left_on` side of each
    /// counter-clockwise edge, or on the segment/point for degenerate hulls.
    pub fn encloses(&self, points: &[Point]) -> bool {
        let ccw = self.canonical();
        let v = ccw.vertices();
        match v.len() {
            1 => points.iter().all(|p| *p == v[0]),
            2 => points.iter().all(|&p| {
                left_on(v[0], v[1], p) && left_on(v[1], v[0], p) && within_segment(v[0], v[1], p)
            }),
            n => (0..n).all(|i| {
                let (a, b) = (v[i], v[(i + 1) % n]);
                points.iter().all(|&p| left_on(a, b, p))
            }),
        }
    }

    /// Every vertex is a strict corner: consecutive triples turn strictly left
    /// in counter-clockwise order.
    pub fn is_strictly_convex(&self) -> bool {
        let ccw = self.canonical();
        let v = ccw.vertices();
        let n = v.len();
        n < 3 || (0..n).all(|i| left(v[i], v[(i + 1) % n], v[(i + 2) % n]))
    }
}

fn within_segment(a: Point, b: Point, p: Point) -> bool {
    let ab = a.to(b);
    let ap = a.to(p);
    let t = ab.dot(&ap);
    t >= 0 && t <= ab.dot(&ab)
}

impl fmt::Display for Hull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}
