//! Points, and the helpers that derive new points from old ones.
//!
//! Every interior vertex of a dissection comes from the corners of the outer
//! shape through [`weighted`] or [`extend`].

use crate::Error;

/// A two-dimensional point, in figure units (centimetres, y pointing up).
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate. Larger values are up.
    pub y: f64,
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Compute an affine combination between `self` and `other`; that is, `(1 - t) * self + t * other`.
    pub fn affine(&self, other: &Self, t: f64) -> Self {
        Point {
            x: (1.0 - t) * self.x + t * other.x,
            y: (1.0 - t) * self.y + t * other.y,
        }
    }

    /// Translate by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

/// The point `(w1 * p1 + w2 * p2) / (w1 + w2)`.
///
/// This divides the segment `p1 p2` in the ratio `w2 : w1`, measured from
/// `p1`: the heavier endpoint pulls the result towards itself. The weights
/// should be non-negative and must not both be zero; a zero total weight
/// panics in debug builds and gives a non-finite point otherwise. Use
/// [`try_weighted`] when the weights are computed.
///
/// The sum is taken in the order written above, so swapping `(p1, w1)` with
/// `(p2, w2)` gives back exactly the same point.
pub fn weighted(p1: Point, p2: Point, w1: f64, w2: f64) -> Point {
    debug_assert!(w1 >= 0.0 && w2 >= 0.0, "negative weight ({w1}, {w2})");
    debug_assert!(w1 + w2 != 0.0, "weights sum to zero");
    let total = w1 + w2;
    Point {
        x: (w1 * p1.x + w2 * p2.x) / total,
        y: (w1 * p1.y + w2 * p2.y) / total,
    }
}

/// Like [`weighted`], but reports a zero total weight instead of panicking.
pub fn try_weighted(p1: Point, p2: Point, w1: f64, w2: f64) -> Result<Point, Error> {
    if w1 + w2 == 0.0 {
        return Err(Error::ZeroWeight);
    }
    Ok(weighted(p1, p2, w1, w2))
}

/// The midpoint of `p1` and `p2`.
pub fn midpoint(p1: Point, p2: Point) -> Point {
    weighted(p1, p2, 1.0, 1.0)
}

/// The point `p2 + w * (p2 - p1)`.
///
/// Starting at `p2`, keep going in the direction from `p1` to `p2` for `w`
/// times the length of that segment. `w = 1` reflects `p1` through `p2`;
/// a negative `w` heads back towards `p1`.
pub fn extend(p1: Point, p2: Point, w: f64) -> Point {
    Point {
        x: p2.x + w * (p2.x - p1.x),
        y: p2.y + w * (p2.y - p1.y),
    }
}

/// The foot of the perpendicular dropped from `p` onto the line through `a`
/// and `b`.
///
/// `a` and `b` must be distinct.
pub fn foot(p: Point, a: Point, b: Point) -> Point {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len2 = dx * dx + dy * dy;
    debug_assert!(len2 > 0.0, "degenerate line {a:?} -- {b:?}");
    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len2;
    a.affine(&b, t)
}
