/// A point in the play area.  Coordinates are continuous, with the origin at
/// the top-left corner and y increasing downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl Point {
    pub(crate) const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Return the Euclidean distance from this point to `other`
    pub(crate) fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Dimensions of the rectangular play area, in the same continuous units as
/// [`Point`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Bounds {
    pub(crate) fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}
