use super::point::{Bounds, Point};
use rand::Rng;

/// The single food item.  It is never destroyed; consuming it moves it to a
/// fresh random position.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct Food {
    pub(super) position: Point,
    diameter: f64,
}

impl Food {
    pub(super) fn new(position: Point, diameter: f64) -> Food {
        Food { position, diameter }
    }

    pub(super) fn position(&self) -> Point {
        self.position
    }

    /// True iff a head of the given diameter centered at `head` overlaps the
    /// food closely enough to consume it
    pub(super) fn consumed_by(&self, head: Point, head_diameter: f64) -> bool {
        head.distance_to(self.position) < head_diameter
    }

    /// Move the food to a position drawn uniformly at random within the play
    /// area, keeping a margin of one food diameter from every wall so the
    /// food never spawns overlapping one.
    pub(super) fn respawn<R: Rng>(&mut self, rng: &mut R, bounds: Bounds) {
        let margin = self.diameter;
        self.position = Point::new(
            rng.random_range(margin..=bounds.width - margin),
            rng.random_range(margin..=bounds.height - margin),
        );
    }
}
