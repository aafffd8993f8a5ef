use super::chain::SnakeChain;
use super::point::{Bounds, Point};

/// True iff any edge of the head's bounding box (center ± radius) lies on or
/// beyond the play-area boundary
pub(super) fn hits_wall(head: Point, diameter: f64, bounds: Bounds) -> bool {
    let radius = diameter / 2.0;
    head.x - radius <= 0.0
        || head.y - radius <= 0.0
        || head.x + radius >= bounds.width
        || head.y + radius >= bounds.height
}

/// True iff the head's center lies within one diameter of the center of any
/// body segment outside the exclusion window.
///
/// `skip` is the number of chain slots nearest the head (counting the head
/// itself) that are never checked: during normal follow motion the head's
/// immediate trailing neighbors are always within collision distance, as are
/// freshly grown segments still stacked on the tail, so the window must scale
/// with the growth chunk size.
pub(super) fn hits_self(chain: &SnakeChain, diameter: f64, skip: usize) -> bool {
    let head = chain.head();
    chain
        .segments()
        .iter()
        .skip(skip)
        .any(|segment| head.distance_to(segment.position) < diameter)
}
