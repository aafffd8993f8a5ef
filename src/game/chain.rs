use super::direction::Direction;
use super::point::Point;
use super::trail::TrailBuffer;

/// One body unit of the snake: a position plus the trail of positions it has
/// recently occupied
#[derive(Clone, Debug, PartialEq)]
pub(super) struct Segment {
    pub(super) position: Point,
    pub(super) trail: TrailBuffer,
}

impl Segment {
    fn new(position: Point, trail_capacity: usize) -> Segment {
        Segment {
            position,
            trail: TrailBuffer::new(trail_capacity),
        }
    }
}

/// The snake's body: an arena of segments ordered head to tail.
///
/// `segments[0]` is always the head; the parent of `segments[i]` is
/// `segments[i - 1]` and its child is `segments[i + 1]`, so the chain
/// invariants hold by construction and traversal is a plain forward
/// iteration.  Segments are appended on growth and never removed.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct SnakeChain {
    pub(super) segments: Vec<Segment>,
    trail_capacity: usize,
}

impl SnakeChain {
    /// Create a chain consisting of just a head at `head`
    pub(super) fn new(head: Point, trail_capacity: usize) -> SnakeChain {
        SnakeChain {
            segments: vec![Segment::new(head, trail_capacity)],
            trail_capacity,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Point {
        self.segments[0].position
    }

    #[allow(unused)]
    pub(super) fn len(&self) -> usize {
        self.segments.len()
    }

    pub(super) fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Move the head `speed` units in `direction` and relay positions down
    /// the chain.
    ///
    /// The head records its new position into its own trail.  Each body
    /// segment in turn moves only if its parent's trail has filled to
    /// capacity, in which case it adopts the parent's oldest recorded
    /// position (draining the parent's trail) and records it into its own
    /// trail.  The pass runs head to tail within the single call, stopping at
    /// the first segment whose parent has not yet accumulated enough history;
    /// segments past that point stay frozen until the relay reaches them.
    pub(super) fn advance(&mut self, direction: Direction, speed: f64) {
        let head = direction.advance(self.segments[0].position, speed);
        self.segments[0].position = head;
        self.segments[0].trail.record(head);
        for i in 1..self.segments.len() {
            let Ok(pos) = self.segments[i - 1].trail.take_relay() else {
                break;
            };
            let segment = &mut self.segments[i];
            segment.position = pos;
            segment.trail.record(pos);
        }
    }

    /// Append `units` segments to the tail, each positioned exactly at the
    /// current tail's position with an empty trail.  Growth is invisible
    /// until relay movement separates the new segments.
    pub(super) fn grow(&mut self, units: usize) {
        for _ in 0..units {
            let tail = self
                .segments
                .last()
                .expect("chain should always contain a head")
                .position;
            self.segments.push(Segment::new(tail, self.trail_capacity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SPEED: f64 = 3.0;

    fn start() -> Point {
        Point::new(150.0, 150.0)
    }

    #[test]
    fn new_chain_is_head_only() {
        let chain = SnakeChain::new(start(), 5);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.head(), start());
    }

    #[test]
    fn advance_moves_head_by_speed() {
        let mut chain = SnakeChain::new(start(), 5);
        chain.advance(Direction::Up, SPEED);
        assert_eq!(chain.head(), Point::new(150.0, 147.0));
        chain.advance(Direction::Left, SPEED);
        assert_eq!(chain.head(), Point::new(147.0, 147.0));
    }

    #[test]
    fn grow_appends_at_tail_position() {
        let mut chain = SnakeChain::new(start(), 5);
        chain.grow(5);
        assert_eq!(chain.len(), 6);
        for segment in chain.segments() {
            assert_eq!(segment.position, start());
        }
        chain.grow(5);
        assert_eq!(chain.len(), 11);
    }

    #[test]
    fn length_after_repeated_growth() {
        let mut chain = SnakeChain::new(start(), 5);
        for k in 1..=4 {
            chain.grow(5);
            assert_eq!(chain.len(), 1 + k * 5);
        }
    }

    #[test]
    fn body_frozen_until_parent_trail_fills() {
        let mut chain = SnakeChain::new(start(), 5);
        chain.grow(1);
        for _ in 0..4 {
            chain.advance(Direction::Up, SPEED);
            assert_eq!(chain.segments()[1].position, start());
        }
        // Fifth recording fills the head's trail; the body segment adopts the
        // head's oldest recorded position from within the same call.
        chain.advance(Direction::Up, SPEED);
        assert_eq!(chain.segments()[1].position, Point::new(150.0, 147.0));
    }

    #[test]
    fn body_moves_once_per_capacity_refill() {
        let mut chain = SnakeChain::new(start(), 5);
        // Warm the head's trail up to a full, self-evicting window
        for _ in 0..7 {
            chain.advance(Direction::Up, SPEED);
        }
        chain.grow(1);
        let mut moves = 0;
        let mut last = chain.segments()[1].position;
        for _ in 0..10 {
            chain.advance(Direction::Up, SPEED);
            if chain.segments()[1].position != last {
                moves += 1;
                last = chain.segments()[1].position;
            }
        }
        // One relay from the already-full trail, one after it refills
        assert_eq!(moves, 2);
    }

    #[test]
    fn relay_propagates_same_call_in_chain_order() {
        let mut chain = SnakeChain::new(Point::new(100.0, 100.0), 2);
        chain.grow(2);
        chain.advance(Direction::Down, SPEED);
        let p1 = Point::new(100.0, 103.0);
        // Head's trail holds one position; nothing else moves yet
        assert_eq!(chain.segments()[1].position, Point::new(100.0, 100.0));
        chain.advance(Direction::Down, SPEED);
        // Head's trail filled; the first body segment adopts p1 while the
        // second still waits on the first's history
        assert_eq!(chain.segments()[1].position, p1);
        assert_eq!(chain.segments()[2].position, Point::new(100.0, 100.0));
        chain.advance(Direction::Down, SPEED);
        assert_eq!(chain.segments()[1].position, p1);
        chain.advance(Direction::Down, SPEED);
        // Fourth call: the head's trail fills again, segment 1 adopts p3 and
        // thereby fills its own trail, so segment 2 relays in the same call
        assert_eq!(chain.segments()[1].position, Point::new(100.0, 109.0));
        assert_eq!(chain.segments()[2].position, p1);
    }
}
