use super::point::Point;

/// The direction in which the snake's head is travelling
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the position reached by moving `speed` units from `pos` in this
    /// direction.  Up decreases y, matching the top-left origin of [`Point`].
    pub(crate) fn advance(self, pos: Point, speed: f64) -> Point {
        let Point { mut x, mut y } = pos;
        match self {
            Direction::Up => y -= speed,
            Direction::Down => y += speed,
            Direction::Left => x -= speed,
            Direction::Right => x += speed,
        }
        Point { x, y }
    }
}
