use super::point::Point;
use std::collections::VecDeque;
use thiserror::Error;

/// A fixed-capacity FIFO of the most recent positions occupied by one
/// segment, oldest first.
///
/// The buffer is the hand-off point of the relay movement scheme: a segment's
/// child waits for the buffer to fill to capacity and then takes the oldest
/// entry via [`TrailBuffer::take_relay()`], draining the buffer so that
/// another full capacity's worth of positions must accumulate before the next
/// hand-off.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct TrailBuffer {
    points: VecDeque<Point>,
    capacity: usize,
}

impl TrailBuffer {
    pub(super) fn new(capacity: usize) -> TrailBuffer {
        TrailBuffer {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `pos` to the back of the buffer.  If the buffer is already at
    /// capacity, the oldest entry is evicted.
    pub(super) fn record(&mut self, pos: Point) {
        self.points.push_back(pos);
        while self.points.len() > self.capacity {
            let _ = self.points.pop_front();
        }
    }

    /// True iff the buffer has accumulated exactly its capacity in positions
    pub(super) fn is_full(&self) -> bool {
        self.points.len() == self.capacity
    }

    #[allow(unused)]
    pub(super) fn len(&self) -> usize {
        self.points.len()
    }

    /// Return the oldest recorded position.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the buffer has not yet filled to capacity.  This is a
    /// precondition failure: callers are expected to gate on
    /// [`TrailBuffer::is_full()`].
    pub(super) fn oldest(&self) -> Result<Point, EmptyBufferError> {
        if !self.is_full() {
            return Err(EmptyBufferError);
        }
        self.points.front().copied().ok_or(EmptyBufferError)
    }

    /// Return the oldest recorded position and clear the buffer.  Same
    /// precondition as [`TrailBuffer::oldest()`].
    pub(super) fn take_relay(&mut self) -> Result<Point, EmptyBufferError> {
        let pos = self.oldest()?;
        self.points.clear();
        Ok(pos)
    }
}

/// Error returned when a trail buffer is read before it has accumulated its
/// full capacity of positions
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("trail buffer read before filling to capacity")]
pub(crate) struct EmptyBufferError;
