use crate::math;

/// The scalar scroll position of a pager along its path.
///
/// In bounded mode the offset stays inside `[min_offset, max_offset]`; in infinite mode it is
/// unbounded and positions wrap around the backing item count.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetModel {
    offset: f32,
    interval: f32,
    count: usize,
    reverse: bool,
    infinite: bool,
}

impl OffsetModel {
    pub fn new(interval: f32, count: usize, reverse: bool, infinite: bool) -> Self {
        Self {
            offset: 0.0,
            interval,
            count,
            reverse,
            infinite,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    pub fn max_offset(&self) -> f32 {
        if self.reverse { 0.0 } else { self.span() }
    }

    pub fn min_offset(&self) -> f32 {
        if self.reverse { -self.span() } else { 0.0 }
    }

    fn span(&self) -> f32 {
        self.count.saturating_sub(1) as f32 * self.interval
    }

    pub fn is_at_min(&self) -> bool {
        !self.infinite && self.offset <= self.min_offset()
    }

    pub fn is_at_max(&self) -> bool {
        !self.infinite && self.offset >= self.max_offset()
    }

    /// Moves the offset by `delta` and returns the delta that was actually applied.
    ///
    /// Bounded models clamp at the ends, so the returned value may be smaller than `delta`
    /// (zero once a bound is reached).
    pub fn apply_delta(&mut self, delta: f32) -> f32 {
        let target = self.offset + delta;
        let next = if self.infinite { target } else { self.clamp(target) };
        let applied = next - self.offset;
        self.offset = next;
        applied
    }

    /// Sets the offset directly (clamped in bounded mode).
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = if self.infinite { offset } else { self.clamp(offset) };
    }

    fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(self.min_offset(), self.max_offset())
    }

    /// Path distance of `position` from the origin.
    pub fn property(&self, position: i64) -> f32 {
        let p = position as f32 * self.interval;
        if self.reverse { -p } else { p }
    }

    /// Signed path distance of `position` from the current center.
    pub fn target_offset(&self, position: i64) -> f32 {
        self.property(position) - self.offset
    }

    /// The nearest slot to the offset, in offset-sign space (negative in reversed layouts).
    pub fn current_position_offset(&self) -> i64 {
        if self.interval == 0.0 {
            return 0;
        }
        math::round(self.offset / self.interval) as i64
    }

    /// The logical position at the center (always `>= 0` in bounded mode).
    pub fn center_position(&self) -> i64 {
        let p = self.current_position_offset();
        if self.reverse { -p } else { p }
    }

    /// Backing data index of the centered item.
    pub fn current_position(&self) -> usize {
        if self.count == 0 {
            return 0;
        }
        let p = self.current_position_offset();
        if !self.infinite {
            return (p.unsigned_abs() as usize).min(self.count - 1);
        }
        self.wrap(self.center_position())
    }

    /// Maps an unbounded position onto `[0, count)`.
    pub fn wrap(&self, position: i64) -> usize {
        if self.count == 0 {
            return 0;
        }
        position.rem_euclid(self.count as i64) as usize
    }

    pub(crate) fn set_interval(&mut self, interval: f32) {
        // Keep the same item centered across interval changes.
        let position = self.current_position_offset();
        self.interval = interval;
        self.set_offset(position as f32 * interval);
    }

    pub(crate) fn set_count(&mut self, count: usize) {
        self.count = count;
        self.set_offset(self.offset);
    }

    pub(crate) fn set_reverse(&mut self, reverse: bool) {
        if self.reverse == reverse {
            return;
        }
        self.reverse = reverse;
        self.set_offset(-self.offset);
    }

    pub(crate) fn set_infinite(&mut self, infinite: bool) {
        self.infinite = infinite;
        self.set_offset(self.offset);
    }
}
