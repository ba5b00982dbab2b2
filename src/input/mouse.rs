/// Tracks the cursor and turns absolute positions into look offsets.
///
/// The first sample after a reset only records the position, so entering
/// free-fly never produces a jump from a stale cursor position.
pub(crate) struct PointerTracker {
    pub(crate) mouse_pos: (f32, f32),
    last: Option<(f32, f32)>,
}

impl PointerTracker {
    /// Create a tracker with no previous sample.
    pub(crate) fn new() -> Self {
        Self {
            mouse_pos: (0.0, 0.0),
            last: None,
        }
    }

    /// Forget the previous sample.
    pub(crate) fn reset(&mut self) {
        self.last = None;
    }

    /// Record a cursor position without producing an offset.
    pub(crate) fn observe(&mut self, x: f32, y: f32) {
        self.mouse_pos = (x, y);
    }

    /// Record a cursor position and return `(dx, dy)` since the previous
    /// sample, with `dy` positive when the cursor moves up.
    pub(crate) fn offset(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        self.mouse_pos = (x, y);
        let offset = self.last.map(|(last_x, last_y)| (x - last_x, last_y - y));
        self.last = Some((x, y));
        offset
    }
}
