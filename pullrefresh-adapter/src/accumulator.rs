use pullrefresh::OffsetSink;

/// An [`OffsetSink`] that sums deltas into the absolute offset of the pulled content.
///
/// Layout code usually wants "how far is the list shifted right now" rather than the
/// incremental deltas the state machine emits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OffsetAccumulator {
    offset: i32,
    applied: u64,
}

impl OffsetAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current absolute offset; positive reveals the header, negative the footer.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Number of deltas received, including zero deltas.
    pub fn applied_count(&self) -> u64 {
        self.applied
    }

    /// Forgets the accumulated offset and returns the delta that moves the content back.
    ///
    /// Use this when the host tears down or rebinds the scrolled content while a pull is
    /// visible.
    pub fn undo(&mut self) -> i32 {
        let delta = -self.offset;
        self.offset = 0;
        delta
    }
}

impl OffsetSink for OffsetAccumulator {
    fn apply_offset_delta(&mut self, delta: i32) {
        self.offset = self.offset.saturating_add(delta);
        self.applied = self.applied.saturating_add(1);
    }
}
