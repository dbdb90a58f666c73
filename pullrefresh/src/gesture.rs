use crate::{DragAction, DragSample, OffsetSink, PullEventListener, PullRefresh};

/// Remembers the previous pointer position so raw samples can be turned into deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct DragTracker {
    last_y: Option<f32>,
}

impl DragTracker {
    fn delta(&mut self, y: f32) -> Option<f32> {
        let prev = self.last_y.replace(y);
        prev.map(|p| y - p)
    }
}

impl<S: OffsetSink, L: PullEventListener> PullRefresh<S, L> {
    /// Feeds one pointer event from the host's touch dispatch.
    ///
    /// Returns `true` when the event moved the pulled view and should not reach the list.
    /// Otherwise the host passes the event on so the list scrolls normally.
    pub fn on_touch_event(&mut self, sample: DragSample<'_>) -> bool {
        match sample.action {
            DragAction::Down => {
                self.tracker.last_y = Some(sample.y);
                self.begin_drag(sample.time_ms);
                false
            }
            DragAction::Move => {
                let mut consumed = false;
                for &y in sample.history.iter().chain(core::iter::once(&sample.y)) {
                    // A move without a preceding down only seeds the tracker.
                    if let Some(dy) = self.tracker.delta(y) {
                        consumed |= self.drag_by(dy);
                    }
                }
                consumed
            }
            DragAction::Up | DragAction::Cancel => {
                self.tracker.last_y = None;
                self.end_drag(sample.time_ms);
                false
            }
        }
    }
}
