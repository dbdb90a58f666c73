use pullrefresh::{
    ConfigError, DragSample, Edge, PullError, PullOptions, PullRefresh, PullState, RefreshTicket,
};

use crate::{EventQueue, OffsetAccumulator, PullEvent};

/// A framework-neutral controller that wraps a `pullrefresh::PullRefresh` and provides common
/// adapter workflows (absolute offset tracking, event draining, refresh completion).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_touch_event` / `on_overscrolled` / `on_scroll_position_changed` when UI events occur
/// - `on_pulled_view_laid_out` after measuring the header/footer
/// - `tick(now_ms)` each frame/timer tick while `is_animating` or a release is pending
/// - `drain_events` once per frame to react to notifications
#[derive(Debug)]
pub struct Controller {
    machine: PullRefresh<OffsetAccumulator, EventQueue>,
}

impl Controller {
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `options` fails validation.
    pub fn new(options: PullOptions) -> Result<Self, ConfigError> {
        let machine = PullRefresh::new(options, OffsetAccumulator::new(), EventQueue::new())?;
        Ok(Self { machine })
    }

    pub fn from_machine(machine: PullRefresh<OffsetAccumulator, EventQueue>) -> Self {
        Self { machine }
    }

    pub fn machine(&self) -> &PullRefresh<OffsetAccumulator, EventQueue> {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut PullRefresh<OffsetAccumulator, EventQueue> {
        &mut self.machine
    }

    pub fn into_machine(self) -> PullRefresh<OffsetAccumulator, EventQueue> {
        self.machine
    }

    pub fn state(&self) -> PullState {
        self.machine.state()
    }

    /// Absolute pulled offset in whole pixels, as the layout should apply it.
    pub fn offset(&self) -> i32 {
        self.machine.sink().offset()
    }

    pub fn is_animating(&self) -> bool {
        self.machine.is_animating()
    }

    /// Stops the release animation. The view stays where it is until the next drag.
    pub fn cancel_animation(&mut self) {
        self.machine.cancel_animation();
    }

    /// Returns `true` when the event moved the pulled view and should not reach the list.
    pub fn on_touch_event(&mut self, sample: DragSample<'_>) -> bool {
        self.machine.on_touch_event(sample)
    }

    pub fn on_overscrolled(&mut self, is_overscrolled: bool) {
        self.machine.on_overscrolled(is_overscrolled);
    }

    pub fn on_scroll_position_changed(
        &mut self,
        first_visible: usize,
        visible_count: usize,
        total_count: usize,
    ) {
        self.machine
            .on_scroll_position_changed(first_visible, visible_count, total_count);
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Layout`] for an invalid measurement.
    pub fn on_pulled_view_laid_out(
        &mut self,
        edge: Edge,
        measured_height: f32,
        measured_padding: f32,
    ) -> Result<(), ConfigError> {
        self.machine
            .on_pulled_view_laid_out(edge, measured_height, measured_padding)
    }

    /// Advances the controller.
    ///
    /// - If work is scheduled, runs whatever is due and returns the new absolute offset.
    /// - Otherwise returns `None`; the adapter can stop its frame timer.
    pub fn tick(&mut self, now_ms: u64) -> Option<i32> {
        self.machine.next_deadline_ms()?;
        self.machine.tick(now_ms);
        Some(self.offset())
    }

    /// When the adapter should call [`Self::tick`] next.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.machine.next_deadline_ms()
    }

    /// Removes and returns every notification queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<PullEvent> {
        self.machine.listener_mut().drain().collect()
    }

    /// The refresh the host still has to finish, if any.
    ///
    /// `None` once [`Self::finish_refresh`] was called, even while the view is still pinned
    /// during the completion delay.
    pub fn pending_refresh(&self) -> Option<RefreshTicket> {
        if self.machine.is_completion_pending() {
            return None;
        }
        self.machine.outstanding_ticket()
    }

    /// Completes the outstanding refresh; the view retracts after the configured delay.
    ///
    /// # Errors
    ///
    /// Returns [`PullError`] when no refresh is outstanding or it was already finished.
    pub fn finish_refresh(&mut self, success: bool, now_ms: u64) -> Result<(), PullError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "pullrefresh_adapter",
            success,
            now_ms,
            ticket = ?self.machine.outstanding_ticket(),
            "finish_refresh"
        );
        self.machine.on_request_complete(success, now_ms)
    }

    /// Cancels all scheduled work. Call this when the owning view goes away.
    ///
    /// Returns the delta that moves the content back to rest, since the view may have been
    /// detached mid-pull.
    pub fn detach(&mut self) -> i32 {
        self.machine.detach();
        self.machine.sink_mut().undo()
    }
}
