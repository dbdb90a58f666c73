use crate::gesture::DragTracker;
use crate::motion;
use crate::options::{validate_damping, validate_easing};
use crate::schedule::{ScheduledTask, Scheduler, Task, TaskHandle};
use crate::{
    ConfigError, Edge, EdgeConfig, EdgeLayout, EdgePair, OffsetSink, Phase, PullError,
    PullEventListener, PullOptions, PullSnapshot, PullState, RefreshTicket,
};

/// A headless pull-to-refresh state machine.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter feeds it drag input, overscroll/scroll-position reports, pulled view
///   sizes and a clock (`now_ms`).
/// - It reports offset changes to an [`OffsetSink`] and lifecycle notifications to a
///   [`PullEventListener`].
///
/// Both edges share one state machine; a pull on one edge must return to
/// [`PullState::Idle`] before the other edge can be pulled.
///
/// All mutation goes through `&mut self`, so the machine has exactly one writer. Hosts that
/// share it across threads must provide their own synchronization.
#[derive(Debug)]
pub struct PullRefresh<S, L> {
    options: PullOptions,
    edges: EdgePair<EdgeConfig>,
    state: PullState,

    offset: f32,
    travel: f32,
    applied_offset: i32,
    is_overscrolled: bool,
    pub(crate) tracker: DragTracker,

    scheduler: Scheduler,
    now_ms: u64,
    ticket: Option<RefreshTicket>,
    next_ticket_id: u64,
    completion: Option<bool>,

    sink: S,
    listener: L,
}

impl<S: OffsetSink, L: PullEventListener> PullRefresh<S, L> {
    /// Creates an idle state machine.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `options` fails [`PullOptions::validate`].
    pub fn new(options: PullOptions, sink: S, listener: L) -> Result<Self, ConfigError> {
        options.validate()?;
        pdebug!(
            damping = options.damping,
            easing = options.easing,
            delay_ms = options.request_complete_delay_ms,
            "PullRefresh::new"
        );
        Ok(Self {
            edges: EdgePair::new(
                EdgeConfig::new(options.top_enabled),
                EdgeConfig::new(options.bottom_enabled),
            ),
            options,
            state: PullState::Idle,
            offset: 0.0,
            travel: 0.0,
            applied_offset: 0,
            is_overscrolled: false,
            tracker: DragTracker::default(),
            scheduler: Scheduler::new(),
            now_ms: 0,
            ticket: None,
            next_ticket_id: 0,
            completion: None,
            sink,
            listener,
        })
    }

    pub fn options(&self) -> &PullOptions {
        &self.options
    }

    /// Sets the pull stiffness.
    ///
    /// # Errors
    ///
    /// Rejects non-finite or non-positive values.
    pub fn set_damping(&mut self, damping: f32) -> Result<(), ConfigError> {
        validate_damping(damping)?;
        self.options.damping = damping;
        Ok(())
    }

    /// Sets the release animation easing factor.
    ///
    /// # Errors
    ///
    /// Rejects values outside `(0, 1]`.
    pub fn set_easing(&mut self, easing: f32) -> Result<(), ConfigError> {
        validate_easing(easing)?;
        self.options.easing = easing;
        Ok(())
    }

    /// Takes effect for the next completion; an already scheduled release keeps its deadline.
    pub fn set_request_complete_delay_ms(&mut self, delay_ms: u64) {
        self.options.request_complete_delay_ms = delay_ms;
    }

    pub fn state(&self) -> PullState {
        self.state
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn travel(&self) -> f32 {
        self.travel
    }

    /// The integer offset emitted to the sink so far.
    pub fn applied_offset(&self) -> i32 {
        self.applied_offset
    }

    pub fn is_overscrolled(&self) -> bool {
        self.is_overscrolled
    }

    pub fn snapshot(&self) -> PullSnapshot {
        PullSnapshot {
            state: self.state,
            offset: self.offset,
            travel: self.travel,
            applied_offset: self.applied_offset,
            is_overscrolled: self.is_overscrolled,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_parts(self) -> (S, L) {
        (self.sink, self.listener)
    }

    pub fn edge_config(&self, edge: Edge) -> EdgeConfig {
        *self.edges.get(edge)
    }

    /// Returns the last reported layout for `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`PullError::MissingLayout`] if the pulled view was never laid out.
    pub fn edge_layout(&self, edge: Edge) -> Result<EdgeLayout, PullError> {
        self.edges
            .get(edge)
            .layout
            .ok_or(PullError::MissingLayout { edge })
    }

    fn layout_or_default(&self, edge: Edge) -> EdgeLayout {
        self.edges.get(edge).layout.unwrap_or_default()
    }

    pub fn is_edge_enabled(&self, edge: Edge) -> bool {
        self.edges.get(edge).enabled
    }

    /// Enables or disables pulling on one edge.
    ///
    /// Disabling the edge that currently owns the session abandons it: scheduled tasks are
    /// cancelled, any outstanding refresh ticket becomes stale, and the machine returns to
    /// `Idle` (notifying `on_pull_ended`).
    pub fn set_edge_enabled(&mut self, edge: Edge, enabled: bool) {
        let config = self.edges.get_mut(edge);
        let was_enabled = config.enabled;
        config.enabled = enabled;
        if was_enabled && !enabled && self.state.edge() == Some(edge) {
            pdebug!(edge = ?edge, state = ?self.state, "edge disabled during pull");
            self.force_idle();
        }
    }

    /// Reports whether the list is currently scrolled past its content bounds.
    pub fn on_overscrolled(&mut self, is_overscrolled: bool) {
        self.is_overscrolled = is_overscrolled;
    }

    /// Reports which part of the list is visible, deciding which edges can start a pull.
    pub fn on_scroll_position_changed(
        &mut self,
        first_visible: usize,
        visible_count: usize,
        total_count: usize,
    ) {
        let allow_top = first_visible == 0;
        let allow_bottom = first_visible.saturating_add(visible_count) == total_count;
        self.edges.top.allow_pull = allow_top;
        self.edges.bottom.allow_pull = allow_bottom;
        ptrace!(allow_top, allow_bottom, "on_scroll_position_changed");
    }

    /// Records the measured size of a pulled view.
    ///
    /// May be called on every layout pass; the new geometry applies from the next drag
    /// sample or animation tick.
    ///
    /// # Errors
    ///
    /// Rejects a negative or non-finite height, and padding outside `[0, height]`.
    pub fn on_pulled_view_laid_out(
        &mut self,
        edge: Edge,
        measured_height: f32,
        measured_padding: f32,
    ) -> Result<(), ConfigError> {
        let valid = measured_height.is_finite()
            && measured_height >= 0.0
            && measured_padding >= 0.0
            && measured_padding <= measured_height;
        if !valid {
            return Err(ConfigError::Layout {
                edge,
                height: measured_height,
                padding: measured_padding,
            });
        }
        let layout = EdgeLayout::new(measured_height, measured_height - measured_padding);
        ptrace!(edge = ?edge, max_length = layout.max_length, content_size = layout.content_size, "layout");
        self.edges.get_mut(edge).layout = Some(layout);
        Ok(())
    }

    /// The ticket handed out with the current refresh request, if one is outstanding.
    pub fn outstanding_ticket(&self) -> Option<RefreshTicket> {
        self.ticket
    }

    /// Whether a completion was reported and the release is waiting out its delay.
    pub fn is_completion_pending(&self) -> bool {
        self.completion.is_some()
    }

    /// Reports that the refresh identified by `ticket` finished.
    ///
    /// Notifies `on_request_complete` immediately and schedules the release animation
    /// `request_complete_delay_ms` after `now_ms`; drive it with [`Self::tick`].
    ///
    /// # Errors
    ///
    /// The call is ignored (and logged) when the machine is not waiting, when `ticket`
    /// belongs to an earlier request, or when completion was already reported.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        success: bool,
        now_ms: u64,
    ) -> Result<(), PullError> {
        let PullState::Active {
            edge,
            phase: Phase::Waiting,
        } = self.state
        else {
            pwarn!(state = ?self.state, "refresh completion while not waiting");
            return Err(PullError::NotWaiting { state: self.state });
        };
        if self.ticket != Some(ticket) {
            pwarn!(ticket = ?ticket, current = ?self.ticket, "stale refresh ticket");
            return Err(PullError::StaleTicket { ticket });
        }
        if self.completion.is_some() {
            pwarn!(edge = ?edge, "refresh completion reported twice");
            return Err(PullError::CompletionPending { edge });
        }

        self.now_ms = now_ms;
        self.completion = Some(success);
        pdebug!(edge = ?edge, success, "refresh complete");
        self.listener.on_request_complete(edge, success);
        self.scheduler.schedule(
            Task::Release,
            now_ms.saturating_add(self.options.request_complete_delay_ms),
        );
        Ok(())
    }

    /// Completes the outstanding refresh without holding on to its ticket.
    ///
    /// # Errors
    ///
    /// Same as [`Self::complete_refresh`].
    pub fn on_request_complete(&mut self, success: bool, now_ms: u64) -> Result<(), PullError> {
        match self.ticket {
            Some(ticket) => self.complete_refresh(ticket, success, now_ms),
            None => {
                pwarn!(state = ?self.state, "refresh completion without a request");
                Err(PullError::NotWaiting { state: self.state })
            }
        }
    }

    /// Runs every scheduled task due at `now_ms`.
    ///
    /// Call this from a frame callback or timer. Returns the next deadline, if any work is
    /// still pending.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        self.now_ms = now_ms;
        while let Some(task) = self.scheduler.pop_due(now_ms) {
            match task.task {
                Task::Settle => self.settle_step(now_ms),
                Task::Release => self.release_after_complete(),
            }
        }
        self.scheduler.next_deadline_ms()
    }

    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.scheduler.next_deadline_ms()
    }

    /// Whether the release animation is scheduled.
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_scheduled(Task::Settle)
    }

    pub fn pending_task(&self, task: Task) -> Option<ScheduledTask> {
        self.scheduler.pending(task)
    }

    /// Stops the release animation, leaving the offset where it is.
    ///
    /// Returns `true` if an animation was scheduled.
    pub fn cancel_animation(&mut self) -> bool {
        self.scheduler.cancel(Task::Settle)
    }

    pub fn cancel_task(&mut self, handle: TaskHandle) -> bool {
        self.scheduler.cancel_handle(handle)
    }

    /// Cancels every scheduled task. Call this when the owning view is torn down.
    pub fn detach(&mut self) {
        pdebug!(state = ?self.state, "detach");
        self.scheduler.cancel_all();
    }

    /// Starts a drag: stops the release animation and catches a retracting view.
    ///
    /// A view caught while settling resumes in its dragging phase, with travel re-derived
    /// from the current offset so the next move continues from where the view is.
    pub fn begin_drag(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        self.scheduler.cancel(Task::Settle);

        let PullState::Active { edge, phase } = self.state else {
            return;
        };
        if self.is_overscrolled || phase.is_settling() {
            self.reseed_travel(edge);
        }
        match phase {
            Phase::Released => {
                self.set_state(PullState::active(edge, Phase::Pulling));
            }
            Phase::ThresholdReleased => {
                self.set_state(PullState::active(edge, Phase::PastThreshold));
            }
            _ => {}
        }
    }

    /// Applies one vertical drag step.
    ///
    /// Steps are ignored unless the list is overscrolled. From `Idle`, a step away from an
    /// enabled, reachable edge starts a pull on it without moving the view. Returns `true`
    /// when the step moved the pulled view.
    pub fn drag_by(&mut self, dy: f32) -> bool {
        if !self.is_overscrolled {
            return false;
        }

        let (edge, phase) = match self.state {
            PullState::Idle => {
                self.start_pull(dy);
                return false;
            }
            PullState::Active { edge, phase } if phase.is_dragging() => (edge, phase),
            PullState::Active { .. } => return false,
        };

        let layout = self.layout_or_default(edge);
        self.travel += dy;
        self.offset = motion::forward(self.travel, layout.max_length, self.options.damping);
        ptrace!(dy, travel = self.travel, offset = self.offset, "drag_by");

        let extent = self.offset * edge.sign();
        let next = if phase == Phase::Pulling && extent > layout.content_size {
            Some(PullState::active(edge, Phase::PastThreshold))
        } else if phase == Phase::PastThreshold && extent < layout.content_size {
            Some(PullState::active(edge, Phase::Pulling))
        } else if extent <= 0.0 {
            Some(PullState::Idle)
        } else {
            None
        };

        if let Some(next) = next {
            self.set_state(next);
            if next.is_idle() {
                return true;
            }
        }
        self.emit_offset();
        true
    }

    /// Ends a drag: a pulled view is released and starts settling.
    pub fn end_drag(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        match self.state {
            PullState::Active {
                edge,
                phase: Phase::Pulling,
            } => {
                self.set_state(PullState::active(edge, Phase::Released));
            }
            PullState::Active {
                edge,
                phase: Phase::PastThreshold,
            } => {
                self.set_state(PullState::active(edge, Phase::ThresholdReleased));
            }
            _ => {}
        }
    }

    fn can_start_pull(&self, edge: Edge) -> bool {
        let config = self.edges.get(edge);
        if !config.enabled || !config.allow_pull {
            return false;
        }
        if config.layout.is_none() {
            pwarn!(edge = ?edge, "pull ignored: pulled view was never laid out");
            return false;
        }
        true
    }

    fn start_pull(&mut self, dy: f32) {
        let edge = if dy > 0.0 && self.can_start_pull(Edge::Top) {
            Edge::Top
        } else if dy < 0.0 && self.can_start_pull(Edge::Bottom) {
            Edge::Bottom
        } else {
            self.is_overscrolled = false;
            return;
        };
        self.set_state(PullState::active(edge, Phase::Pulling));
    }

    fn reseed_travel(&mut self, edge: Edge) {
        let layout = self.layout_or_default(edge);
        self.travel = motion::inverse(
            self.offset,
            self.travel,
            layout.max_length,
            self.options.damping,
        );
        ptrace!(offset = self.offset, travel = self.travel, "reseed_travel");
    }

    fn emit_offset(&mut self) {
        let target = self.offset as i32;
        let delta = target - self.applied_offset;
        self.applied_offset = target;
        self.sink.apply_offset_delta(delta);
    }

    fn settle_step(&mut self, now_ms: u64) {
        let PullState::Active { edge, phase } = self.state else {
            pwarn!("settle task ran while idle");
            return;
        };
        let target = match phase {
            Phase::Released => 0.0,
            Phase::ThresholdReleased => edge.sign() * self.layout_or_default(edge).content_size,
            _ => {
                pwarn!(state = ?self.state, "settle task ran outside a released state");
                return;
            }
        };

        if motion::is_settled(self.offset, target, self.options.settle_threshold) {
            let next = match phase {
                Phase::Released => PullState::Idle,
                _ => PullState::active(edge, Phase::Waiting),
            };
            self.set_state(next);
            return;
        }

        self.offset = motion::settle_step(self.offset, target, self.options.easing);
        self.emit_offset();
        self.scheduler.schedule(
            Task::Settle,
            now_ms.saturating_add(self.options.frame_interval_ms),
        );
    }

    fn release_after_complete(&mut self) {
        match self.state {
            PullState::Active {
                edge,
                phase: Phase::Waiting,
            } => {
                self.set_state(PullState::active(edge, Phase::Released));
            }
            state => {
                pwarn!(state = ?state, "release task ran while not waiting");
            }
        }
    }

    /// The single transition entry point.
    ///
    /// Unreachable transitions are logged and ignored; returns whether `next` was entered.
    pub(crate) fn set_state(&mut self, next: PullState) -> bool {
        let prev = self.state;
        if !prev.can_transition_to(next) {
            pwarn!(from = ?prev, to = ?next, "illegal pull state transition ignored");
            return false;
        }
        self.state = next;
        pdebug!(from = ?prev, to = ?next, offset = self.offset, "pull state");

        match next {
            PullState::Idle => {
                if let Some(edge) = prev.edge() {
                    self.finish_pull(edge);
                }
            }
            PullState::Active { edge, phase } => self.enter_phase(prev, edge, phase),
        }
        true
    }

    fn enter_phase(&mut self, prev: PullState, edge: Edge, phase: Phase) {
        match phase {
            Phase::Pulling => {
                if prev.is_idle() {
                    self.listener.on_pull_started(edge);
                } else if prev.phase() == Some(Phase::PastThreshold) {
                    self.listener.on_pull_threshold(edge, false);
                }
            }
            Phase::PastThreshold => {
                if prev.phase() == Some(Phase::Pulling) {
                    self.listener.on_pull_threshold(edge, true);
                }
            }
            Phase::Released | Phase::ThresholdReleased => {
                if prev.is_waiting() {
                    self.ticket = None;
                    self.completion = None;
                }
                self.scheduler.schedule(Task::Settle, self.now_ms);
            }
            Phase::Waiting => self.enter_waiting(edge),
        }
    }

    fn enter_waiting(&mut self, edge: Edge) {
        self.offset = edge.sign() * self.layout_or_default(edge).content_size;
        self.emit_offset();
        self.is_overscrolled = false;
        self.reseed_travel(edge);

        let ticket = RefreshTicket {
            edge,
            id: self.next_ticket_id,
        };
        self.next_ticket_id = self.next_ticket_id.wrapping_add(1);
        self.ticket = Some(ticket);
        self.completion = None;
        self.listener.on_refresh_request(edge, ticket);
    }

    fn finish_pull(&mut self, edge: Edge) {
        self.scheduler.cancel(Task::Settle);
        self.listener.on_pull_ended(edge);
        self.offset = 0.0;
        self.emit_offset();
        self.travel = 0.0;
        self.is_overscrolled = false;
    }

    fn force_idle(&mut self) {
        let prev = self.state;
        self.scheduler.cancel_all();
        self.ticket = None;
        self.completion = None;
        self.state = PullState::Idle;
        pdebug!(from = ?prev, "pull abandoned");
        if let Some(edge) = prev.edge() {
            self.finish_pull(edge);
        }
    }
}
