use crate::Edge;

/// Receives incremental offset changes for the pulled content.
///
/// Only the change since the previous call is passed, in whole pixels. Summing every delta
/// yields the current integer offset; the sum returns to zero whenever the state machine
/// goes idle.
pub trait OffsetSink {
    fn apply_offset_delta(&mut self, delta: i32);
}

impl<F: FnMut(i32)> OffsetSink for F {
    fn apply_offset_delta(&mut self, delta: i32) {
        self(delta)
    }
}

/// Discards every delta; for hosts that only read [`crate::PullRefresh::offset`].
impl OffsetSink for () {
    fn apply_offset_delta(&mut self, _delta: i32) {}
}

/// An opaque handle identifying one refresh request.
///
/// Handed to [`PullEventListener::on_refresh_request`]; pass it back to
/// [`crate::PullRefresh::complete_refresh`] once the refresh finishes. A ticket from an
/// earlier request is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefreshTicket {
    pub(crate) edge: Edge,
    pub(crate) id: u64,
}

impl RefreshTicket {
    pub fn edge(&self) -> Edge {
        self.edge
    }
}

/// Observer for pull lifecycle notifications.
///
/// Every notification is delivered exactly once, synchronously, from inside the call that
/// caused it. All methods default to no-ops.
pub trait PullEventListener {
    /// The edge left `Idle` and a pull began.
    fn on_pull_started(&mut self, edge: Edge) {
        let _ = edge;
    }

    /// The offset crossed the refresh threshold.
    ///
    /// `above` is `true` when crossing outwards (releasing now would refresh) and `false`
    /// when falling back under it.
    fn on_pull_threshold(&mut self, edge: Edge, above: bool) {
        let _ = (edge, above);
    }

    /// The view settled at the threshold and a refresh should start.
    ///
    /// The state machine stays in its waiting state until the ticket is completed.
    fn on_refresh_request(&mut self, edge: Edge, ticket: RefreshTicket) {
        let _ = (edge, ticket);
    }

    /// The refresh finished; the release animation follows after the configured delay.
    fn on_request_complete(&mut self, edge: Edge, success: bool) {
        let _ = (edge, success);
    }

    /// The pull is over and the offset is back at zero.
    fn on_pull_ended(&mut self, edge: Edge) {
        let _ = edge;
    }
}

impl PullEventListener for () {}

impl<T: PullEventListener + ?Sized> PullEventListener for &mut T {
    fn on_pull_started(&mut self, edge: Edge) {
        (**self).on_pull_started(edge);
    }

    fn on_pull_threshold(&mut self, edge: Edge, above: bool) {
        (**self).on_pull_threshold(edge, above);
    }

    fn on_refresh_request(&mut self, edge: Edge, ticket: RefreshTicket) {
        (**self).on_refresh_request(edge, ticket);
    }

    fn on_request_complete(&mut self, edge: Edge, success: bool) {
        (**self).on_request_complete(edge, success);
    }

    fn on_pull_ended(&mut self, edge: Edge) {
        (**self).on_pull_ended(edge);
    }
}
