use std::collections::VecDeque;

use pullrefresh::{Edge, PullEventListener, RefreshTicket};

/// One recorded pull notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PullEvent {
    Started { edge: Edge },
    Threshold { edge: Edge, above: bool },
    RefreshRequested { edge: Edge, ticket: RefreshTicket },
    RequestComplete { edge: Edge, success: bool },
    Ended { edge: Edge },
}

impl PullEvent {
    pub fn edge(&self) -> Edge {
        match *self {
            Self::Started { edge }
            | Self::Threshold { edge, .. }
            | Self::RefreshRequested { edge, .. }
            | Self::RequestComplete { edge, .. }
            | Self::Ended { edge } => edge,
        }
    }
}

/// A [`PullEventListener`] that queues notifications in the order they were delivered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventQueue {
    events: VecDeque<PullEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PullEvent> + '_ {
        self.events.iter()
    }

    pub fn pop(&mut self) -> Option<PullEvent> {
        self.events.pop_front()
    }

    /// Removes and yields every queued event, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = PullEvent> + '_ {
        self.events.drain(..)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn push(&mut self, event: PullEvent) {
        self.events.push_back(event);
    }
}

impl PullEventListener for EventQueue {
    fn on_pull_started(&mut self, edge: Edge) {
        self.push(PullEvent::Started { edge });
    }

    fn on_pull_threshold(&mut self, edge: Edge, above: bool) {
        self.push(PullEvent::Threshold { edge, above });
    }

    fn on_refresh_request(&mut self, edge: Edge, ticket: RefreshTicket) {
        self.push(PullEvent::RefreshRequested { edge, ticket });
    }

    fn on_request_complete(&mut self, edge: Edge, success: bool) {
        self.push(PullEvent::RequestComplete { edge, success });
    }

    fn on_pull_ended(&mut self, edge: Edge) {
        self.push(PullEvent::Ended { edge });
    }
}
