/// The list edge a pull is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    /// The header above the first item; pulled by dragging down.
    Top,
    /// The footer below the last item; pulled by dragging up.
    Bottom,
}

impl Edge {
    pub const BOTH: [Edge; 2] = [Edge::Top, Edge::Bottom];

    /// Direction of a pull on this edge in offset space: `+1.0` for top, `-1.0` for bottom.
    pub fn sign(self) -> f32 {
        match self {
            Self::Top => 1.0,
            Self::Bottom => -1.0,
        }
    }
}

/// The phase of an active pull, shared by both edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Finger down, offset below the threshold.
    Pulling,
    /// Finger down, offset beyond the threshold.
    PastThreshold,
    /// Finger lifted below the threshold; settling back to zero.
    Released,
    /// Finger lifted beyond the threshold; settling onto the threshold.
    ThresholdReleased,
    /// Pinned at the threshold until the refresh reports completion.
    Waiting,
}

impl Phase {
    /// Whether a finger is currently driving the offset.
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Pulling | Self::PastThreshold)
    }

    /// Whether the settle animation owns the offset.
    pub fn is_settling(self) -> bool {
        matches!(self, Self::Released | Self::ThresholdReleased)
    }
}

/// The pull state machine's state.
///
/// `Idle` plus five phases for each edge: eleven states in total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PullState {
    #[default]
    Idle,
    Active { edge: Edge, phase: Phase },
}

impl PullState {
    pub const ALL: [PullState; 11] = [
        PullState::Idle,
        PullState::active(Edge::Top, Phase::Pulling),
        PullState::active(Edge::Top, Phase::PastThreshold),
        PullState::active(Edge::Top, Phase::Released),
        PullState::active(Edge::Top, Phase::ThresholdReleased),
        PullState::active(Edge::Top, Phase::Waiting),
        PullState::active(Edge::Bottom, Phase::Pulling),
        PullState::active(Edge::Bottom, Phase::PastThreshold),
        PullState::active(Edge::Bottom, Phase::Released),
        PullState::active(Edge::Bottom, Phase::ThresholdReleased),
        PullState::active(Edge::Bottom, Phase::Waiting),
    ];

    pub const fn active(edge: Edge, phase: Phase) -> Self {
        Self::Active { edge, phase }
    }

    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn edge(self) -> Option<Edge> {
        match self {
            Self::Idle => None,
            Self::Active { edge, .. } => Some(edge),
        }
    }

    pub fn phase(self) -> Option<Phase> {
        match self {
            Self::Idle => None,
            Self::Active { phase, .. } => Some(phase),
        }
    }

    pub fn is_waiting(self) -> bool {
        self.phase() == Some(Phase::Waiting)
    }

    /// Whether the state machine allows a direct transition from `self` to `next`.
    ///
    /// Transitions never switch edges without passing through `Idle`.
    pub fn can_transition_to(self, next: PullState) -> bool {
        use Phase::*;

        match (self, next) {
            (Self::Idle, Self::Idle) => false,
            (Self::Idle, Self::Active { phase, .. }) => phase == Pulling,
            (Self::Active { phase, .. }, Self::Idle) => matches!(phase, Pulling | Released),
            (Self::Active { edge: a, phase: from }, Self::Active { edge: b, phase: to }) => {
                a == b
                    && matches!(
                        (from, to),
                        (Pulling, PastThreshold)
                            | (PastThreshold, Pulling)
                            | (Pulling, Released)
                            | (PastThreshold, ThresholdReleased)
                            | (Released, Pulling)
                            | (ThresholdReleased, PastThreshold)
                            | (ThresholdReleased, Waiting)
                            | (Waiting, Released)
                    )
            }
        }
    }
}

/// Pointer action carried by a [`DragSample`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragAction {
    Down,
    Move,
    Up,
    /// The platform aborted the gesture; handled like `Up`.
    Cancel,
}

/// One pointer event from the host's touch dispatch.
///
/// `history` holds intermediate positions batched into this event, oldest first. They are
/// replayed before `y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample<'a> {
    pub action: DragAction,
    /// Vertical position in the list's coordinate space.
    pub y: f32,
    pub time_ms: u64,
    pub history: &'a [f32],
}

impl DragSample<'static> {
    pub fn down(y: f32, time_ms: u64) -> Self {
        Self::new(DragAction::Down, y, time_ms)
    }

    pub fn moved(y: f32, time_ms: u64) -> Self {
        Self::new(DragAction::Move, y, time_ms)
    }

    pub fn up(y: f32, time_ms: u64) -> Self {
        Self::new(DragAction::Up, y, time_ms)
    }

    pub fn cancel(y: f32, time_ms: u64) -> Self {
        Self::new(DragAction::Cancel, y, time_ms)
    }

    pub fn new(action: DragAction, y: f32, time_ms: u64) -> Self {
        Self {
            action,
            y,
            time_ms,
            history: &[],
        }
    }
}

impl<'a> DragSample<'a> {
    pub fn with_history<'b>(self, history: &'b [f32]) -> DragSample<'b> {
        DragSample {
            action: self.action,
            y: self.y,
            time_ms: self.time_ms,
            history,
        }
    }
}

/// A value stored once per edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgePair<T> {
    pub top: T,
    pub bottom: T,
}

impl<T> EdgePair<T> {
    pub fn new(top: T, bottom: T) -> Self {
        Self { top, bottom }
    }

    pub fn get(&self, edge: Edge) -> &T {
        match edge {
            Edge::Top => &self.top,
            Edge::Bottom => &self.bottom,
        }
    }

    pub fn get_mut(&mut self, edge: Edge) -> &mut T {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Bottom => &mut self.bottom,
        }
    }
}
