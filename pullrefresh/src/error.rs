use crate::{Edge, PullState, RefreshTicket};

/// A rejected configuration value.
///
/// Configuration is validated when it is applied, before any gesture is processed.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("damping must be finite and greater than zero (got {0})")]
    Damping(f32),
    #[error("easing must be within (0, 1] (got {0})")]
    Easing(f32),
    #[error("settle threshold must be finite and greater than zero (got {0})")]
    SettleThreshold(f32),
    #[error("frame interval must be at least 1ms")]
    FrameInterval,
    #[error(
        "invalid {edge:?} pulled view layout: height {height}, padding {padding} \
         (padding must lie within [0, height])"
    )]
    Layout {
        edge: Edge,
        height: f32,
        padding: f32,
    },
}

/// A call that does not fit the current state.
///
/// These are reported to the caller and otherwise ignored: the state machine is left as it
/// was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PullError {
    #[error("refresh completion reported while not waiting (state: {state:?})")]
    NotWaiting { state: PullState },
    #[error("refresh ticket {ticket:?} does not match the outstanding request")]
    StaleTicket { ticket: RefreshTicket },
    #[error("refresh completion for {edge:?} was already reported")]
    CompletionPending { edge: Edge },
    #[error("no pulled view layout has been reported for {edge:?}")]
    MissingLayout { edge: Edge },
}
