use crate::PullState;

/// Measured geometry of a pulled header/footer view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeLayout {
    /// The view's laid-out height; the offset approaches but never reaches it.
    pub max_length: f32,
    /// Height minus the inner padding; pulling beyond it arms a refresh.
    pub content_size: f32,
}

impl EdgeLayout {
    pub fn new(max_length: f32, content_size: f32) -> Self {
        Self {
            max_length,
            content_size,
        }
    }
}

/// Per-edge configuration.
///
/// `layout` is `None` until the host reports the pulled view's size; an edge without a
/// layout cannot be pulled.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeConfig {
    pub enabled: bool,
    pub layout: Option<EdgeLayout>,
    /// Whether the list's visible window currently touches this edge.
    pub allow_pull: bool,
}

impl EdgeConfig {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            layout: None,
            allow_pull: true,
        }
    }
}

/// A lightweight, serializable snapshot of the scroll session.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PullSnapshot {
    pub state: PullState,
    pub offset: f32,
    pub travel: f32,
    /// Sum of every delta emitted so far.
    pub applied_offset: i32,
    pub is_overscrolled: bool,
}
