//! Pull motion model.
//!
//! Raw drag distance ("travel") maps onto a visual offset through a first-order saturation
//! curve, `offset = sign(t) * L * (1 - e^(-d|t|))`, so the offset can never reach the pulled
//! view's length `L`. Release animations move the offset towards a target with a fixed
//! per-tick easing factor.

/// Largest `offset / L` ratio the inverse accepts before the logarithm diverges.
const MAX_INVERSE_RATIO: f32 = 1.0 - 1e-6;

fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Maps cumulative travel onto a bounded offset.
///
/// Returns `0.0` when there is no travel or no pulled view to reveal (`max_length <= 0`).
pub fn forward(travel: f32, max_length: f32, damping: f32) -> f32 {
    if travel == 0.0 || max_length <= 0.0 {
        return 0.0;
    }
    sign(travel) * max_length * (1.0 - (-damping * travel.abs()).exp())
}

/// Recovers the travel that would produce `offset`.
///
/// The sign is taken from `prev_travel` rather than from `offset`, so a view caught exactly
/// at a zero crossing keeps its direction. When `prev_travel` is zero the offset's own sign
/// is used instead. An offset at or beyond `max_length` (the layout shrank under an active
/// pull) is treated as sitting just inside the asymptote.
pub fn inverse(offset: f32, prev_travel: f32, max_length: f32, damping: f32) -> f32 {
    if offset == 0.0 || max_length <= 0.0 {
        return 0.0;
    }
    let s = if prev_travel == 0.0 {
        sign(offset)
    } else {
        sign(prev_travel)
    };
    let ratio = (offset / (s * max_length)).min(MAX_INVERSE_RATIO);
    -s * (1.0 - ratio).ln() / damping
}

/// One tick of the release animation: moves `offset` a fixed fraction towards `target`.
pub fn settle_step(offset: f32, target: f32, easing: f32) -> f32 {
    offset * easing + target * (1.0 - easing)
}

/// Whether the release animation is close enough to `target` to snap onto it.
pub fn is_settled(offset: f32, target: f32, threshold: f32) -> bool {
    (offset - target).abs() < threshold
}
