use crate::ConfigError;

/// Configuration for [`crate::PullRefresh`].
///
/// Every field has a working default; use the `with_*` builders to tune a few of them and
/// let [`crate::PullRefresh::new`] validate the result.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PullOptions {
    /// Stiffness of the pull. Larger values make the offset saturate after less travel.
    pub damping: f32,

    /// Fraction of the remaining distance kept on each release animation tick, in `(0, 1]`.
    ///
    /// Smaller values retract faster. `1.0` holds the view in place.
    pub easing: f32,

    /// How long the pinned "waiting" view stays visible after the refresh reports completion,
    /// before the release animation starts.
    pub request_complete_delay_ms: u64,

    /// Period of the release animation task.
    pub frame_interval_ms: u64,

    /// Distance from the animation target under which the offset snaps onto it.
    pub settle_threshold: f32,

    pub top_enabled: bool,
    pub bottom_enabled: bool,
}

impl Default for PullOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PullOptions {
    pub const DEFAULT_DAMPING: f32 = 0.01;
    pub const DEFAULT_EASING: f32 = 0.7;
    pub const DEFAULT_REQUEST_COMPLETE_DELAY_MS: u64 = 1000;
    pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 15;
    pub const DEFAULT_SETTLE_THRESHOLD: f32 = 2.0;

    pub fn new() -> Self {
        Self {
            damping: Self::DEFAULT_DAMPING,
            easing: Self::DEFAULT_EASING,
            request_complete_delay_ms: Self::DEFAULT_REQUEST_COMPLETE_DELAY_MS,
            frame_interval_ms: Self::DEFAULT_FRAME_INTERVAL_MS,
            settle_threshold: Self::DEFAULT_SETTLE_THRESHOLD,
            top_enabled: true,
            bottom_enabled: true,
        }
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_easing(mut self, easing: f32) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_request_complete_delay_ms(mut self, delay_ms: u64) -> Self {
        self.request_complete_delay_ms = delay_ms;
        self
    }

    pub fn with_frame_interval_ms(mut self, interval_ms: u64) -> Self {
        self.frame_interval_ms = interval_ms;
        self
    }

    pub fn with_settle_threshold(mut self, threshold: f32) -> Self {
        self.settle_threshold = threshold;
        self
    }

    pub fn with_top_enabled(mut self, enabled: bool) -> Self {
        self.top_enabled = enabled;
        self
    }

    pub fn with_bottom_enabled(mut self, enabled: bool) -> Self {
        self.bottom_enabled = enabled;
        self
    }

    /// Checks every numeric field.
    ///
    /// # Errors
    ///
    /// Returns the first field that is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_damping(self.damping)?;
        validate_easing(self.easing)?;
        if !(self.settle_threshold.is_finite() && self.settle_threshold > 0.0) {
            return Err(ConfigError::SettleThreshold(self.settle_threshold));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::FrameInterval);
        }
        Ok(())
    }
}

pub(crate) fn validate_damping(damping: f32) -> Result<(), ConfigError> {
    if damping.is_finite() && damping > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Damping(damping))
    }
}

pub(crate) fn validate_easing(easing: f32) -> Result<(), ConfigError> {
    if easing > 0.0 && easing <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Easing(easing))
    }
}
