use crate::foundation::error::{TweenError, TweenResult};

/// Keyframe sampling resolution in samples per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SampleRate(u32);

impl SampleRate {
    /// Rate used by every [`crate::TweenSpec`].
    pub const DEFAULT: Self = Self(60);

    /// Upper bound on keyframes in one table.
    pub const MAX_SAMPLES: usize = 1 << 20;

    /// Build a sample rate; `per_sec` must be `> 0`.
    pub fn new(per_sec: u32) -> TweenResult<Self> {
        if per_sec == 0 {
            return Err(TweenError::validation("SampleRate must be > 0"));
        }
        Ok(Self(per_sec))
    }

    /// Samples per second.
    pub fn per_sec(self) -> u32 {
        self.0
    }

    /// Number of samples for a tween lasting `secs`: `floor(rate * secs)`.
    ///
    /// Negative, NaN and infinite products collapse to `0`; anything above
    /// [`SampleRate::MAX_SAMPLES`] saturates there.
    pub fn sample_count(self, secs: f64) -> usize {
        let n = (f64::from(self.0) * secs).floor();
        if n.is_finite() && n > 0.0 {
            (n as usize).min(Self::MAX_SAMPLES)
        } else {
            0
        }
    }

    /// Validate a tween duration for this rate: finite, `>= 0`, and at most
    /// [`SampleRate::MAX_SAMPLES`] samples long.
    pub fn check_duration(self, secs: f64) -> TweenResult<f64> {
        let secs = ensure_duration(secs)?;
        if (f64::from(self.0) * secs).floor() > Self::MAX_SAMPLES as f64 {
            return Err(TweenError::validation(format!(
                "duration {secs}s exceeds {} samples at {} samples/s",
                Self::MAX_SAMPLES,
                self.0
            )));
        }
        Ok(secs)
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reject NaN and infinities for a named scalar input.
pub(crate) fn ensure_finite(name: &str, v: f64) -> TweenResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TweenError::validation(format!(
            "{name} must be a finite number, got {v}"
        )))
    }
}

/// Tween durations must be finite and `>= 0`.
pub(crate) fn ensure_duration(secs: f64) -> TweenResult<f64> {
    let secs = ensure_finite("duration", secs)?;
    if secs < 0.0 {
        return Err(TweenError::validation(format!(
            "duration must be >= 0, got {secs}"
        )));
    }
    Ok(secs)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
