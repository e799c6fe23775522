use crate::{
    animation::{ease::Ease, endpoints::ResolvedEndpoints},
    foundation::{
        core::SampleRate,
        error::{TweenError, TweenResult},
    },
};

/// One `(time, value)` control point handed to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Normalized time in `[0, 1)`.
    pub time: f64,
    /// Interpolated value at `time`.
    pub value: f64,
}

/// Ordered keyframes produced by [`sample`]. Always rebuilt wholesale.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyframeTable {
    keyframes: Vec<Keyframe>,
}

impl KeyframeTable {
    /// Table with no keyframes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of keyframes.
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// `true` when the duration was too short for a single sample.
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Keyframes in time order.
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Iterate keyframes in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Keyframe> {
        self.keyframes.iter()
    }

    /// Normalized key times, in order.
    pub fn times(&self) -> Vec<f64> {
        self.keyframes.iter().map(|k| k.time).collect()
    }

    /// Values, in time order.
    pub fn values(&self) -> Vec<f64> {
        self.keyframes.iter().map(|k| k.value).collect()
    }

    /// First keyframe, if any.
    pub fn first(&self) -> Option<&Keyframe> {
        self.keyframes.first()
    }

    /// Last keyframe, if any.
    pub fn last(&self) -> Option<&Keyframe> {
        self.keyframes.last()
    }

    /// Serialize as `{"keyframes": [{"time": .., "value": ..}, ...]}`.
    pub fn to_json(&self) -> TweenResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| TweenError::serde(e.to_string()))
    }
}

impl<'a> IntoIterator for &'a KeyframeTable {
    type Item = &'a Keyframe;
    type IntoIter = std::slice::Iter<'a, Keyframe>;

    fn into_iter(self) -> Self::IntoIter {
        self.keyframes.iter()
    }
}

/// Sample `ease` between `endpoints` at `rate` for `duration_secs`.
///
/// Produces `floor(rate * duration_secs)` keyframes at normalized times `i / n`. Time `1`
/// itself is never sampled. A non-positive sample count yields an empty table; counts
/// saturate at [`SampleRate::MAX_SAMPLES`].
#[tracing::instrument(level = "trace", skip(endpoints))]
pub fn sample(
    endpoints: ResolvedEndpoints,
    ease: Ease,
    duration_secs: f64,
    rate: SampleRate,
) -> KeyframeTable {
    let n = rate.sample_count(duration_secs);
    if n == 0 {
        tracing::debug!(
            duration_secs,
            rate = rate.per_sec(),
            "duration too short for a single keyframe"
        );
        return KeyframeTable::empty();
    }

    let step = 1.0 / n as f64;
    let keyframes = (0..n)
        .map(|i| {
            let time = i as f64 * step;
            Keyframe {
                time,
                value: endpoints.lerp(ease.apply(time)),
            }
        })
        .collect();
    KeyframeTable { keyframes }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sampler.rs"]
mod tests;
