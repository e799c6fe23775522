use crate::{
    animation::{
        ease::Ease,
        endpoints::{Endpoints, ResolvedEndpoints},
        sampler::{KeyframeTable, sample},
    },
    foundation::{
        core::{SampleRate, ensure_finite},
        error::{TweenError, TweenResult},
    },
};

/// One property's tween configuration.
///
/// Every setter rebuilds the keyframe table before returning, so [`TweenSpec::table`]
/// always reflects the current fields. Use [`TweenBuilder`] to configure several fields and
/// build once.
#[derive(Clone, Debug)]
pub struct TweenSpec {
    start: Option<f64>,
    end: Option<f64>,
    delta: Option<f64>,
    ease: Option<Ease>,
    duration: f64,
    rate: SampleRate,
    endpoints: Endpoints,
    table: KeyframeTable,
    generation: u64,
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl TweenSpec {
    /// Default duration in seconds.
    pub const DEFAULT_DURATION: f64 = 1.0;

    /// Unconfigured tween: no endpoints, no ease, one second long.
    pub fn new() -> Self {
        Self {
            start: None,
            end: None,
            delta: None,
            ease: None,
            duration: Self::DEFAULT_DURATION,
            rate: SampleRate::DEFAULT,
            endpoints: Endpoints::Unresolved,
            table: KeyframeTable::empty(),
            generation: 0,
        }
    }

    /// Start builder.
    pub fn builder() -> TweenBuilder {
        TweenBuilder::default()
    }

    /// Set or clear the start value.
    pub fn set_start(&mut self, start: impl Into<Option<f64>>) -> TweenResult<()> {
        self.start = check_endpoint("start", start.into())?;
        self.rebuild();
        Ok(())
    }

    /// Set or clear the end value.
    pub fn set_end(&mut self, end: impl Into<Option<f64>>) -> TweenResult<()> {
        self.end = check_endpoint("end", end.into())?;
        self.rebuild();
        Ok(())
    }

    /// Set or clear the relative offset.
    pub fn set_delta(&mut self, delta: impl Into<Option<f64>>) -> TweenResult<()> {
        self.delta = check_endpoint("delta", delta.into())?;
        self.rebuild();
        Ok(())
    }

    /// Set the easing function.
    ///
    /// The ease is stored and the table rebuilt either way; the call fails with
    /// [`TweenError::UnresolvableEndpoints`] when fewer than two endpoint inputs are set,
    /// since such a tween cannot animate.
    pub fn set_ease(&mut self, ease: Ease) -> TweenResult<()> {
        self.ease = Some(ease);
        self.rebuild();
        if !self.endpoints.is_resolved() {
            tracing::warn!(%ease, "easing set on a tween without resolvable endpoints");
            return Err(self.unresolvable());
        }
        Ok(())
    }

    /// Look up a library entry by name and set it. Unknown names leave the tween untouched.
    pub fn set_ease_named(&mut self, name: &str) -> TweenResult<()> {
        let ease = name.parse::<Ease>()?;
        self.set_ease(ease)
    }

    /// Set the duration in seconds (finite, `>= 0`, at most [`SampleRate::MAX_SAMPLES`]
    /// samples long). A rejected duration leaves the tween untouched.
    pub fn set_duration(&mut self, secs: f64) -> TweenResult<()> {
        self.duration = self.rate.check_duration(secs)?;
        self.rebuild();
        Ok(())
    }

    /// Start value, if set.
    pub fn start(&self) -> Option<f64> {
        self.start
    }

    /// End value, if set.
    pub fn end(&self) -> Option<f64> {
        self.end
    }

    /// Relative offset, if set.
    pub fn delta(&self) -> Option<f64> {
        self.delta
    }

    /// Easing function, if set.
    pub fn ease(&self) -> Option<Ease> {
        self.ease
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Keyframe sampling rate.
    pub fn sample_rate(&self) -> SampleRate {
        self.rate
    }

    /// How the current inputs classify.
    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
    }

    /// Resolved `(start, end)`, or `None` while fewer than two inputs are set.
    pub fn resolved(&self) -> Option<ResolvedEndpoints> {
        self.endpoints.resolve()
    }

    /// Latest keyframe table. Empty while unresolved, without an ease, or for durations
    /// shorter than one sample.
    pub fn table(&self) -> &KeyframeTable {
        &self.table
    }

    /// Latest keyframe table, or the configuration error that keeps it from existing.
    pub fn try_table(&self) -> TweenResult<&KeyframeTable> {
        if !self.endpoints.is_resolved() {
            return Err(self.unresolvable());
        }
        if self.ease.is_none() {
            return Err(TweenError::MissingEasing);
        }
        Ok(&self.table)
    }

    /// Number of rebuilds performed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Consume the tween, keeping only its table.
    pub fn into_table(self) -> KeyframeTable {
        self.table
    }

    #[tracing::instrument(level = "trace", skip_all)]
    fn rebuild(&mut self) {
        self.generation += 1;
        self.endpoints = Endpoints::classify(self.start, self.end, self.delta);
        self.table = match (self.endpoints.resolve(), self.ease) {
            (Some(range), Some(ease)) => sample(range, ease, self.duration, self.rate),
            _ => KeyframeTable::empty(),
        };
    }

    fn unresolvable(&self) -> TweenError {
        TweenError::unresolvable(
            self.start.is_some(),
            self.end.is_some(),
            self.delta.is_some(),
        )
    }
}

/// Deferred configuration for a [`TweenSpec`]; resolves and samples once in
/// [`TweenBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct TweenBuilder {
    start: Option<f64>,
    end: Option<f64>,
    delta: Option<f64>,
    ease: Option<Ease>,
    duration: Option<f64>,
}

impl TweenBuilder {
    /// Start value.
    pub fn start(mut self, start: f64) -> Self {
        self.start = Some(start);
        self
    }

    /// End value.
    pub fn end(mut self, end: f64) -> Self {
        self.end = Some(end);
        self
    }

    /// Relative offset.
    pub fn delta(mut self, delta: f64) -> Self {
        self.delta = Some(delta);
        self
    }

    /// Easing function.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    /// Duration in seconds. Defaults to [`TweenSpec::DEFAULT_DURATION`].
    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = Some(secs);
        self
    }

    /// Validate every field, resolve the endpoints and sample the table once.
    pub fn build(self) -> TweenResult<TweenSpec> {
        let start = check_endpoint("start", self.start)?;
        let end = check_endpoint("end", self.end)?;
        let delta = check_endpoint("delta", self.delta)?;
        let duration = SampleRate::DEFAULT
            .check_duration(self.duration.unwrap_or(TweenSpec::DEFAULT_DURATION))?;

        let endpoints = Endpoints::classify(start, end, delta);
        if !endpoints.is_resolved() {
            return Err(TweenError::unresolvable(
                start.is_some(),
                end.is_some(),
                delta.is_some(),
            ));
        }
        let ease = self.ease.ok_or(TweenError::MissingEasing)?;

        let mut spec = TweenSpec {
            start,
            end,
            delta,
            ease: Some(ease),
            duration,
            ..TweenSpec::new()
        };
        spec.rebuild();
        Ok(spec)
    }
}

fn check_endpoint(name: &str, v: Option<f64>) -> TweenResult<Option<f64>> {
    v.map(|v| ensure_finite(name, v)).transpose()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
