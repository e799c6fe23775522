use crate::foundation::error::{TweenError, TweenResult};

/// Concrete `(start, end)` pair a tween interpolates between.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResolvedEndpoints {
    /// Value at normalized time `0`.
    pub start: f64,
    /// Value at normalized time `1`.
    pub end: f64,
}

impl ResolvedEndpoints {
    /// `end - start`.
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    /// Interpolate with eased progress `p`. `p` outside `[0, 1]` extrapolates.
    pub fn lerp(self, p: f64) -> f64 {
        self.start + (self.end - self.start) * p
    }
}

/// Which two of `start`, `end`, `delta` define a tween.
///
/// Built from the three loose inputs with [`Endpoints::classify`]; when all three are set,
/// `start` and `end` win and `delta` is dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Endpoints {
    /// Explicit start and end.
    StartEnd {
        /// Start value.
        start: f64,
        /// End value.
        end: f64,
    },
    /// Start plus a relative offset.
    StartDelta {
        /// Start value.
        start: f64,
        /// Offset from `start` to the end value.
        delta: f64,
    },
    /// End minus a relative offset.
    EndDelta {
        /// End value.
        end: f64,
        /// Offset from the start value to `end`.
        delta: f64,
    },
    /// Fewer than two inputs are set.
    #[default]
    Unresolved,
}

impl Endpoints {
    /// Tween from `start` to `end`.
    pub fn start_end(start: f64, end: f64) -> Self {
        Self::StartEnd { start, end }
    }

    /// Tween from `start` to `start + delta`.
    pub fn start_delta(start: f64, delta: f64) -> Self {
        Self::StartDelta { start, delta }
    }

    /// Tween from `end - delta` to `end`.
    pub fn end_delta(end: f64, delta: f64) -> Self {
        Self::EndDelta { end, delta }
    }

    /// Pick the variant for a set of optional inputs. First match wins:
    /// start+end, start+delta, end+delta.
    pub fn classify(start: Option<f64>, end: Option<f64>, delta: Option<f64>) -> Self {
        match (start, end, delta) {
            (Some(start), Some(end), delta) => {
                if delta.is_some() {
                    tracing::debug!(start, end, ?delta, "start and end set, ignoring delta");
                }
                Self::StartEnd { start, end }
            }
            (Some(start), None, Some(delta)) => Self::StartDelta { start, delta },
            (None, Some(end), Some(delta)) => Self::EndDelta { end, delta },
            _ => Self::Unresolved,
        }
    }

    /// The `(start, end)` pair, or `None` when unresolved.
    pub fn resolve(self) -> Option<ResolvedEndpoints> {
        match self {
            Self::StartEnd { start, end } => Some(ResolvedEndpoints { start, end }),
            Self::StartDelta { start, delta } => Some(ResolvedEndpoints {
                start,
                end: start + delta,
            }),
            Self::EndDelta { end, delta } => Some(ResolvedEndpoints {
                start: end - delta,
                end,
            }),
            Self::Unresolved => None,
        }
    }

    /// Whether two inputs are set.
    pub fn is_resolved(self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}

/// Resolve `(start, end)` from up to three optional inputs.
///
/// Returns `None` when fewer than two are set. See [`Endpoints::classify`] for precedence.
pub fn resolve(
    start: Option<f64>,
    end: Option<f64>,
    delta: Option<f64>,
) -> Option<ResolvedEndpoints> {
    Endpoints::classify(start, end, delta).resolve()
}

/// Like [`resolve`], but reports an unresolvable set as [`TweenError::UnresolvableEndpoints`].
pub fn try_resolve(
    start: Option<f64>,
    end: Option<f64>,
    delta: Option<f64>,
) -> TweenResult<ResolvedEndpoints> {
    resolve(start, end, delta).ok_or_else(|| {
        TweenError::unresolvable(start.is_some(), end.is_some(), delta.is_some())
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/endpoints.rs"]
mod tests;
