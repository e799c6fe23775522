use std::{fmt, str::FromStr};

use crate::{
    animation::curves::{self, SineWave},
    foundation::error::TweenError,
};

/// Easing library entry: maps normalized time to normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// `t`.
    #[default]
    Linear,
    /// General sine wave; see [`SineWave`].
    Sine(SineWave),
    /// Sine preset [`SineWave::IN`].
    InSine,
    /// Sine preset [`SineWave::OUT`].
    OutSine,
    /// Sine preset [`SineWave::IN_OUT`].
    InOutSine,
    /// `t²`.
    InQuad,
    /// `1 - (1 - t)²`.
    OutQuad,
    /// Quadratic, accelerating then decelerating.
    InOutQuad,
    /// `t³`.
    InCubic,
    /// `1 - (1 - t)³`.
    OutCubic,
    /// Cubic, accelerating then decelerating.
    InOutCubic,
    /// `t⁴`.
    InQuart,
    /// `1 - (1 - t)⁴`.
    OutQuart,
    /// Quartic, accelerating then decelerating.
    InOutQuart,
    /// `t⁵`.
    InQuint,
    /// `1 - (1 - t)⁵`.
    OutQuint,
    /// Quintic, accelerating then decelerating.
    InOutQuint,
    /// `2^(10(t - 1))`, pinned to `0` at `t = 0`.
    InExpo,
    /// `1 - 2^(-10t)`, pinned to `1` at `t = 1`.
    OutExpo,
    /// Exponential, accelerating then decelerating.
    InOutExpo,
    /// Quarter circle, slow start.
    InCirc,
    /// Quarter circle, slow end.
    OutCirc,
    /// Two quarter circles joined at `t = 0.5`.
    InOutCirc,
    /// Mirrored [`Ease::OutBounce`].
    InBounce,
    /// Four decaying bounces settling on `1`.
    OutBounce,
    /// Bounce in, then bounce out.
    InOutBounce,
    /// Pulls back below `0` before accelerating.
    InBack,
    /// Overshoots past `1` before settling.
    OutBack,
    /// Pulls back, then overshoots.
    InOutBack,
    /// Growing oscillation that lands on `1`.
    InElastic,
    /// Decaying oscillation around `1`.
    OutElastic,
    /// Elastic in, then elastic out.
    InOutElastic,
}

impl Ease {
    /// Every named library entry, in library order.
    pub const PRESETS: [Ease; 31] = [
        Ease::Linear,
        Ease::InSine,
        Ease::OutSine,
        Ease::InOutSine,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
        Ease::InQuint,
        Ease::OutQuint,
        Ease::InOutQuint,
        Ease::InExpo,
        Ease::OutExpo,
        Ease::InOutExpo,
        Ease::InCirc,
        Ease::OutCirc,
        Ease::InOutCirc,
        Ease::InBounce,
        Ease::OutBounce,
        Ease::InOutBounce,
        Ease::InBack,
        Ease::OutBack,
        Ease::InOutBack,
        Ease::InElastic,
        Ease::OutElastic,
        Ease::InOutElastic,
    ];

    /// Evaluate the curve at `t`, clamped to `[0, 1]`. The result is not clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => curves::linear(t),
            Self::Sine(wave) => wave.eval(t),
            Self::InSine => curves::in_sine(t),
            Self::OutSine => curves::out_sine(t),
            Self::InOutSine => curves::in_out_sine(t),
            Self::InQuad => curves::in_quad(t),
            Self::OutQuad => curves::out_quad(t),
            Self::InOutQuad => curves::in_out_quad(t),
            Self::InCubic => curves::in_cubic(t),
            Self::OutCubic => curves::out_cubic(t),
            Self::InOutCubic => curves::in_out_cubic(t),
            Self::InQuart => curves::in_quart(t),
            Self::OutQuart => curves::out_quart(t),
            Self::InOutQuart => curves::in_out_quart(t),
            Self::InQuint => curves::in_quint(t),
            Self::OutQuint => curves::out_quint(t),
            Self::InOutQuint => curves::in_out_quint(t),
            Self::InExpo => curves::in_expo(t),
            Self::OutExpo => curves::out_expo(t),
            Self::InOutExpo => curves::in_out_expo(t),
            Self::InCirc => curves::in_circ(t),
            Self::OutCirc => curves::out_circ(t),
            Self::InOutCirc => curves::in_out_circ(t),
            Self::InBounce => curves::in_bounce(t),
            Self::OutBounce => curves::out_bounce(t),
            Self::InOutBounce => curves::in_out_bounce(t),
            Self::InBack => curves::in_back(t),
            Self::OutBack => curves::out_back(t),
            Self::InOutBack => curves::in_out_back(t),
            Self::InElastic => curves::in_elastic(t),
            Self::OutElastic => curves::out_elastic(t),
            Self::InOutElastic => curves::in_out_elastic(t),
        }
    }

    /// Stable library name; the general sine wave is `sine`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Sine(_) => "sine",
            Self::InSine => "in_sine",
            Self::OutSine => "out_sine",
            Self::InOutSine => "in_out_sine",
            Self::InQuad => "in_quad",
            Self::OutQuad => "out_quad",
            Self::InOutQuad => "in_out_quad",
            Self::InCubic => "in_cubic",
            Self::OutCubic => "out_cubic",
            Self::InOutCubic => "in_out_cubic",
            Self::InQuart => "in_quart",
            Self::OutQuart => "out_quart",
            Self::InOutQuart => "in_out_quart",
            Self::InQuint => "in_quint",
            Self::OutQuint => "out_quint",
            Self::InOutQuint => "in_out_quint",
            Self::InExpo => "in_expo",
            Self::OutExpo => "out_expo",
            Self::InOutExpo => "in_out_expo",
            Self::InCirc => "in_circ",
            Self::OutCirc => "out_circ",
            Self::InOutCirc => "in_out_circ",
            Self::InBounce => "in_bounce",
            Self::OutBounce => "out_bounce",
            Self::InOutBounce => "in_out_bounce",
            Self::InBack => "in_back",
            Self::OutBack => "out_back",
            Self::InOutBack => "in_out_back",
            Self::InElastic => "in_elastic",
            Self::OutElastic => "out_elastic",
            Self::InOutElastic => "in_out_elastic",
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ease {
    type Err = TweenError;

    /// Look up a library entry by name. `sine` yields the default [`SineWave`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name == "sine" {
            return Ok(Self::Sine(SineWave::default()));
        }
        Self::PRESETS
            .into_iter()
            .find(|ease| ease.name() == name)
            .ok_or_else(|| TweenError::unknown_easing(name))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
