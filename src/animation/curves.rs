//! Closed-form easing curves.
//!
//! Each function maps normalized time `t` in `[0, 1]` to normalized progress. Outputs are
//! not clamped: `back` and `elastic` overshoot, and a parametric [`SineWave`] can land
//! anywhere its amplitude and offset allow.
//!
//! Variants derived from another variant (`out_bounce` from `in_bounce` and so on) call
//! that function directly, so `out(t) == 1 - in(1 - t)` holds by construction.

use std::f64::consts::PI;

/// Parameters of the general sine easing `sin(t·2π·period − 2π·phase_shift)·amplitude + y_offset`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SineWave {
    /// Number of full cycles over `[0, 1]`.
    pub period: f64,
    /// Fraction of a full cycle to shift the phase by.
    pub phase_shift: f64,
    /// Multiplier applied to the wave.
    pub amplitude: f64,
    /// Constant added after scaling.
    pub y_offset: f64,
}

impl SineWave {
    /// Quarter wave rising from the trough: `1 - cos(t·π/2)`.
    pub const IN: Self = Self {
        period: 0.25,
        phase_shift: 0.25,
        amplitude: 1.0,
        y_offset: 1.0,
    };

    /// Quarter wave from the origin: `sin(t·π/2)`.
    pub const OUT: Self = Self {
        period: 0.25,
        phase_shift: 0.0,
        amplitude: 1.0,
        y_offset: 0.0,
    };

    /// Half wave trough to crest: `0.5 - 0.5·cos(t·π)`.
    pub const IN_OUT: Self = Self {
        period: 0.5,
        phase_shift: 0.25,
        amplitude: 0.5,
        y_offset: 0.5,
    };

    /// Evaluate the wave at `t`.
    pub fn eval(&self, t: f64) -> f64 {
        (t * PI * 2.0 * self.period - PI * 2.0 * self.phase_shift).sin() * self.amplitude
            + self.y_offset
    }
}

impl Default for SineWave {
    fn default() -> Self {
        Self {
            period: 1.0,
            phase_shift: 0.0,
            amplitude: 1.0,
            y_offset: 0.0,
        }
    }
}

/// Overshoot constant of the `back` family.
pub const BACK_OVERSHOOT: f64 = 2.701_58;

/// Oscillation period of the `elastic` family.
pub const ELASTIC_WOBBLE: f64 = 0.3;

const BOUNCE_K: f64 = (11.0 / 4.0) * (11.0 / 4.0);

pub fn linear(t: f64) -> f64 {
    t
}

pub fn in_sine(t: f64) -> f64 {
    SineWave::IN.eval(t)
}

pub fn out_sine(t: f64) -> f64 {
    SineWave::OUT.eval(t)
}

pub fn in_out_sine(t: f64) -> f64 {
    SineWave::IN_OUT.eval(t)
}

pub fn in_quad(t: f64) -> f64 {
    t * t
}

pub fn out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

pub fn in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

pub fn in_cubic(t: f64) -> f64 {
    t * t * t
}

pub fn out_cubic(t: f64) -> f64 {
    (t - 1.0).powi(3) + 1.0
}

pub fn in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0).powi(2) + 1.0
    }
}

pub fn in_quart(t: f64) -> f64 {
    t.powi(4)
}

pub fn out_quart(t: f64) -> f64 {
    1.0 - (t - 1.0).powi(4)
}

pub fn in_out_quart(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * t.powi(4)
    } else {
        -0.5 * (2.0 * t - 2.0).powi(4) + 1.0
    }
}

pub fn in_quint(t: f64) -> f64 {
    t.powi(5)
}

pub fn out_quint(t: f64) -> f64 {
    (t - 1.0).powi(5) + 1.0
}

pub fn in_out_quint(t: f64) -> f64 {
    if t < 0.5 {
        16.0 * t.powi(5)
    } else {
        16.0 * (t - 1.0).powi(5) + 1.0
    }
}

pub fn in_expo(t: f64) -> f64 {
    // 2^-10 at t = 0 would leave a visible jump at the start.
    if t == 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * (t - 1.0))
    }
}

pub fn out_expo(t: f64) -> f64 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

pub fn in_out_expo(t: f64) -> f64 {
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    if t < 0.5 {
        0.5 * 2f64.powf(10.0 * (2.0 * t - 1.0))
    } else {
        -0.5 * 2f64.powf(-10.0 * (2.0 * t - 1.0)) + 1.0
    }
}

pub fn in_circ(t: f64) -> f64 {
    1.0 - (1.0 - t * t).sqrt()
}

pub fn out_circ(t: f64) -> f64 {
    (1.0 - (t - 1.0).powi(2)).sqrt()
}

pub fn in_out_circ(t: f64) -> f64 {
    if t < 0.5 {
        -0.5 * (1.0 - 4.0 * t * t).sqrt() + 0.5
    } else {
        0.5 * (1.0 - 4.0 * (t - 1.0).powi(2)).sqrt() + 0.5
    }
}

/// Four parabolic arcs, each peaking at 1 and shrinking toward the end.
pub fn out_bounce(t: f64) -> f64 {
    if t < 4.0 / 11.0 {
        BOUNCE_K * t * t
    } else if t < 8.0 / 11.0 {
        3.0 / 4.0 + BOUNCE_K * (t - 6.0 / 11.0).powi(2)
    } else if t < 10.0 / 11.0 {
        15.0 / 16.0 + BOUNCE_K * (t - 9.0 / 11.0).powi(2)
    } else {
        63.0 / 64.0 + BOUNCE_K * (t - 21.0 / 22.0).powi(2)
    }
}

pub fn in_bounce(t: f64) -> f64 {
    1.0 - out_bounce(1.0 - t)
}

pub fn in_out_bounce(t: f64) -> f64 {
    mirror_halves(t, in_bounce, out_bounce)
}

pub fn in_back(t: f64) -> f64 {
    t * t * (BACK_OVERSHOOT * t - (BACK_OVERSHOOT - 1.0))
}

pub fn out_back(t: f64) -> f64 {
    1.0 - in_back(1.0 - t)
}

pub fn in_out_back(t: f64) -> f64 {
    mirror_halves(t, in_back, out_back)
}

/// Exponential envelope times a sine of period [`ELASTIC_WOBBLE`], phased so the last
/// crest lands on `t = 1`.
pub fn in_elastic(t: f64) -> f64 {
    // The raw curve sits at -2^-11 for t = 0.
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    let envelope = 2f64.powf(10.0 * (t - 1.0));
    let wave = ((t - (1.0 - ELASTIC_WOBBLE * 0.25)) * 2.0 * PI / ELASTIC_WOBBLE).sin();
    envelope * wave
}

pub fn out_elastic(t: f64) -> f64 {
    1.0 - in_elastic(1.0 - t)
}

pub fn in_out_elastic(t: f64) -> f64 {
    mirror_halves(t, in_elastic, out_elastic)
}

/// Squeeze `ease_in` into `[0, 0.5)` and `ease_out` into `[0.5, 1]`.
fn mirror_halves(t: f64, ease_in: fn(f64) -> f64, ease_out: fn(f64) -> f64) -> f64 {
    if t < 0.5 {
        0.5 * ease_in(t * 2.0)
    } else {
        0.5 * ease_out((t - 0.5) * 2.0) + 0.5
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curves.rs"]
mod tests;
