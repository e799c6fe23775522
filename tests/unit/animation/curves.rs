use super::*;

type Family = (&'static str, fn(f64) -> f64, fn(f64) -> f64, fn(f64) -> f64);

const FAMILIES: [Family; 10] = [
    ("sine", in_sine, out_sine, in_out_sine),
    ("quad", in_quad, out_quad, in_out_quad),
    ("cubic", in_cubic, out_cubic, in_out_cubic),
    ("quart", in_quart, out_quart, in_out_quart),
    ("quint", in_quint, out_quint, in_out_quint),
    ("expo", in_expo, out_expo, in_out_expo),
    ("circ", in_circ, out_circ, in_out_circ),
    ("bounce", in_bounce, out_bounce, in_out_bounce),
    ("back", in_back, out_back, in_out_back),
    ("elastic", in_elastic, out_elastic, in_out_elastic),
];

fn grid() -> impl Iterator<Item = f64> {
    (0..=1000).map(|i| f64::from(i) / 1000.0)
}

#[test]
fn endpoints_are_exact() {
    assert_eq!(linear(0.0), 0.0);
    assert_eq!(linear(1.0), 1.0);
    for (name, ease_in, ease_out, ease_in_out) in FAMILIES {
        for f in [ease_in, ease_out, ease_in_out] {
            assert_eq!(f(0.0), 0.0, "{name} at 0");
            assert_eq!(f(1.0), 1.0, "{name} at 1");
        }
    }
}

#[test]
fn out_mirrors_in() {
    for (name, ease_in, ease_out, _) in FAMILIES {
        for t in grid() {
            let mirrored = 1.0 - ease_in(1.0 - t);
            assert!(
                (ease_out(t) - mirrored).abs() < 1e-9,
                "{name} out({t}) = {} vs {mirrored}",
                ease_out(t)
            );
        }
    }
}

#[test]
fn in_out_is_two_scaled_halves() {
    for (name, ease_in, ease_out, ease_in_out) in FAMILIES {
        for t in grid() {
            let expected = if t < 0.5 {
                0.5 * ease_in(2.0 * t)
            } else {
                0.5 * ease_out(2.0 * t - 1.0) + 0.5
            };
            assert!(
                (ease_in_out(t) - expected).abs() < 1e-9,
                "{name} in_out({t}) = {} vs {expected}",
                ease_in_out(t)
            );
        }
    }
}

#[test]
fn smooth_families_are_non_decreasing() {
    let monotonic: [fn(f64) -> f64; 16] = [
        in_sine, out_sine, in_quad, out_quad, in_cubic, out_cubic, in_quart, out_quart,
        in_quint, out_quint, in_expo, out_expo, in_circ, out_circ, in_out_quad, in_out_expo,
    ];
    for f in monotonic {
        let mut prev = f(0.0);
        for t in grid().skip(1) {
            let y = f(t);
            assert!(y >= prev, "decreased at {t}: {prev} -> {y}");
            prev = y;
        }
    }
}

#[test]
fn back_and_elastic_overshoot() {
    assert!(grid().any(|t| in_back(t) < 0.0));
    assert!(grid().any(|t| out_back(t) > 1.0));
    assert!(grid().any(|t| in_elastic(t) < 0.0));
    assert!(grid().any(|t| out_elastic(t) > 1.0));
}

#[test]
fn bounce_touches_one_at_each_threshold() {
    for t in [4.0 / 11.0, 8.0 / 11.0, 10.0 / 11.0] {
        assert!((out_bounce(t) - 1.0).abs() < 1e-9, "out_bounce({t})");
    }
    assert!((out_bounce(6.0 / 11.0) - 0.75).abs() < 1e-12);
    assert!((out_bounce(9.0 / 11.0) - 15.0 / 16.0).abs() < 1e-12);
}

#[test]
fn sine_presets_match_closed_forms() {
    use std::f64::consts::PI;
    for t in grid() {
        assert!((in_sine(t) - (1.0 - (t * PI / 2.0).cos())).abs() < 1e-12);
        assert!((out_sine(t) - (t * PI / 2.0).sin()).abs() < 1e-12);
        assert!((in_out_sine(t) - (0.5 - 0.5 * (t * PI).cos())).abs() < 1e-12);
    }
}

#[test]
fn default_sine_wave_is_one_full_cycle() {
    let wave = SineWave::default();
    assert_eq!(wave.eval(0.0), 0.0);
    assert!((wave.eval(0.25) - 1.0).abs() < 1e-12);
    assert!(wave.eval(0.5).abs() < 1e-12);
    assert!((wave.eval(0.75) + 1.0).abs() < 1e-12);

    let shifted = SineWave {
        amplitude: 2.0,
        y_offset: 3.0,
        ..SineWave::default()
    };
    assert!((shifted.eval(0.25) - 5.0).abs() < 1e-12);
}

#[test]
fn elastic_settles_with_decaying_wobble() {
    let near_end = (0..100)
        .map(|i| (out_elastic(0.7 + f64::from(i) * 0.003) - 1.0).abs())
        .fold(0.0, f64::max);
    let early = (0..100)
        .map(|i| (out_elastic(0.05 + f64::from(i) * 0.003) - 1.0).abs())
        .fold(0.0, f64::max);
    assert!(near_end < early);
    assert!(near_end < 0.01);
}
