//! keytween precomputes keyframe tables for property tweens.
//!
//! A tween is described by two of `start`, `end`, `delta`, an easing curve from the
//! built-in library, and a duration. The engine resolves the endpoints, samples the curve at
//! a fixed rate (60 samples per second) and hands back a [`KeyframeTable`] of
//! `(normalized time, value)` pairs for a presentation layer to play back.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `{start?, end?, delta?} -> ResolvedEndpoints` (see [`Endpoints`])
//! 2. **Sample**: `ResolvedEndpoints + Ease + duration -> KeyframeTable` (see [`sample`])
//!
//! [`TweenSpec`] runs both steps after every setter; [`TweenBuilder`] and [`TweenConfig`]
//! configure everything first and run them once.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs produce bit-identical tables.
//! - **Unclamped progress**: overshooting curves (`back`, `elastic`) produce values
//!   outside `[start, end]`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;

pub use animation::config::{EaseRef, TweenConfig};
pub use animation::curves::{BACK_OVERSHOOT, ELASTIC_WOBBLE, SineWave};
pub use animation::ease::Ease;
pub use animation::endpoints::{Endpoints, ResolvedEndpoints, resolve, try_resolve};
pub use animation::sampler::{Keyframe, KeyframeTable, sample};
pub use animation::tween::{TweenBuilder, TweenSpec};
pub use foundation::core::SampleRate;
pub use foundation::error::{TweenError, TweenResult};
