use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    animation::{
        ease::Ease,
        tween::{TweenBuilder, TweenSpec},
    },
    foundation::error::{TweenError, TweenResult},
};

/// Serialized tween description, e.g.
/// `{"start": 0, "end": 10, "duration": 0.5, "ease": "out_bounce"}`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TweenConfig {
    /// Start value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    /// End value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    /// Offset between start and end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    /// Duration in seconds; [`TweenSpec::DEFAULT_DURATION`] when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Easing function.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<EaseRef>,
}

/// Reference to a library entry: a name, or an inline value such as
/// `{"sine": {"period": 2.0}}`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(
    untagged,
    expecting = "an easing name such as \"out_bounce\" or an inline value such as {\"sine\": {\"period\": 2.0}}"
)]
pub enum EaseRef {
    /// Library name such as `out_bounce`.
    Named(String),
    /// Inline value.
    Inline(Ease),
}

impl EaseRef {
    /// Look the reference up in the library.
    pub fn resolve(&self) -> TweenResult<Ease> {
        match self {
            Self::Named(name) => name.parse(),
            Self::Inline(ease) => Ok(*ease),
        }
    }
}

impl From<Ease> for EaseRef {
    fn from(ease: Ease) -> Self {
        match ease {
            Ease::Sine(_) => Self::Inline(ease),
            named => Self::Named(named.name().to_owned()),
        }
    }
}

impl TweenConfig {
    /// Parse a config from JSON text.
    pub fn from_json_str(s: &str) -> TweenResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read a config from a JSON file.
    pub fn from_path(path: &Path) -> TweenResult<Self> {
        let f = File::open(path).with_context(|| format!("open tween config '{}'", path.display()))?;
        let cfg = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| TweenError::serde(format!("{}: {e}", path.display())))?;
        Ok(cfg)
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> TweenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve the easing reference, if any.
    pub fn ease(&self) -> TweenResult<Option<Ease>> {
        self.ease.as_ref().map(EaseRef::resolve).transpose()
    }

    /// Translate into a builder. Fails only on unknown easing names.
    pub fn to_builder(&self) -> TweenResult<TweenBuilder> {
        let mut builder = TweenSpec::builder();
        if let Some(start) = self.start {
            builder = builder.start(start);
        }
        if let Some(end) = self.end {
            builder = builder.end(end);
        }
        if let Some(delta) = self.delta {
            builder = builder.delta(delta);
        }
        if let Some(duration) = self.duration {
            builder = builder.duration(duration);
        }
        if let Some(ease) = self.ease()? {
            builder = builder.ease(ease);
        }
        Ok(builder)
    }

    /// Validate and build the tween in one pass.
    pub fn build(&self) -> TweenResult<TweenSpec> {
        self.to_builder()?.build()
    }
}

impl From<&TweenSpec> for TweenConfig {
    fn from(spec: &TweenSpec) -> Self {
        Self {
            start: spec.start(),
            end: spec.end(),
            delta: spec.delta(),
            duration: Some(spec.duration()),
            ease: spec.ease().map(EaseRef::from),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/config.rs"]
mod tests;
