/// Convenience result type used across keytween.
pub type TweenResult<T> = Result<T, TweenError>;

/// Top-level error taxonomy used by tween configuration APIs.
#[derive(thiserror::Error, Debug)]
pub enum TweenError {
    /// Fewer than two of `start`, `end`, `delta` are set.
    #[error(
        "unresolvable endpoints: at least two of start, end, delta must be set (have {present})"
    )]
    UnresolvableEndpoints {
        /// Comma-separated names of the inputs that were present, or `none`.
        present: String,
    },

    /// A requested easing library entry does not exist.
    #[error("unknown easing function: '{0}'")]
    UnknownEasing(String),

    /// A build was requested before any easing function was chosen.
    #[error("no easing function set")]
    MissingEasing,

    /// Invalid user-provided scalar or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration or keyframe tables.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TweenError {
    /// Build a [`TweenError::UnresolvableEndpoints`] from the presence of each input.
    pub fn unresolvable(start: bool, end: bool, delta: bool) -> Self {
        let names: Vec<&str> = [("start", start), ("end", end), ("delta", delta)]
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect();
        let present = if names.is_empty() {
            "none".to_owned()
        } else {
            names.join(", ")
        };
        Self::UnresolvableEndpoints { present }
    }

    /// Build a [`TweenError::UnknownEasing`] value.
    pub fn unknown_easing(name: impl Into<String>) -> Self {
        Self::UnknownEasing(name.into())
    }

    /// Build a [`TweenError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TweenError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TweenError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
