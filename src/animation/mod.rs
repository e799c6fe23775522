pub(crate) mod config;
pub(crate) mod curves;
pub(crate) mod ease;
pub(crate) mod endpoints;
pub(crate) mod sampler;
pub(crate) mod tween;
