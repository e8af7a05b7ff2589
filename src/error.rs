//! Error types for media resolution.
//!
//! All failures here are caller/configuration errors surfaced synchronously.
//! Malformed or empty field data is never an error: the CMS frequently ships
//! incomplete content in draft states, so "nothing to render" is a normal
//! outcome (`RenderDecision::Empty`), not a failure.

use crate::config::ConfigError;
use thiserror::Error;

/// Media resolution errors.
#[derive(Debug, Error)]
pub enum MediaError {
    /// A passthrough attribute collides with one the resolver owns.
    ///
    /// `src` is always derived from the media field and the loader reference
    /// is fixed, so neither may be supplied by the caller.
    #[error(
        "conflicting passthrough attribute `{0}`: `src` and `loader` are \
         derived from the media field and cannot be supplied by the caller"
    )]
    ConflictingAttrs(&'static str),

    /// A relative media source needs an absolute loader base path, and none
    /// is configured.
    #[error(
        "loader base path is not configured; a relative media source cannot \
         form an absolute URL (set `loader.path` in the media config)"
    )]
    LoaderPathMissing,

    /// The loader could not build a URL from the given source.
    #[error("failed to build loader URL from `{src}`")]
    LoaderUrl {
        src: String,
        #[source]
        source: url::ParseError,
    },

    /// Configuration loading or validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
