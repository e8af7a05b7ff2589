//! Media configuration.
//!
//! Hosting applications configure the resolver through a small TOML file:
//!
//! ```toml
//! [loader]
//! path = "https://cm.example.net"   # absolute base for relative sources
//!
//! [prefix]
//! pattern = "/([-~])assets/"        # custom prefix rewrite (optional)
//!
//! [params]                           # default transformation parameters
//! mw = 1600
//! ```
//!
//! Unknown keys are reported as warnings and ignored, so a config written
//! for a newer version still loads. Validation failures are hard errors:
//! a misconfigured resolver should fail the render attempt, not degrade.

use crate::log;
use crate::media::{ImageParams, MediaPrefixRule};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// `[loader]` section: the base the width-directed loader joins relative
/// sources onto.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Absolute URL prefix (scheme + host, optionally a path).
    pub path: Option<String>,
}

/// `[prefix]` section: custom prefix rewrite rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixConfig {
    /// Regex whose first capture group captures the sigil (`-` or `~`).
    pub pattern: Option<String>,
}

/// Media resolver configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    pub loader: LoaderConfig,
    pub prefix: PrefixConfig,
    /// Default transformation parameters applied when the caller supplies
    /// none of its own.
    pub params: ImageParams,
}

impl MediaConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config = Self::parse(&raw)?;
        log!("config"; "loaded media config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate config text.
    ///
    /// Unknown keys are logged as warnings (forward compatibility) rather
    /// than rejected.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let deserializer = toml::Deserializer::new(raw);
        let config: MediaConfig =
            serde_ignored::deserialize(deserializer, |unknown| {
                log!("warning"; "unknown config key `{unknown}`, ignoring");
            })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = self.loader.path.as_deref() {
            let url = Url::parse(path).map_err(|e| {
                ConfigError::Validation(format!(
                    "loader.path: `{path}` is not an absolute URL ({e})"
                ))
            })?;
            if url.cannot_be_a_base() {
                return Err(ConfigError::Validation(format!(
                    "loader.path: `{path}` cannot serve as a base URL"
                )));
            }
        }

        if let Some(pattern) = self.prefix.pattern.as_deref() {
            let rule = MediaPrefixRule::new(pattern).map_err(|e| {
                ConfigError::Validation(format!(
                    "prefix.pattern: `{pattern}` does not compile ({e})"
                ))
            })?;
            if !rule.has_sigil_group() {
                return Err(ConfigError::Validation(format!(
                    "prefix.pattern: `{pattern}` needs a capture group for the \
                     sigil, e.g. `/([-~])assets/`"
                )));
            }
        }

        Ok(())
    }

    /// The compiled prefix rule, when one is configured.
    ///
    /// Returns `None` for an unconfigured or (post-validation impossible)
    /// uncompilable pattern; callers then fall back to the stock rule.
    pub fn prefix_rule(&self) -> Option<MediaPrefixRule> {
        self.prefix
            .pattern
            .as_deref()
            .and_then(|pattern| MediaPrefixRule::new(pattern).ok())
    }

    /// Loader base path for [`crate::resolver::loader_url`].
    pub fn loader_path(&self) -> Option<&str> {
        self.loader.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_empty_is_default() {
        let config = MediaConfig::parse("").unwrap();
        assert_eq!(config, MediaConfig::default());
        assert!(config.prefix_rule().is_none());
        assert!(config.loader_path().is_none());
    }

    #[test]
    fn test_parse_full() {
        let config = MediaConfig::parse(
            "[loader]\npath = \"https://cm.example.net\"\n\n\
             [prefix]\npattern = \"/([-~])assets/\"\n\n\
             [params]\nmw = 1600\n",
        )
        .unwrap();

        assert_eq!(config.loader_path(), Some("https://cm.example.net"));
        assert_eq!(config.params.mw, Some(1600));

        let rule = config.prefix_rule().unwrap();
        assert_eq!(
            rule.rewrite("/-assets/img.png"),
            "/-/jssmedia/img.png"
        );
    }

    #[test]
    fn test_parse_unknown_keys_tolerated() {
        let config =
            MediaConfig::parse("[loader]\npath = \"https://x.example\"\nfuture_knob = 1\n")
                .unwrap();
        assert_eq!(config.loader_path(), Some("https://x.example"));
    }

    #[test]
    fn test_validate_rejects_relative_loader_path() {
        let err = MediaConfig::parse("[loader]\npath = \"/just/a/path\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(format!("{err}").contains("loader.path"));
    }

    #[test]
    fn test_validate_rejects_opaque_loader_path() {
        let err = MediaConfig::parse("[loader]\npath = \"mailto:x@example.net\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_bad_pattern() {
        let err = MediaConfig::parse("[prefix]\npattern = \"([unclosed\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = MediaConfig::parse("[prefix]\npattern = \"/media/\"\n").unwrap_err();
        assert!(format!("{err}").contains("capture group"));
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        let err = MediaConfig::parse("not toml at all [").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[params]\nw = 10\n").unwrap();

        let config = MediaConfig::load(file.path()).unwrap();
        assert_eq!(config.params.w, Some(10));
    }

    #[test]
    fn test_load_missing_file() {
        let err = MediaConfig::load(Path::new("/nonexistent/media.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }
}
