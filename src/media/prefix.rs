//! Media URL prefix rewriting.
//!
//! Asset paths arrive under a source-specific prefix (`/-/media/`,
//! `/-assets/`, ...) and must be requested from the media handler under
//! `/-/jssmedia/` (or `/~/jssmedia/` for sites using the tilde sigil). The
//! sigil is captured from the matched prefix so both variants map correctly.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Media handler path segment the matched prefix is rewritten to.
const MEDIA_SEGMENT: &str = "jssmedia";

/// Default prefix pattern: `/-/media/` or `/~/media/`, case-insensitive.
const DEFAULT_PATTERN: &str = "(?i)/([-~])/media/";

static DEFAULT_RULE: LazyLock<MediaPrefixRule> =
    LazyLock::new(|| MediaPrefixRule::new(DEFAULT_PATTERN).unwrap());

/// A prefix rewrite rule.
///
/// The pattern's first capture group must capture the sigil character
/// (`-` or `~`). The whole match is replaced by `/{sigil}/jssmedia/`.
/// Patterns without a capture group fall back to the `-` sigil.
#[derive(Debug, Clone)]
pub struct MediaPrefixRule {
    regex: Regex,
}

impl MediaPrefixRule {
    /// Compile a rule from a regex pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// The stock rule (`/-/media/` and `/~/media/`).
    pub fn default_rule() -> &'static MediaPrefixRule {
        &DEFAULT_RULE
    }

    /// The pattern this rule was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the pattern captures the sigil.
    pub fn has_sigil_group(&self) -> bool {
        self.regex.captures_len() > 1
    }

    /// Rewrite the first matching prefix in `path`.
    ///
    /// Returns the path unchanged (borrowed) when the rule does not match.
    pub fn rewrite<'a>(&self, path: &'a str) -> Cow<'a, str> {
        let Some(caps) = self.regex.captures(path) else {
            return Cow::Borrowed(path);
        };
        let Some(matched) = caps.get(0) else {
            return Cow::Borrowed(path);
        };
        let sigil = caps.get(1).map_or("-", |s| s.as_str());

        let mut rewritten =
            String::with_capacity(path.len() + MEDIA_SEGMENT.len() + 4);
        rewritten.push_str(&path[..matched.start()]);
        rewritten.push('/');
        rewritten.push_str(sigil);
        rewritten.push('/');
        rewritten.push_str(MEDIA_SEGMENT);
        rewritten.push('/');
        rewritten.push_str(&path[matched.end()..]);
        Cow::Owned(rewritten)
    }
}

impl Default for MediaPrefixRule {
    fn default() -> Self {
        Self::default_rule().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_dash() {
        let rule = MediaPrefixRule::default_rule();
        assert_eq!(
            rule.rewrite("/-/media/img.ashx"),
            "/-/jssmedia/img.ashx"
        );
    }

    #[test]
    fn test_default_rule_tilde() {
        let rule = MediaPrefixRule::default_rule();
        assert_eq!(
            rule.rewrite("/~/media/img.ashx"),
            "/~/jssmedia/img.ashx"
        );
    }

    #[test]
    fn test_default_rule_case_insensitive() {
        let rule = MediaPrefixRule::default_rule();
        assert_eq!(
            rule.rewrite("/-/MEDIA/img.ashx"),
            "/-/jssmedia/img.ashx"
        );
    }

    #[test]
    fn test_custom_assets_rule() {
        let rule = MediaPrefixRule::new("/([-~])assets/").unwrap();
        assert_eq!(
            rule.rewrite("/-assets/website/img.png"),
            "/-/jssmedia/website/img.png"
        );
        assert_eq!(
            rule.rewrite("/~assets/website/img.png"),
            "/~/jssmedia/website/img.png"
        );
    }

    #[test]
    fn test_no_match_is_borrowed() {
        let rule = MediaPrefixRule::default_rule();
        match rule.rewrite("/images/logo.png") {
            Cow::Borrowed(s) => assert_eq!(s, "/images/logo.png"),
            Cow::Owned(_) => panic!("no-match must not allocate"),
        }
    }

    #[test]
    fn test_no_capture_group_falls_back_to_dash() {
        let rule = MediaPrefixRule::new("/media/").unwrap();
        assert!(!rule.has_sigil_group());
        assert_eq!(rule.rewrite("/media/a.png"), "/-/jssmedia/a.png");
    }

    #[test]
    fn test_rewrite_only_first_match() {
        let rule = MediaPrefixRule::default_rule();
        assert_eq!(
            rule.rewrite("/-/media/nested/-/media/a.png"),
            "/-/jssmedia/nested/-/media/a.png"
        );
    }
}
