//! Responsive `srcSet` generation.
//!
//! Builds a `srcset` attribute value from per-entry transformation
//! parameters: each entry is finalized through [`update_image_url`] and
//! paired with a width descriptor. Entries that set neither `w` nor `mw`
//! have no width to describe and are skipped.

use super::params::ImageParams;
use super::prefix::MediaPrefixRule;
use super::update::update_image_url;

/// Build a `srcset` value (`"url1 640w, url2 1024w"`).
///
/// `base` parameters apply to every entry, with the entry's own parameters
/// layered on top. The descriptor uses the entry's `w` when set, else `mw`.
/// Returns an empty string when no entry qualifies.
pub fn get_src_set(
    src: &str,
    entries: &[ImageParams],
    base: Option<&ImageParams>,
    prefix: Option<&MediaPrefixRule>,
) -> String {
    let mut out = String::new();

    for entry in entries {
        let merged = match base {
            Some(base) => base.overlay(entry),
            None => entry.clone(),
        };
        let Some(width) = merged.w.or(merged.mw) else {
            continue;
        };

        if !out.is_empty() {
            out.push_str(", ");
        }
        out.push_str(&update_image_url(src, Some(&merged), prefix));
        out.push(' ');
        out.push_str(&width.to_string());
        out.push('w');
    }

    out
}
