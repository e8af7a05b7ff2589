//! Media URL finalization.
//!
//! Combines the prefix rewrite with transformation-parameter query merging.
//! Scheme and host of absolute URLs are never touched; relative inputs come
//! back relative. Unparseable garbage is passed through with only the
//! string-level prefix rewrite applied, since CMS draft content is allowed
//! to be incomplete.

use super::params::ImageParams;
use super::prefix::MediaPrefixRule;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::form_urlencoded;

/// Characters percent-encoded in the path portion (the URL standard's path set;
/// existing `%XX` sequences are left alone).
const PATH_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'#');

/// Finalize a media URL: rewrite the path prefix, then merge transformation
/// parameters into the query string.
///
/// - `params: None` (or empty parameters) leaves the existing query string
///   byte-for-byte intact.
/// - parameters replace existing same-named query entries; other existing
///   entries keep their position, new parameters append in their own order.
/// - `prefix: None` applies the stock `/-/media/` rule.
pub fn update_image_url(
    src: &str,
    params: Option<&ImageParams>,
    prefix: Option<&MediaPrefixRule>,
) -> String {
    let rule = prefix.unwrap_or_else(|| MediaPrefixRule::default_rule());

    let (without_fragment, fragment) = split_once_at(src, '#');
    let (base, query) = split_once_at(without_fragment, '?');
    let (head, path) = split_authority(base);

    let path = rule.rewrite(path);
    let path = utf8_percent_encode(&path, PATH_SET).to_string();

    let param_pairs = params.map(ImageParams::query_pairs).unwrap_or_default();

    let mut out = String::with_capacity(src.len() + 16);
    out.push_str(head);
    out.push_str(&path);

    if param_pairs.is_empty() {
        // Nothing to merge: keep the original query untouched
        if let Some(query) = query {
            out.push('?');
            out.push_str(query);
        }
    } else {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(query) = query {
            for (key, value) in form_urlencoded::parse(query.as_bytes()) {
                if param_pairs.iter().any(|(pk, _)| pk.as_ref() == key.as_ref()) {
                    continue;
                }
                serializer.append_pair(&key, &value);
            }
        }
        for (key, value) in &param_pairs {
            serializer.append_pair(key, value);
        }
        out.push('?');
        out.push_str(&serializer.finish());
    }

    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }

    out
}

/// Split at the first occurrence of `sep`; the separator itself is dropped.
fn split_once_at(s: &str, sep: char) -> (&str, Option<&str>) {
    match s.split_once(sep) {
        Some((head, tail)) => (head, Some(tail)),
        None => (s, None),
    }
}

/// Split `scheme://authority` off the front, leaving the path.
///
/// Returns `("", s)` for relative inputs. A valid scheme needs at least one
/// character and only ASCII alphanumerics, `+`, `-`, or `.` before `://`.
fn split_authority(s: &str) -> (&str, &str) {
    let Some(scheme_end) = s.find("://") else {
        return ("", s);
    };
    let scheme = &s[..scheme_end];
    if scheme.is_empty()
        || !scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return ("", s);
    }

    let after_scheme = scheme_end + 3;
    match s[after_scheme..].find('/') {
        Some(slash) => s.split_at(after_scheme + slash),
        None => (s, ""),
    }
}
