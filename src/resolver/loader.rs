//! Width-directed loader URLs for responsive-image consumers.
//!
//! The media endpoint scales by max width (`mw`), never exact width: an
//! exact `w` would force dimensions and break aspect-ratio scaling. The
//! loader therefore expresses the requested width as `mw` and strips any
//! `w` it finds.

use crate::error::MediaError;
use url::Url;

/// Build a loader URL for `src` at the requested display width.
///
/// - an already-absolute `src` is used as-is;
/// - a relative `src` is joined onto `config_path` (the configured absolute
///   media base); a missing base is a configuration error, never a silent
///   fallback;
/// - an existing `mw` parameter wins over `width`;
/// - any `w` parameter is removed.
pub fn loader_url(
    config_path: Option<&str>,
    src: &str,
    width: u32,
) -> Result<Url, MediaError> {
    let mut url = match Url::parse(src) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = config_path
                .filter(|p| !p.is_empty())
                .ok_or(MediaError::LoaderPathMissing)?;
            let absolute = format!("{base}{src}");
            Url::parse(&absolute).map_err(|source| MediaError::LoaderUrl {
                src: absolute,
                source,
            })?
        }
        Err(source) => {
            return Err(MediaError::LoaderUrl {
                src: src.to_string(),
                source,
            });
        }
    };

    let mw = url
        .query_pairs()
        .find(|(key, _)| key == "mw")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_else(|| width.to_string());

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "w" && key != "mw")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut query = url.query_pairs_mut();
        query.clear();
        for (key, value) in &kept {
            query.append_pair(key, value);
        }
        query.append_pair("mw", &mw);
    }

    Ok(url)
}
