//! Media reference resolution.
//!
//! Turns a shape-polymorphic image field payload into a [`RenderDecision`]:
//! nothing, verbatim experience-editor markup, or a finalized `<img>`
//! attribute set. Pure and synchronous; inputs are borrowed, never retained
//! or mutated, and identical inputs always produce identical output.

mod loader;

pub use loader::loader_url;

use crate::debug;
use crate::error::MediaError;
use crate::field::{Attributes, ImageFieldData, MediaShape};
use crate::media::{ImageParams, MediaPrefixRule, get_src_set, update_image_url};

/// Attributes the resolver owns; rejecting them up front keeps the caller
/// from silently losing the resolved `src` or the loader contract.
const RESERVED_ATTRS: [&str; 2] = ["src", "loader"];

/// 1x1 transparent PNG, base64. Injected as the deferred-loading placeholder
/// whenever the caller supplies none; the exact bytes matter because visual
/// regression tooling compares against this literal.
pub const TRANSPARENT_PIXEL: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// What the host framework should render for a media field.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderDecision {
    /// Nothing renders (absent or contentless field).
    Empty,
    /// Experience-editor HTML, injected verbatim. The editor already encodes
    /// final URLs, so no parameter rewriting applies.
    EditorMarkup(String),
    /// Finalized attribute set for an image tag.
    Image(Attributes),
}

/// Per-call resolution options.
///
/// Everything is borrowed per render pass; the resolver holds no state
/// between calls.
#[derive(Debug, Clone)]
pub struct ResolveOptions<'a> {
    /// Allow experience-editor markup when the field carries it.
    /// Defaults to true; set false to force normal rendering while editing.
    pub editable: bool,
    /// Transformation parameters appended to the media URL.
    pub params: Option<&'a ImageParams>,
    /// Prefix rewrite rule; `None` uses the stock `/-/media/` rule.
    pub prefix: Option<&'a MediaPrefixRule>,
    /// Per-entry parameters for a generated `srcSet` attribute.
    pub src_set: Option<&'a [ImageParams]>,
    /// Caller-supplied attributes merged over the field's own.
    /// Must not contain `src` or `loader`.
    pub attrs: Attributes,
}

impl Default for ResolveOptions<'_> {
    fn default() -> Self {
        Self {
            editable: true,
            params: None,
            prefix: None,
            src_set: None,
            attrs: Attributes::new(),
        }
    }
}

/// Resolve a media field into a render decision.
///
/// Resolution order:
/// 1. reject reserved passthrough attributes (configuration error),
/// 2. absent/contentless field -> [`RenderDecision::Empty`],
/// 3. editor markup (when allowed) -> verbatim [`RenderDecision::EditorMarkup`],
/// 4. otherwise merge field and passthrough attributes, inject the
///    [`TRANSPARENT_PIXEL`] placeholder if missing, finalize the URL and
///    return [`RenderDecision::Image`].
///
/// A field whose descriptor has no usable `src` resolves to `Empty`, not an
/// error: incomplete draft content is normal.
pub fn resolve(
    field: Option<&ImageFieldData>,
    opts: &ResolveOptions<'_>,
) -> Result<RenderDecision, MediaError> {
    for reserved in RESERVED_ATTRS {
        if opts.attrs.contains(reserved) {
            return Err(MediaError::ConflictingAttrs(reserved));
        }
    }

    let Some(field) = field else {
        debug!("resolve"; "no field supplied, nothing to render");
        return Ok(RenderDecision::Empty);
    };

    match field.classify(opts.editable) {
        MediaShape::Empty => {
            debug!("resolve"; "field carries no editable markup, value, or src");
            Ok(RenderDecision::Empty)
        }
        MediaShape::Editor(html) => Ok(RenderDecision::EditorMarkup(html.to_string())),
        MediaShape::Image(img) => {
            let Some(src) = img.src.as_deref().filter(|s| !s.is_empty()) else {
                debug!("resolve"; "media descriptor has no src, nothing to render");
                return Ok(RenderDecision::Empty);
            };

            let mut attrs = img.attrs.merged_with(&opts.attrs);

            if let Some(entries) = opts.src_set {
                let set = get_src_set(src, entries, opts.params, opts.prefix);
                if !set.is_empty() {
                    attrs.set("srcSet", set);
                }
            }

            if !attrs.contains("blurDataURL") {
                attrs.set("blurDataURL", TRANSPARENT_PIXEL);
            }

            attrs.set("src", update_image_url(src, opts.params, opts.prefix));

            Ok(RenderDecision::Image(attrs))
        }
    }
}
