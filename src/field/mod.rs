//! Media field data model.
//!
//! The layout service delivers image fields in two shapes with no schema
//! tag: a wrapper (`{ value, editable }`) or the resolved value itself
//! (`{ src, ... }`). [`ImageFieldData`] captures both and classifies the
//! payload once, up front, into a canonical [`MediaShape`] so the resolver
//! never branches on optional keys again.

mod attrs;

pub use attrs::Attributes;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A resolved media descriptor: the canonical asset path plus any extra
/// attributes the CMS attached (`alt`, `width`, custom data attributes, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageFieldValue {
    /// Canonical asset path (`/-/media/...`, `/-assets/...`, or absolute).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Passthrough attributes for the rendered `<img>` tag.
    #[serde(flatten)]
    pub attrs: Attributes,
}

impl ImageFieldValue {
    /// Descriptor with just a source path.
    pub fn with_src(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            attrs: Attributes::new(),
        }
    }
}

/// An image field payload as delivered by the layout service.
///
/// All keys are optional; which ones are present decides the shape:
/// - `editable` - pre-rendered experience-editor HTML
/// - `value` - wrapped media descriptor
/// - `src` at the top level - the caller passed a raw descriptor where a
///   wrapper was expected (accepted on purpose, see [`Self::classify`])
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageFieldData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ImageFieldValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Remaining top-level keys. Only meaningful for the raw shape; for
    /// wrapped fields the descriptor's own attributes are what render.
    #[serde(flatten)]
    pub attrs: Attributes,
}

impl ImageFieldData {
    /// Wrap a resolved descriptor.
    pub fn from_value(value: ImageFieldValue) -> Self {
        Self {
            value: Some(value),
            ..Default::default()
        }
    }

    /// Field carrying experience-editor markup.
    pub fn from_editable(html: impl Into<String>) -> Self {
        Self {
            editable: Some(html.into()),
            ..Default::default()
        }
    }

    /// Classify the payload into its canonical shape.
    ///
    /// Precedence:
    /// 1. non-empty `editable`, when `editable_allowed` - editor markup wins
    ///    and is emitted verbatim
    /// 2. top-level `src` - raw descriptor passed in place of a wrapper;
    ///    it wins over `value` (intentional permissive surface)
    /// 3. `value` - the wrapped descriptor
    /// 4. otherwise [`MediaShape::Empty`]
    ///
    /// An empty `editable` string counts as absent.
    pub fn classify(&self, editable_allowed: bool) -> MediaShape<'_> {
        if editable_allowed
            && let Some(editable) = self.editable.as_deref()
            && !editable.is_empty()
        {
            return MediaShape::Editor(editable);
        }

        if self.src.is_some() {
            return MediaShape::Image(Cow::Owned(ImageFieldValue {
                src: self.src.clone(),
                attrs: self.attrs.clone(),
            }));
        }

        if let Some(value) = &self.value {
            return MediaShape::Image(Cow::Borrowed(value));
        }

        MediaShape::Empty
    }
}

/// Canonical field shape, produced once per resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaShape<'a> {
    /// Nothing usable in the payload.
    Empty,
    /// Experience-editor markup to inject verbatim.
    Editor(&'a str),
    /// A media descriptor to resolve into an image tag. Borrowed for the
    /// wrapped shape, owned when rebuilt from a raw payload.
    Image(Cow<'a, ImageFieldValue>),
}
