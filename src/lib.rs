//! jssmedia - media reference resolution for layout-service front-ends.
//!
//! The layout service describes an image as a shape-polymorphic field: a
//! resolved descriptor, a wrapper carrying the descriptor plus optional
//! experience-editor markup, or nothing at all. This crate turns such a
//! field into what should actually render:
//!
//! - [`resolver::resolve`] classifies the field and produces a
//!   [`resolver::RenderDecision`] (nothing / verbatim editor HTML / a
//!   finalized image attribute set),
//! - [`media::update_image_url`] rewrites asset path prefixes
//!   (`/-assets/...` -> `/-/jssmedia/...`) and appends transformation
//!   parameters as query strings,
//! - [`resolver::loader_url`] builds width-directed URLs for
//!   responsive-image consumers (max-width `mw` contract, never exact `w`),
//! - [`render::to_html`] is the single translation step to markup for hosts
//!   without a structured rendering tree.
//!
//! Everything is pure and synchronous: no I/O, no network, no state between
//! calls. The only I/O lives in [`config`], which loads the optional TOML
//! configuration (loader base path, custom prefix rule, default parameters).
//!
//! # Example
//!
//! ```
//! use jssmedia::{ImageFieldData, ImageParams, RenderDecision, ResolveOptions, resolve};
//!
//! let field: ImageFieldData = serde_json::from_str(
//!     r#"{"value": {"src": "/-/media/hero.ashx", "alt": "hero"}}"#,
//! )?;
//! let params = ImageParams::max_width(1200);
//! let opts = ResolveOptions { params: Some(&params), ..Default::default() };
//!
//! match resolve(Some(&field), &opts)? {
//!     RenderDecision::Image(attrs) => {
//!         assert_eq!(
//!             attrs.get("src").and_then(|v| v.as_str()),
//!             Some("/-/jssmedia/hero.ashx?mw=1200"),
//!         );
//!     }
//!     _ => unreachable!(),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod logger;
pub mod media;
pub mod render;
pub mod resolver;
pub mod utils;

pub use config::{ConfigError, MediaConfig};
pub use error::MediaError;
pub use field::{Attributes, ImageFieldData, ImageFieldValue, MediaShape};
pub use media::{ImageParams, MediaPrefixRule, get_src_set, update_image_url};
pub use resolver::{
    RenderDecision, ResolveOptions, TRANSPARENT_PIXEL, loader_url, resolve,
};
