//! Media URL machinery: transformation parameters, prefix rules, URL
//! finalization, and srcset generation.

mod params;
mod prefix;
mod srcset;
mod update;

pub use params::{ImageParams, QueryPairs};
pub use prefix::MediaPrefixRule;
pub use srcset::get_src_set;
pub use update::update_image_url;
