//! Server-side image transformation parameters.
//!
//! The media endpoint understands a set of short query keys (`w`, `h`, `mw`,
//! `mh`, `iar`, `as`, `sc`) plus arbitrary extensions. Parameters are pure
//! data here; [`crate::media::update_image_url`] turns them into a query
//! string.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use smallvec::SmallVec;
use std::borrow::Cow;

/// Query pairs staged for URL serialization.
pub type QueryPairs<'a> = SmallVec<[(Cow<'a, str>, String); 8]>;

/// Image transformation parameters.
///
/// Unset parameters are omitted from the query string. Extensions beyond the
/// typed keys are kept in insertion order so the finalized URL is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageParams {
    /// Fixed width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    /// Fixed height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    /// Max width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mw: Option<u32>,
    /// Max height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mh: Option<u32>,
    /// Ignore aspect ratio (1 or 0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iar: Option<u8>,
    /// Allow stretch (1 or 0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#as: Option<u8>,
    /// Scale factor (media endpoint default is 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sc: Option<f32>,

    /// Arbitrary extension parameters (string or number values).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ImageParams {
    /// Parameters with only a max width, the common responsive case.
    pub fn max_width(mw: u32) -> Self {
        Self {
            mw: Some(mw),
            ..Default::default()
        }
    }

    /// Parameters with only a fixed width (srcset entries).
    pub fn width(w: u32) -> Self {
        Self {
            w: Some(w),
            ..Default::default()
        }
    }

    /// True when no parameter is set at all.
    pub fn is_empty(&self) -> bool {
        self.w.is_none()
            && self.h.is_none()
            && self.mw.is_none()
            && self.mh.is_none()
            && self.iar.is_none()
            && self.r#as.is_none()
            && self.sc.is_none()
            && self.extra.is_empty()
    }

    /// Layer `other` on top of `self`, producing new parameters.
    ///
    /// Set fields of `other` win; extensions are merged with `other` taking
    /// precedence on key collisions.
    pub fn overlay(&self, other: &ImageParams) -> ImageParams {
        let mut extra = self.extra.clone();
        for (key, value) in &other.extra {
            extra.insert(key.clone(), value.clone());
        }
        ImageParams {
            w: other.w.or(self.w),
            h: other.h.or(self.h),
            mw: other.mw.or(self.mw),
            mh: other.mh.or(self.mh),
            iar: other.iar.or(self.iar),
            r#as: other.r#as.or(self.r#as),
            sc: other.sc.or(self.sc),
            extra,
        }
    }

    /// Stage the set parameters as query pairs: typed keys first, then
    /// extensions in insertion order.
    ///
    /// Extension values that have no query-string form (arrays, objects,
    /// null) are skipped; booleans map to the endpoint's `1`/`0` convention.
    pub fn query_pairs(&self) -> QueryPairs<'_> {
        let mut pairs = QueryPairs::new();

        macro_rules! push_typed {
            ($field:expr, $key:literal) => {
                if let Some(v) = $field {
                    pairs.push((Cow::Borrowed($key), v.to_string()));
                }
            };
        }

        push_typed!(self.w, "w");
        push_typed!(self.h, "h");
        push_typed!(self.mw, "mw");
        push_typed!(self.mh, "mh");
        push_typed!(self.iar, "iar");
        push_typed!(self.r#as, "as");
        push_typed!(self.sc, "sc");

        for (key, value) in &self.extra {
            let rendered = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
                _ => continue,
            };
            pairs.push((Cow::Borrowed(key.as_str()), rendered));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_pairs_omit_unset() {
        let params = ImageParams {
            mw: Some(640),
            sc: Some(1.5),
            ..Default::default()
        };
        let pairs: Vec<(String, String)> = params
            .query_pairs()
            .into_iter()
            .map(|(k, v)| (k.into_owned(), v))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("mw".to_string(), "640".to_string()),
                ("sc".to_string(), "1.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_extension_order() {
        let mut params = ImageParams::width(100);
        params.extra.insert("vs".to_string(), json!("1"));
        params.extra.insert("db".to_string(), json!("master"));

        let keys: Vec<String> = params
            .query_pairs()
            .into_iter()
            .map(|(k, _)| k.into_owned())
            .collect();
        assert_eq!(keys, vec!["w", "vs", "db"]);
    }

    #[test]
    fn test_query_pairs_extension_values() {
        let mut params = ImageParams::default();
        params.extra.insert("n".to_string(), json!(42));
        params.extra.insert("flag".to_string(), json!(true));
        params.extra.insert("off".to_string(), json!(false));
        params.extra.insert("skipped".to_string(), json!(null));
        params.extra.insert("also".to_string(), json!([1, 2]));

        let pairs: Vec<(String, String)> = params
            .query_pairs()
            .into_iter()
            .map(|(k, v)| (k.into_owned(), v))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("n".to_string(), "42".to_string()),
                ("flag".to_string(), "1".to_string()),
                ("off".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_overlay() {
        let base = ImageParams {
            mw: Some(100),
            h: Some(50),
            ..Default::default()
        };
        let top = ImageParams::max_width(200);

        let merged = base.overlay(&top);
        assert_eq!(merged.mw, Some(200));
        assert_eq!(merged.h, Some(50));
    }

    #[test]
    fn test_serde_as_keyword_key() {
        let params: ImageParams = serde_json::from_value(json!({"as": 1, "iar": 0})).unwrap();
        assert_eq!(params.r#as, Some(1));
        assert_eq!(params.iar, Some(0));

        let back = serde_json::to_value(&params).unwrap();
        assert_eq!(back, json!({"iar": 0, "as": 1}));
    }

    #[test]
    fn test_is_empty() {
        assert!(ImageParams::default().is_empty());
        assert!(!ImageParams::max_width(1).is_empty());

        let mut with_extra = ImageParams::default();
        with_extra.extra.insert("x".to_string(), json!("y"));
        assert!(!with_extra.is_empty());
    }
}
