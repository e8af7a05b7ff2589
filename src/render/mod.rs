//! Host-framework boundary: turn a [`RenderDecision`] into markup.
//!
//! This is the single translation step between resolution and whatever
//! rendering tree hosts the output. Editor markup passes through verbatim
//! (the CMS generated it); resolved images become an `<img>` void element
//! with escaped attribute values.

use crate::field::Attributes;
use crate::resolver::RenderDecision;
use crate::utils::html::{escape_attr, is_valid_attr_name};
use serde_json::Value;

/// Render a decision to an HTML fragment.
///
/// [`RenderDecision::Empty`] renders to an empty string.
pub fn to_html(decision: &RenderDecision) -> String {
    match decision {
        RenderDecision::Empty => String::new(),
        RenderDecision::EditorMarkup(html) => html.clone(),
        RenderDecision::Image(attrs) => img_tag(attrs),
    }
}

/// Build an `<img .../>` tag from an attribute set.
///
/// Attribute values render by kind: strings and numbers as quoted values,
/// `true` as a bare attribute, `false`/null/structured values are skipped.
/// Names that would break out of the tag are dropped.
fn img_tag(attrs: &Attributes) -> String {
    let mut out = String::from("<img");

    for (name, value) in attrs.iter() {
        if !is_valid_attr_name(name) {
            continue;
        }
        match value {
            Value::String(s) => {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_attr(s));
                out.push('"');
            }
            Value::Number(n) => {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&n.to_string());
                out.push('"');
            }
            Value::Bool(true) => {
                out.push(' ');
                out.push_str(name);
            }
            Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => {}
        }
    }

    out.push_str(" />");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(pairs: &[(&str, Value)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(to_html(&RenderDecision::Empty), "");
    }

    #[test]
    fn test_editor_markup_verbatim() {
        let html = r#"<img src="/x" onload="ee()" />"#;
        assert_eq!(
            to_html(&RenderDecision::EditorMarkup(html.to_string())),
            html
        );
    }

    #[test]
    fn test_img_tag_basic() {
        let decision = RenderDecision::Image(attrs(&[
            ("src", json!("/a.png?mw=100")),
            ("alt", json!("a picture")),
            ("width", json!(640)),
        ]));
        assert_eq!(
            to_html(&decision),
            r#"<img src="/a.png?mw=100" alt="a picture" width="640" />"#
        );
    }

    #[test]
    fn test_img_tag_escapes_values() {
        let decision = RenderDecision::Image(attrs(&[(
            "alt",
            json!(r#"an "odd" <tag> & more"#),
        )]));
        assert_eq!(
            to_html(&decision),
            r#"<img alt="an &quot;odd&quot; &lt;tag&gt; &amp; more" />"#
        );
    }

    #[test]
    fn test_img_tag_bool_and_null() {
        let decision = RenderDecision::Image(attrs(&[
            ("loading", json!("lazy")),
            ("ismap", json!(true)),
            ("hidden", json!(false)),
            ("skipped", json!(null)),
        ]));
        assert_eq!(to_html(&decision), r#"<img loading="lazy" ismap />"#);
    }

    #[test]
    fn test_img_tag_drops_bad_names() {
        let decision = RenderDecision::Image(attrs(&[
            ("src", json!("/a.png")),
            (r#"onerror="x""#, json!("y")),
        ]));
        assert_eq!(to_html(&decision), r#"<img src="/a.png" />"#);
    }
}
