//! # Attribute Badges
//!
//! Presentational output for [`VariantAttribute`]s: one badge per attribute, reading
//! `name: value1, value2`. An empty attribute list renders nothing at all, not even
//! the container, so callers can skip the section entirely on `None`.
//!
//! Badges are keyed by slug (`data-key`) so the page can keep their identity across
//! re-renders.

use crate::error::Result;
use crate::model::VariantAttribute;
use crate::render::{self, BADGES_HTML, BADGES_TEXT};
use serde::Serialize;

#[derive(Serialize)]
struct BadgesData<'a> {
    attributes: &'a [VariantAttribute],
}

/// Renders the attributes as an HTML fragment, or `None` when there is nothing to show.
pub fn render_badges(attributes: &[VariantAttribute]) -> Result<Option<String>> {
    if attributes.is_empty() {
        return Ok(None);
    }
    render::render(BADGES_HTML, &BadgesData { attributes }, false).map(Some)
}

/// Older name for [`render_badges`].
pub use self::render_badges as render_optional_attributes;

/// Renders the attributes as terminal text, one badge per line.
pub fn render_badges_text(
    attributes: &[VariantAttribute],
    use_color: bool,
) -> Result<Option<String>> {
    if attributes.is_empty() {
        return Ok(None);
    }
    render::render(BADGES_TEXT, &BadgesData { attributes }, use_color).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::extract_optional_attributes;
    use crate::model::{AttributeRef, AttributeValue, NonSelectionAttribute, Variant};

    fn attribute(name: &str, slug: &str, values: &[&str]) -> VariantAttribute {
        VariantAttribute {
            name: name.to_string(),
            slug: slug.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(render_badges(&[]).unwrap(), None);
        assert_eq!(render_badges_text(&[], false).unwrap(), None);
    }

    #[test]
    fn test_extracted_empty_result_renders_nothing() {
        let variants = vec![Variant::new("v1").with_attributes(vec![NonSelectionAttribute::new(
            AttributeRef::new("Material", "material"),
            vec![AttributeValue::unnamed()],
        )])];
        let attributes = extract_optional_attributes(&variants, Some("v1"));
        assert_eq!(render_badges(&attributes).unwrap(), None);
    }

    #[test]
    fn test_single_badge_html() {
        let html = render_badges(&[attribute("Material", "material", &["Cotton", "Linen"])])
            .unwrap()
            .unwrap();
        assert!(html.starts_with("<div class=\"flex flex-wrap gap-2\">"));
        assert!(html.ends_with("</div>"));
        assert!(html.contains("data-key=\"material\""));
        assert!(html.contains("<span class=\"font-medium\">Material:</span>"));
        assert!(html.contains("<span>Cotton, Linen</span>"));
    }

    #[test]
    fn test_no_text_between_name_and_values() {
        let html = render_badges(&[attribute("Care", "care", &["Hand wash"])])
            .unwrap()
            .unwrap();
        assert!(html.contains("Care:</span><span>Hand wash</span></span>"));
    }

    #[test]
    fn test_one_badge_per_attribute_in_order() {
        let html = render_badges(&[
            attribute("Origin", "origin", &["Portugal"]),
            attribute("Care", "care", &["Hand wash"]),
        ])
        .unwrap()
        .unwrap();
        assert_eq!(html.matches("data-key=").count(), 2);
        let origin = html.find("data-key=\"origin\"").unwrap();
        let care = html.find("data-key=\"care\"").unwrap();
        assert!(origin < care);
    }

    #[test]
    fn test_html_escapes_backend_strings() {
        let html = render_badges(&[attribute("Size & Fit", "size\"fit", &["<i>Relaxed</i>"])])
            .unwrap()
            .unwrap();
        assert!(html.contains("Size &amp; Fit:"));
        assert!(html.contains("&lt;i&gt;Relaxed"));
        assert!(!html.contains("size\"fit"));
    }

    #[test]
    fn test_text_badges_match_labels() {
        let attrs = [
            attribute("Material", "material", &["Cotton", "Linen"]),
            attribute("Care", "care", &["Hand wash"]),
        ];
        let text = render_badges_text(&attrs, false).unwrap().unwrap();
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        let labels: Vec<String> = attrs.iter().map(VariantAttribute::label).collect();
        assert_eq!(lines, labels);
    }

    #[test]
    fn test_alias_matches_render_badges() {
        let attrs = [attribute("Brand", "brand", &["Heff"])];
        assert_eq!(
            render_optional_attributes(&attrs).unwrap(),
            render_badges(&attrs).unwrap()
        );
    }
}
