//! # Variant Attribute Extraction
//!
//! Turns the non-selection attributes of the selected variant into
//! [`VariantAttribute`]s ready for display.
//!
//! Malformed attribute data is never an error here. Anything that cannot be shown
//! (missing name or slug, no named values) is left out, and the worst outcome is an
//! empty list.
//!
//! ## Selection
//!
//! - `None` (or an empty id): the first variant, if any.
//! - `Some(id)`: the first variant whose id matches. A non-matching id selects
//!   nothing; it does not fall back to the first variant.

use crate::model::{NonSelectionAttribute, Variant, VariantAttribute};

/// Resolves which variant the page is showing.
pub fn select_variant<'a>(
    variants: &'a [Variant],
    selected_variant_id: Option<&str>,
) -> Option<&'a Variant> {
    match selected_variant_id.filter(|id| !id.is_empty()) {
        Some(id) => {
            let found = variants.iter().find(|v| v.id == id);
            if found.is_none() {
                tracing::debug!(variant_id = id, "selected variant not found");
            }
            found
        }
        None => variants.first(),
    }
}

/// Extracts displayable attributes from the selected variant.
///
/// Output order follows the variant's attribute order, and values keep the order
/// they arrived in.
pub fn extract_optional_attributes(
    variants: &[Variant],
    selected_variant_id: Option<&str>,
) -> Vec<VariantAttribute> {
    let Some(variant) = select_variant(variants, selected_variant_id) else {
        return Vec::new();
    };
    tracing::trace!(variant_id = %variant.id, "extracting optional attributes");

    let Some(attributes) = &variant.non_selection_attributes else {
        return Vec::new();
    };

    attributes.iter().filter_map(to_displayable).collect()
}

fn to_displayable(attr: &NonSelectionAttribute) -> Option<VariantAttribute> {
    let (Some(name), Some(slug)) = (
        present(attr.attribute.name.as_deref()),
        present(attr.attribute.slug.as_deref()),
    ) else {
        tracing::debug!(attribute = ?attr.attribute, "dropping attribute without name or slug");
        return None;
    };

    let values: Vec<String> = attr
        .values
        .iter()
        .filter_map(|v| present(v.name.as_deref()))
        .map(str::to_string)
        .collect();

    if values.is_empty() {
        tracing::debug!(slug, "dropping attribute without named values");
        return None;
    }

    Some(VariantAttribute {
        name: name.to_string(),
        slug: slug.to_string(),
        values,
    })
}

// Empty strings count as missing, same as null.
fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.is_empty())
}
