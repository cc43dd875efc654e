//! Data types shared by the extractor and the renderers.
//!
//! The input side (`Variant` and friends) mirrors the payload the commerce backend
//! hands us: every descriptive field may be missing or `null`, so all of them are
//! `Option`s. The output side (`VariantAttribute`) only exists once every required
//! field has been checked.

use serde::{Deserialize, Serialize};

/// A purchasable configuration of a product, as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_selection_attributes: Option<Vec<NonSelectionAttribute>>,
}

impl Variant {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            non_selection_attributes: None,
        }
    }

    pub fn with_attributes(mut self, attributes: Vec<NonSelectionAttribute>) -> Self {
        self.non_selection_attributes = Some(attributes);
        self
    }
}

/// A descriptive trait of a variant that does not take part in variant selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonSelectionAttribute {
    #[serde(default)]
    pub attribute: AttributeRef,
    #[serde(default)]
    pub values: Vec<AttributeValue>,
}

impl NonSelectionAttribute {
    pub fn new(attribute: AttributeRef, values: Vec<AttributeValue>) -> Self {
        Self { attribute, values }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl AttributeRef {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            slug: Some(slug.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    #[serde(default)]
    pub name: Option<String>,
}

impl AttributeValue {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn unnamed() -> Self {
        Self { name: None }
    }
}

/// A non-selection attribute that passed validation and is ready to display.
///
/// `slug` doubles as the stable key of the rendered badge; `values` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantAttribute {
    pub name: String,
    pub slug: String,
    pub values: Vec<String>,
}

impl VariantAttribute {
    /// Badge text, e.g. `Material: Cotton, Linen`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.name, self.joined_values())
    }

    pub fn joined_values(&self) -> String {
        self.values.join(", ")
    }
}

#[derive(Deserialize)]
struct ProductPayload {
    variants: Vec<Variant>,
}

/// Parses either a bare list of variants or a product object carrying them.
///
/// The shape is picked from the first non-whitespace character, so parse errors
/// point at the actual problem (e.g. a variant without `id`) with line and column.
pub fn parse_variants(json: &str) -> serde_json::Result<Vec<Variant>> {
    if json.trim_start().starts_with('[') {
        serde_json::from_str(json)
    } else {
        let product: ProductPayload = serde_json::from_str(json)?;
        Ok(product.variants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_joins_values() {
        let attr = VariantAttribute {
            name: "Material".to_string(),
            slug: "material".to_string(),
            values: vec!["Cotton".to_string(), "Linen".to_string()],
        };
        assert_eq!(attr.label(), "Material: Cotton, Linen");
    }

    #[test]
    fn test_variant_deserializes_camel_case() {
        let json = r#"{
            "id": "v1",
            "nonSelectionAttributes": [
                {"attribute": {"name": "Material", "slug": "material"}, "values": [{"name": "Cotton"}]}
            ]
        }"#;
        let variant: Variant = serde_json::from_str(json).unwrap();
        let attrs = variant.non_selection_attributes.unwrap();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].attribute.slug.as_deref(), Some("material"));
        assert_eq!(attrs[0].values[0].name.as_deref(), Some("Cotton"));
    }

    #[test]
    fn test_nulls_and_missing_keys_are_absent() {
        let json = r#"{
            "id": "v1",
            "nonSelectionAttributes": [
                {"attribute": {"name": null}, "values": [{"name": null}, {}]},
                {"attribute": {"slug": "care"}}
            ]
        }"#;
        let variant: Variant = serde_json::from_str(json).unwrap();
        let attrs = variant.non_selection_attributes.unwrap();
        assert_eq!(attrs[0].attribute, AttributeRef::default());
        assert_eq!(attrs[0].values, vec![AttributeValue::unnamed(); 2]);
        assert!(attrs[1].values.is_empty());
    }

    #[test]
    fn test_variant_without_attributes() {
        let variant: Variant = serde_json::from_str(r#"{"id": "v1"}"#).unwrap();
        assert_eq!(variant, Variant::new("v1"));
    }

    #[test]
    fn test_parse_variants_accepts_list_or_product() {
        let list = parse_variants(r#"[{"id": "a"}]"#).unwrap();
        assert_eq!(list, vec![Variant::new("a")]);

        let product = parse_variants(r#"{"name": "Tee", "variants": [{"id": "b"}]}"#).unwrap();
        assert_eq!(product, vec![Variant::new("b")]);
    }

    #[test]
    fn test_parse_variants_reports_missing_id() {
        let err = parse_variants("  [{\"nonSelectionAttributes\": []}]").unwrap_err();
        assert!(err.to_string().contains("missing field `id`"), "{}", err);
        assert_eq!(err.line(), 1);

        let err = parse_variants(r#"{"variants": [{}]}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `id`"), "{}", err);
    }

    #[test]
    fn test_parse_variants_product_without_variants() {
        let err = parse_variants(r#"{"name": "Tee"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `variants`"), "{}", err);
    }
}
