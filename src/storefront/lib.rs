//! # Storefront
//!
//! Building blocks for the product detail page of a headless storefront. The
//! commerce backend owns the catalog; this crate only turns the data it hands us
//! into things a page can show.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Reads variant payloads, prints fragments                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐  ┌──────────────────────────┐
//! │  badges.rs / render.rs       │  │  brand.rs                │
//! │  - HTML and text fragments   │  │  - Brand display strings │
//! └──────────────────────────────┘  │  - Title and copyright   │
//!                │                  └──────────────────────────┘
//!                ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  attributes.rs                                              │
//! │  - Selected variant → displayable attributes                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O in the Core
//!
//! Extraction and rendering take borrowed inputs and return owned values. They never
//! print, never touch the network, and never fail on odd backend data: anything
//! that cannot be displayed is simply left out. Only [`brand::BrandConfig::load`]
//! and `save` touch the filesystem.
//!
//! ## Example
//!
//! ```rust
//! use storefront::attributes::extract_optional_attributes;
//! use storefront::badges::render_badges;
//! use storefront::model::{AttributeRef, AttributeValue, NonSelectionAttribute, Variant};
//!
//! let variants = vec![Variant::new("v1").with_attributes(vec![NonSelectionAttribute::new(
//!     AttributeRef::new("Material", "material"),
//!     vec![AttributeValue::named("Cotton"), AttributeValue::named("Linen")],
//! )])];
//!
//! let attributes = extract_optional_attributes(&variants, Some("v1"));
//! assert_eq!(attributes[0].label(), "Material: Cotton, Linen");
//!
//! let html = render_badges(&attributes).unwrap().unwrap();
//! assert!(html.contains("Cotton, Linen"));
//!
//! assert_eq!(storefront::brand::format_page_title("Shoes"), "Shoes | Heff.industries");
//! ```
//!
//! ## Module Overview
//!
//! - [`attributes`]: Variant selection and attribute extraction
//! - [`badges`]: Badge fragments for extracted attributes
//! - [`brand`]: Brand settings, title and copyright helpers
//! - [`model`]: Backend payload types and `VariantAttribute`
//! - [`render`]: Template environment and terminal theme
//! - [`error`]: Error types

pub mod attributes;
pub mod badges;
pub mod brand;
pub mod error;
pub mod model;
pub mod render;
