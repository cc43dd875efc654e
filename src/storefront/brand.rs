//! # Brand Configuration
//!
//! Display strings for the storefront: site name, copyright holder, taglines and the
//! page title template. Rendering code reads them from [`brand()`], an immutable
//! value built once per process.
//!
//! A store can override any subset of fields with a `brand.json` file; fields the
//! file does not name keep their defaults.

use crate::error::{Result, StorefrontError};
use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "brand.json";

/// Placeholder in [`BrandConfig::title_template`] replaced by the page title.
pub const TITLE_PLACEHOLDER: &str = "%s";

const DEFAULT_HOLDER: &str = "Heff.industries";

static BRAND: Lazy<BrandConfig> = Lazy::new(BrandConfig::default);

/// The built-in brand settings.
pub fn brand() -> &'static BrandConfig {
    &BRAND
}

/// Formats a page title with the built-in template.
pub fn format_page_title(title: &str) -> String {
    brand().format_page_title(title)
}

/// Copyright line for the built-in holder; `None` means the current year.
pub fn copyright_text(year: Option<i32>) -> String {
    brand().copyright_text(year)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BrandConfig {
    /// Used in titles, metadata and headers
    pub site_name: String,
    /// Legal entity named in copyright notices
    pub copyright_holder: String,
    /// Organization name for structured data
    pub organization_name: String,
    /// Brand shown for products that carry none
    pub default_brand: String,
    pub tagline: String,
    /// Homepage meta description
    pub description: String,
    pub logo_aria_label: String,
    /// Must contain `%s`
    pub title_template: String,
    pub social: SocialHandles,
}

/// Social handles, without the leading `@`. `None` disables the link.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SocialHandles {
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    /// Page URL rather than a handle
    pub facebook: Option<String>,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            site_name: "Heff.industries Store".to_string(),
            copyright_holder: DEFAULT_HOLDER.to_string(),
            organization_name: DEFAULT_HOLDER.to_string(),
            default_brand: DEFAULT_HOLDER.to_string(),
            tagline: "Heff.industries supplies several brands with products their consumers adore. Our Engineering, Your Brand.".to_string(),
            description: "Heff.industries home page for building performant e-commerce experiences with Saleor.".to_string(),
            logo_aria_label: "Store".to_string(),
            title_template: format!("{} | {}", TITLE_PLACEHOLDER, DEFAULT_HOLDER),
            social: SocialHandles::default(),
        }
    }
}

impl BrandConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no brand config, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BrandConfig = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %config_path.display(), "loaded brand config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !self.title_template.contains(TITLE_PLACEHOLDER) {
            return Err(StorefrontError::Config(format!(
                "title_template must contain {}: {:?}",
                TITLE_PLACEHOLDER, self.title_template
            )));
        }
        Ok(())
    }

    /// Substitutes the first `%s` in the title template.
    pub fn format_page_title(&self, title: &str) -> String {
        self.title_template.replacen(TITLE_PLACEHOLDER, title, 1)
    }

    pub fn copyright_text(&self, year: Option<i32>) -> String {
        let year = year.unwrap_or_else(|| Utc::now().year());
        format!("© {} {}. All rights reserved.", year, self.copyright_holder)
    }

    /// Configured social handles as `(network, handle)` pairs.
    pub fn social_links(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("twitter", self.social.twitter.as_deref()),
            ("instagram", self.social.instagram.as_deref()),
            ("facebook", self.social.facebook.as_deref()),
        ]
        .into_iter()
        .filter_map(|(network, handle)| handle.map(|h| (network, h)))
    }
}
