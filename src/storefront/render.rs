//! # Template Rendering
//!
//! Every fragment this crate produces comes out of a minijinja template. Templates
//! live as standalone files under `templates/` and are compiled into the binary.
//!
//! Two things depend on the template name:
//!
//! - `.html` templates are autoescaped, so backend strings can never inject markup.
//! - `.txt` templates get a `style` filter that applies a named terminal style
//!   from [`BADGE_THEME`] (`{{ value | style("badge_name") }}`). With color
//!   disabled the filter returns the text untouched.

use crate::error::Result;
use console::Style;
use minijinja::{Environment, Value};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

pub const BADGES_HTML: &str = "badges.html";
pub const BADGES_TEXT: &str = "badges.txt";

const BADGES_HTML_SOURCE: &str = include_str!("templates/badges.html");
const BADGES_TEXT_SOURCE: &str = include_str!("templates/badges.txt");

/// Named terminal styles used by the text templates.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Styles `text` when `name` is known; unknown names leave it as is.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => text.to_string(),
        }
    }
}

pub static BADGE_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add("badge_name", Style::new().bold())
        .add("badge_values", Style::new().dim())
});

/// Builds an environment with all templates registered.
///
/// `use_color` only affects the `style` filter; HTML output never carries ANSI codes.
pub fn environment(use_color: bool) -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_template(BADGES_HTML, BADGES_HTML_SOURCE)?;
    env.add_template(BADGES_TEXT, BADGES_TEXT_SOURCE)?;

    let theme = BADGE_THEME.clone();
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            theme.apply(&name, &text)
        } else {
            text
        }
    });
    Ok(env)
}

/// Renders a registered template by name.
pub fn render<T: Serialize>(name: &str, data: &T, use_color: bool) -> Result<String> {
    let env = environment(use_color)?;
    let tmpl = env.get_template(name)?;
    Ok(tmpl.render(data)?)
}
