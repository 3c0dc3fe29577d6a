//! Theme system for the rendered page
//!
//! Themes map symbolic color tokens (accent, body text, muted metadata) and
//! the font stack to concrete CSS values, so the same document can be
//! rendered with different branding. Themes load from TOML; the built-in
//! default matches the editor's original palette.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A theme mapping symbolic tokens to concrete CSS values
#[derive(Debug, Clone)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> CSS color
    pub colors: HashMap<String, String>,
    /// Font stack for the page body
    pub font_family: String,
}

#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: HashMap<String, String>,
    fonts: Option<TomlFonts>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlFonts {
    body: Option<String>,
}

/// Default palette, matching the editor's hard-coded colors
const DEFAULT_THEME: &str = r##"
[colors]
# Header name and section accents
accent = "#1e3a8a"
accent-link = "#1d4ed8"

# Body text
text = "#111827"
text-subtle = "#374151"
text-contact = "#4b5563"

# Metadata (dates, separators)
muted = "#6b7280"
separator = "#9ca3af"

# Section heading and rules
heading = "#374151"
rule = "#d1d5db"

[fonts]
body = "Inter, Roboto, Lato, system-ui, -apple-system, Segoe UI, Arial"
"##;

const DEFAULT_FONT: &str = "Inter, Roboto, Lato, system-ui, -apple-system, Segoe UI, Arial";

impl Theme {
    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a theme from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;

        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
            font_family: parsed
                .fonts
                .and_then(|f| f.body)
                .unwrap_or_else(|| DEFAULT_FONT.to_string()),
        })
    }

    /// Resolve a color token to a concrete value
    ///
    /// Returns None if the token is not defined in this theme.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a color token with fallback to the default palette
    ///
    /// Fallback order: this theme, then the default palette, then a category
    /// default based on the token prefix.
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let default = Self::default();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        if token.starts_with("accent") {
            return "#1e3a8a".to_string();
        }
        if token.starts_with("text") {
            return "#111827".to_string();
        }

        "#6b7280".to_string()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_toml(DEFAULT_THEME).expect("default theme should be valid TOML")
    }
}
