//! Configuration for HTML rendering

use crate::theme::Theme;

/// Configuration options for HTML output
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Theme for colors and fonts
    pub theme: Theme,

    /// Whether to render the header photo when the document has one
    pub show_photo: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            show_photo: false,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable the header photo
    pub fn with_photo(mut self, show_photo: bool) -> Self {
        self.show_photo = show_photo;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert!(!config.show_photo);
        assert_eq!(config.theme.resolve("accent"), Some("#1e3a8a"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = RenderConfig::new().with_photo(true);
        assert!(config.show_photo);
    }
}
