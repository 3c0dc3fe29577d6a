//! Vitae - resume document model and template renderer
//!
//! This library provides a typed resume document model, a section
//! normalizer, and an HTML renderer with a fixed catalog of layout
//! templates. Documents arrive as loose JSON from an editing frontend;
//! rendering produces a standalone printable HTML string.
//!
//! # Example
//!
//! ```rust
//! use vitae::{render, Variant};
//!
//! let document = vitae::template::default_document(1);
//! let html = render(&document, Variant::ClassicTwo);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("John Doe"));
//! ```

pub mod document;
pub mod normalize;
pub mod renderer;
pub mod session;
pub mod template;
pub mod theme;

pub use document::{
    Column, ContactLink, Document, DocumentError, Entry, PersonalInfo, Section, SectionContent,
    SectionKind,
};
pub use normalize::{normalize_document, normalize_sections};
pub use renderer::{escape_html, RenderConfig, Variant};
pub use session::EditSession;
pub use theme::{Theme, ThemeError};

/// Render a document with the given layout variant and default configuration
///
/// The photo layout implies the header photo; every other variant leaves it
/// off. Use [`render_with_config`] for explicit control.
pub fn render(document: &Document, variant: Variant) -> String {
    let config = RenderConfig::new().with_photo(variant == Variant::PhotoTwo);
    render_with_config(document, variant, &config)
}

/// Render a document with a custom theme and photo configuration
///
/// # Example
///
/// ```rust
/// use vitae::{render_with_config, RenderConfig, Variant};
///
/// let document = vitae::template::default_document(8);
/// let config = RenderConfig::new().with_photo(true);
/// let html = render_with_config(&document, Variant::PhotoTwo, &config);
/// assert!(html.contains("<img"));
/// ```
pub fn render_with_config(
    document: &Document,
    variant: Variant,
    config: &RenderConfig,
) -> String {
    renderer::render_document(document, variant, config)
}
