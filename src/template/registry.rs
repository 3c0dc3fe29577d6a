//! The build-time table of templates

use crate::document::Document;
use crate::renderer::{render_document, RenderConfig, Variant};
use crate::theme::Theme;

/// Identifier of a template as used by the editor (1 through 8)
pub type TemplateId = u8;

/// One entry in the template catalog
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub id: TemplateId,
    pub name: &'static str,
    pub variant: Variant,
    /// Whether this template renders the header photo
    pub with_photo: bool,
}

/// The full catalog, in id order
pub const TEMPLATES: [Template; 8] = [
    Template {
        id: 1,
        name: "Classic Two-Column",
        variant: Variant::ClassicTwo,
        with_photo: false,
    },
    Template {
        id: 2,
        name: "One-Column Minimalist",
        variant: Variant::OneMinimal,
        with_photo: false,
    },
    Template {
        id: 3,
        name: "Timeline Style",
        variant: Variant::Timeline,
        with_photo: false,
    },
    Template {
        id: 4,
        name: "Header Emphasis",
        variant: Variant::HeaderEmphasis,
        with_photo: false,
    },
    Template {
        id: 5,
        name: "Modern Grid",
        variant: Variant::ModernGrid,
        with_photo: false,
    },
    Template {
        id: 6,
        name: "Creative Accent Bar",
        variant: Variant::AccentBar,
        with_photo: false,
    },
    Template {
        id: 7,
        name: "Compact Professional",
        variant: Variant::Compact,
        with_photo: false,
    },
    Template {
        id: 8,
        name: "Photo Layout",
        variant: Variant::PhotoTwo,
        with_photo: true,
    },
];

/// Look up a template by id
pub fn get(id: TemplateId) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

impl Template {
    /// Render a document with this template's variant, photo flag, and theme
    pub fn render(&self, document: &Document, theme: &Theme) -> String {
        let config = RenderConfig::new()
            .with_theme(theme.clone())
            .with_photo(self.with_photo);
        render_document(document, self.variant, &config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_dense() {
        for (index, template) in TEMPLATES.iter().enumerate() {
            assert_eq!(template.id as usize, index + 1);
        }
    }

    #[test]
    fn test_get() {
        assert_eq!(get(1).map(|t| t.name), Some("Classic Two-Column"));
        assert_eq!(get(8).map(|t| t.variant), Some(Variant::PhotoTwo));
        assert!(get(0).is_none());
        assert!(get(9).is_none());
    }

    #[test]
    fn test_only_photo_layout_renders_photo() {
        assert_eq!(
            TEMPLATES.iter().filter(|t| t.with_photo).count(),
            1,
            "exactly one photo template"
        );
        assert!(get(8).expect("template 8 exists").with_photo);
    }

    #[test]
    fn test_template_render_dispatches_variant() {
        let document = crate::template::default_document(3);
        let html = get(3)
            .expect("template 3 exists")
            .render(&document, &Theme::default());
        assert!(html.contains("timeline-item"));
    }
}
