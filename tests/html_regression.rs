//! Structural regression tests for rendered HTML
//!
//! The export service parses the output with a generic HTML renderer, so the
//! one hard requirement on the markup is well-formed tag nesting. These
//! tests walk the emitted tags with a stack rather than comparing full
//! documents, so styling tweaks don't churn them.

use vitae::{render, template, Document, Variant};

/// Elements that never take a closing tag
const VOID_ELEMENTS: [&str; 4] = ["meta", "img", "br", "hr"];

/// Check tag nesting with a simple scanner; panics with context on mismatch
fn assert_well_formed(html: &str) {
    let mut stack: Vec<String> = Vec::new();
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        rest = &rest[start + 1..];
        let end = rest.find('>').expect("unterminated tag");
        let tag = &rest[..end];
        rest = &rest[end + 1..];

        if tag.starts_with('!') {
            continue; // doctype
        }
        if let Some(name) = tag.strip_prefix('/') {
            let open = stack
                .pop()
                .unwrap_or_else(|| panic!("closing </{}> with empty stack", name));
            assert_eq!(open, name, "mismatched closing tag");
            continue;
        }
        if tag.ends_with('/') {
            continue; // self-closing
        }
        let name: String = tag
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        if !VOID_ELEMENTS.contains(&name.as_str()) {
            stack.push(name);
        }
    }

    assert!(stack.is_empty(), "unclosed tags: {:?}", stack);
}

#[test]
fn empty_document_is_well_formed_in_every_variant() {
    let doc = Document::default();
    for variant in Variant::ALL {
        assert_well_formed(&render(&doc, variant));
    }
}

#[test]
fn sample_documents_are_well_formed_in_every_template() {
    for tpl in &template::TEMPLATES {
        let doc = template::default_document(tpl.id);
        assert_well_formed(&tpl.render(&doc, &vitae::Theme::default()));
    }
}

#[test]
fn hostile_text_keeps_markup_well_formed() {
    let doc = Document::from_json(
        r#"{
            "name": "<div><div>",
            "sections": [
                { "title": "Summary", "items": ["</body></html>"] },
                { "title": "Experience", "items": [
                    { "role": "</section>", "bullets": ["<li></li>"] }
                ] }
            ]
        }"#,
    )
    .expect("valid document");
    for variant in Variant::ALL {
        assert_well_formed(&render(&doc, variant));
    }
}

#[test]
fn rendering_is_deterministic() {
    let doc = template::default_document(1);
    for variant in Variant::ALL {
        assert_eq!(render(&doc, variant), render(&doc, variant));
    }
}

#[test]
fn variant_structure_markers() {
    let doc = template::default_document(1);

    let classic = render(&doc, Variant::ClassicTwo);
    assert!(classic.contains("two-col"));

    let minimal = render(&doc, Variant::OneMinimal);
    assert!(minimal.contains("section-divider"));
    assert!(!minimal.contains("two-col"));

    let timeline = render(&doc, Variant::Timeline);
    assert!(timeline.contains("timeline-item"));

    let grid = render(&doc, Variant::ModernGrid);
    assert!(grid.contains("grid-3"));

    let bar = render(&doc, Variant::AccentBar);
    assert!(bar.contains("section-bar"));
}
