//! Section normalization
//!
//! Guarantees the invariants the renderer relies on: every document has the
//! eight required sections exactly once, each with a column assignment, with
//! Personal Information synthesized from top-level document fields when the
//! editor never created one. Input order is preserved for sections that
//! already exist; missing required sections are appended in canonical order.
//!
//! Normalization never fails and is idempotent.

use crate::document::{
    slug, Column, ContactLink, Document, PersonalInfo, Section, SectionContent, SectionKind,
};

/// Placeholder identity used when a document carries no personal data at all
const FALLBACK_NAME: &str = "John Doe";
const FALLBACK_TITLE: &str = "Software Engineer";
const FALLBACK_EMAIL: &str = "john.doe@email.com";
const FALLBACK_PHONE: &str = "+1 555-123-4567";
const FALLBACK_LOCATION: &str = "San Francisco, CA";

/// Return a section list containing all required sections with columns assigned
///
/// `document` supplies the fallback fields for a synthesized Personal
/// Information section. Required-section presence and duplicate collapse
/// both key on the trimmed, lowercased title, so a variant-titled section
/// like "Technical Skills" never stands in for the required "Skills".
pub fn normalize_sections(sections: &[Section], document: &Document) -> Vec<Section> {
    let mut normalized: Vec<Section> = Vec::with_capacity(sections.len() + 8);

    for section in sections {
        if is_duplicate(&normalized, section) {
            continue;
        }
        let mut section = section.clone();
        if section.column.is_none() {
            section.column = Some(section.kind.default_column());
        }
        normalized.push(section);
    }

    for kind in SectionKind::REQUIRED {
        let required_title = kind.canonical_title();
        if normalized
            .iter()
            .any(|s| s.title.trim().eq_ignore_ascii_case(required_title))
        {
            continue;
        }
        if kind == SectionKind::PersonalInfo {
            normalized.push(synthesize_personal(document));
        } else {
            normalized.push(Section::empty(kind));
        }
    }

    normalized
}

/// Normalize a whole document in place, returning a new document
pub fn normalize_document(document: &Document) -> Document {
    let mut normalized = document.clone();
    normalized.sections = normalize_sections(&document.sections, document);
    normalized
}

fn is_duplicate(seen: &[Section], candidate: &Section) -> bool {
    seen.iter()
        .any(|s| s.title.trim().eq_ignore_ascii_case(candidate.title.trim()))
}

/// Build a Personal Information section from top-level document fields
///
/// Blank fields fall back to the placeholder identity, and two placeholder
/// social links are attached, matching the editor's new-document defaults.
fn synthesize_personal(document: &Document) -> Section {
    let pick = |value: &str, fallback: &str| {
        if value.trim().is_empty() {
            fallback.to_string()
        } else {
            value.to_string()
        }
    };

    let info = PersonalInfo {
        name: pick(&document.name, FALLBACK_NAME),
        title: pick(&document.title, FALLBACK_TITLE),
        email: pick(&document.email, FALLBACK_EMAIL),
        phone: pick(&document.phone, FALLBACK_PHONE),
        location: pick(&document.location, FALLBACK_LOCATION),
        extras: default_extras(),
    };

    let title = SectionKind::PersonalInfo.canonical_title().to_string();
    Section {
        id: slug(&title),
        title,
        kind: SectionKind::PersonalInfo,
        column: Some(Column::Right),
        content: SectionContent::Personal(info),
    }
}

/// Placeholder social links attached to a synthesized Personal Information section
pub fn default_extras() -> Vec<ContactLink> {
    vec![
        ContactLink {
            label: "LinkedIn".to_string(),
            value: "linkedin.com/in/johndoe".to_string(),
            icon: "linkedin".to_string(),
        },
        ContactLink {
            label: "GitHub".to_string(),
            value: "github.com/johndoe".to_string(),
            icon: "github".to_string(),
        },
    ]
}
