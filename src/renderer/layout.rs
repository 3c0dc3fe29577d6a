//! Layout strategies for rendering a document to a page
//!
//! All variants share the primitives in [`super::html`]; they differ only in
//! how normalized sections are arranged. Two-column variants partition body
//! sections by their column assignment, single-column variants render the
//! full section flow in order.

use crate::document::{Column, Document, Section, SectionContent, SectionKind};
use crate::normalize::normalize_sections;

use super::config::RenderConfig;
use super::html::{self, HeadingStyle};

/// One of the fixed layout strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Two columns, underlined headings
    ClassicTwo,
    /// Single column with dashed dividers
    OneMinimal,
    /// Single column; Experience/Education entries on a timeline
    Timeline,
    /// Two columns with an emphasized header block
    HeaderEmphasis,
    /// Single column with Skills/Education/Certifications in a bottom grid
    ModernGrid,
    /// Single column with accent bars on headings
    AccentBar,
    /// Dense single column
    Compact,
    /// Two columns plus the header photo
    PhotoTwo,
}

impl Variant {
    /// All variants in template-id order
    pub const ALL: [Variant; 8] = [
        Variant::ClassicTwo,
        Variant::OneMinimal,
        Variant::Timeline,
        Variant::HeaderEmphasis,
        Variant::ModernGrid,
        Variant::AccentBar,
        Variant::Compact,
        Variant::PhotoTwo,
    ];

    /// Look up a variant by its wire name; unknown names fall back to
    /// the classic two-column layout
    pub fn from_name(name: &str) -> Variant {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic-two" => Variant::ClassicTwo,
            "one-minimal" => Variant::OneMinimal,
            "timeline" => Variant::Timeline,
            "header-emphasis" => Variant::HeaderEmphasis,
            "modern-grid" => Variant::ModernGrid,
            "accent-bar" => Variant::AccentBar,
            "compact" => Variant::Compact,
            "photo-two" => Variant::PhotoTwo,
            _ => Variant::ClassicTwo,
        }
    }

    /// The variant's wire name
    pub fn name(self) -> &'static str {
        match self {
            Variant::ClassicTwo => "classic-two",
            Variant::OneMinimal => "one-minimal",
            Variant::Timeline => "timeline",
            Variant::HeaderEmphasis => "header-emphasis",
            Variant::ModernGrid => "modern-grid",
            Variant::AccentBar => "accent-bar",
            Variant::Compact => "compact",
            Variant::PhotoTwo => "photo-two",
        }
    }

    /// Whether body sections are partitioned into two columns
    pub fn is_two_column(self) -> bool {
        matches!(
            self,
            Variant::ClassicTwo | Variant::HeaderEmphasis | Variant::PhotoTwo
        )
    }
}

/// Render a document with the given variant and configuration
///
/// The input is never mutated; normalization happens on a working copy, so
/// empty or malformed documents still render all default sections.
pub fn render_document(document: &Document, variant: Variant, config: &RenderConfig) -> String {
    let sections = normalize_sections(&document.sections, document);

    let personal = sections
        .iter()
        .find(|s| s.kind == SectionKind::PersonalInfo)
        .and_then(|s| match &s.content {
            SectionContent::Personal(info) => Some(info),
            _ => None,
        });
    let header = html::header_html(document, personal, config);

    let content = if variant.is_two_column() {
        let body: Vec<&Section> = sections
            .iter()
            .filter(|s| s.kind != SectionKind::PersonalInfo)
            .collect();
        let (left, right) = partition(&body);
        classic_two(&left, &right)
    } else {
        let all: Vec<&Section> = sections.iter().collect();
        match variant {
            Variant::OneMinimal => one_minimal(&all),
            Variant::Timeline => timeline(&all),
            Variant::ModernGrid => modern_grid(&all),
            Variant::AccentBar => accent_bar(&all),
            Variant::Compact => compact(&all),
            // Two-column variants handled above
            _ => unreachable!(),
        }
    };

    html::page(&header, &content, &config.theme)
}

/// Split body sections by their column assignment; missing columns go right
fn partition<'a>(sections: &[&'a Section]) -> (Vec<&'a Section>, Vec<&'a Section>) {
    sections
        .iter()
        .copied()
        .partition(|s| s.column == Some(Column::Left))
}

fn blocks(sections: &[&Section], style: HeadingStyle) -> String {
    sections
        .iter()
        .map(|s| html::section_block(s, style))
        .collect()
}

fn classic_two(left: &[&Section], right: &[&Section]) -> String {
    format!(
        "<div class=\"two-col\">\n<div>\n{}</div>\n<div>\n{}</div>\n</div>\n",
        blocks(left, HeadingStyle::Underline),
        blocks(right, HeadingStyle::Underline)
    )
}

fn one_minimal(sections: &[&Section]) -> String {
    blocks(sections, HeadingStyle::Divider)
}

fn accent_bar(sections: &[&Section]) -> String {
    blocks(sections, HeadingStyle::Bar)
}

fn compact(sections: &[&Section]) -> String {
    blocks(sections, HeadingStyle::Underline)
}

/// Experience and Education entries get timeline dots; other sections
/// render as plain blocks
fn timeline(sections: &[&Section]) -> String {
    sections
        .iter()
        .map(|section| {
            let on_timeline = matches!(
                section.kind,
                SectionKind::Experience | SectionKind::Education
            );
            match (&section.content, on_timeline) {
                (SectionContent::Entries(entries), true) => {
                    let items: String = entries
                        .iter()
                        .map(|entry| {
                            format!(
                                "<div class=\"timeline-item\"><span class=\"dot\"></span><div class=\"item\">{}</div></div>\n",
                                html::entry_html(entry)
                            )
                        })
                        .collect();
                    format!(
                        "<section class=\"section\">\n{}\n<div class=\"timeline\">\n{}</div>\n</section>\n",
                        html::section_heading(&section.title, HeadingStyle::Underline),
                        items
                    )
                }
                _ => html::section_block(section, HeadingStyle::Underline),
            }
        })
        .collect()
}

/// Skills, Education, and Certifications drop into a three-column grid
/// below the remaining sections
fn modern_grid(sections: &[&Section]) -> String {
    let in_grid = |kind: SectionKind| {
        matches!(
            kind,
            SectionKind::Skills | SectionKind::Education | SectionKind::Certifications
        )
    };

    let others: Vec<&Section> = sections
        .iter()
        .filter(|s| !in_grid(s.kind))
        .copied()
        .collect();

    let mut grid = String::new();
    for kind in [
        SectionKind::Skills,
        SectionKind::Education,
        SectionKind::Certifications,
    ] {
        let mut matched = false;
        for section in sections.iter().filter(|s| s.kind == kind) {
            grid.push_str(&html::section_block(section, HeadingStyle::Underline));
            matched = true;
        }
        if !matched {
            grid.push_str(&html::section_block(
                &Section::empty(kind),
                HeadingStyle::Underline,
            ));
        }
    }

    format!(
        "{}<div class=\"grid-3\">\n{}</div>\n",
        blocks(&others, HeadingStyle::Underline),
        grid
    )
}
