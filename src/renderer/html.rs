//! HTML building blocks shared by all layout strategies
//!
//! Every string that originates from document data passes through
//! [`escape_html`] before it is embedded; layouts only ever compose the
//! primitives in this module, so visual variation never bypasses escaping.

use crate::document::{Document, Entry, PersonalInfo, Section, SectionContent};
use crate::theme::Theme;

use super::RenderConfig;

/// How a section heading is decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    /// Solid underline below the heading
    Underline,
    /// Accent bar to the left of the heading
    Bar,
    /// Dashed divider below the heading
    Divider,
}

impl HeadingStyle {
    fn class(self) -> &'static str {
        match self {
            HeadingStyle::Underline => "section-underline",
            HeadingStyle::Bar => "section-bar",
            HeadingStyle::Divider => "section-divider",
        }
    }
}

/// Escape HTML special characters in user-supplied text
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render a section heading with the given decoration
pub(crate) fn section_heading(title: &str, style: HeadingStyle) -> String {
    format!(
        r#"<div class="section-title {}">{}</div>"#,
        style.class(),
        escape_html(title)
    )
}

/// Render a full section: heading plus item body
pub(crate) fn section_block(section: &Section, style: HeadingStyle) -> String {
    let mut out = String::new();
    out.push_str("<section class=\"section\">\n");
    out.push_str(&section_heading(&section.title, style));
    out.push_str("\n<div class=\"section-body\">\n");
    out.push_str(&content_html(&section.content));
    out.push_str("</div>\n</section>\n");
    out
}

/// Render section content as item divs
pub(crate) fn content_html(content: &SectionContent) -> String {
    match content {
        SectionContent::Text(paragraphs) => paragraphs
            .iter()
            .map(|p| format!("<div class=\"item\">{}</div>\n", escape_html(p)))
            .collect(),
        SectionContent::Skills(tokens) => {
            if tokens.is_empty() {
                String::new()
            } else {
                let spans = tokens
                    .iter()
                    .map(|t| format!(r#"<span class="skill">{}</span>"#, escape_html(t)))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("<div class=\"item\">{}</div>\n", spans)
            }
        }
        SectionContent::Entries(entries) => entries
            .iter()
            .map(|e| format!("<div class=\"item\">{}</div>\n", entry_html(e)))
            .collect(),
        // A personal record rendered in the body only shows the headline,
        // mirroring how the editor's single-column layouts treated it
        SectionContent::Personal(info) => {
            if info.title.is_empty() {
                String::new()
            } else {
                format!(
                    "<div class=\"item\"><div class=\"entry-heading\">{}</div></div>\n",
                    escape_html(&info.title)
                )
            }
        }
    }
}

/// Render one structured entry: heading line, date, description, bullets
pub(crate) fn entry_html(entry: &Entry) -> String {
    let heading = [entry.heading.as_str(), entry.organization.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" \u{2022} ");
    let date = [entry.start_date.as_str(), entry.end_date.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" - ");

    let mut out = String::from("<div>");
    if !heading.is_empty() {
        out.push_str(&format!(
            r#"<div class="entry-heading">{}</div>"#,
            escape_html(&heading)
        ));
    }
    if !date.is_empty() {
        out.push_str(&format!(r#"<div class="muted">{}</div>"#, escape_html(&date)));
    }
    if !entry.description.is_empty() {
        out.push_str(&format!("<div>{}</div>", escape_html(&entry.description)));
    }
    if !entry.bullets.is_empty() {
        out.push_str("<ul class=\"bullets\">");
        for bullet in &entry.bullets {
            out.push_str(&format!("<li>{}</li>", escape_html(bullet)));
        }
        out.push_str("</ul>");
    }
    out.push_str("</div>");
    out
}

/// Strip the scheme (and a leading www.) for link display text
fn display_url(value: &str) -> &str {
    for scheme in ["https://", "http://"] {
        if let Some(rest) = value.strip_prefix(scheme) {
            return rest.strip_prefix("www.").unwrap_or(rest);
        }
    }
    value
}

/// A plain contact item (email, phone, location)
fn contact_plain(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    Some(format!(
        r#"<span class="contact-item">{}</span>"#,
        escape_html(value)
    ))
}

/// A labelled social link; bare values get an https:// href
fn contact_link(label: &str, value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let href = if value.starts_with("http://") || value.starts_with("https://") {
        value.to_string()
    } else {
        format!("https://{}", value)
    };
    Some(format!(
        r#"<span class="contact-item">{}: <a href="{}" target="_blank" rel="noopener" class="social-link">{}</a></span>"#,
        escape_html(label),
        escape_html(&href),
        escape_html(display_url(value))
    ))
}

/// Render the page header from personal data with document-field fallbacks
pub(crate) fn header_html(
    document: &Document,
    personal: Option<&PersonalInfo>,
    config: &RenderConfig,
) -> String {
    let pick = |from_personal: Option<&str>, from_document: &str| -> String {
        match from_personal {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => from_document.to_string(),
        }
    };

    let name = pick(personal.map(|p| p.name.as_str()), &document.name);
    let title = pick(personal.map(|p| p.title.as_str()), &document.title);
    let email = pick(personal.map(|p| p.email.as_str()), &document.email);
    let phone = pick(personal.map(|p| p.phone.as_str()), &document.phone);
    let location = pick(personal.map(|p| p.location.as_str()), &document.location);

    let mut contacts: Vec<String> = Vec::new();
    contacts.extend(contact_plain(&email));
    contacts.extend(contact_plain(&phone));
    contacts.extend(contact_plain(&location));
    if let Some(personal) = personal {
        for extra in &personal.extras {
            contacts.extend(contact_link(&extra.label, &extra.value));
        }
    }
    let contact_grid = contacts.join("\n<span class=\"contact-separator\">\u{2022}</span>\n");

    let photo = match &document.photo_url {
        Some(url) if config.show_photo && !url.is_empty() => format!(
            "\n<img src=\"{}\" alt=\"photo\" class=\"photo\"/>",
            escape_html(url)
        ),
        _ => String::new(),
    };

    format!(
        r#"<div class="header">
<div class="title-wrap">
<div class="name">{}</div>
<div class="role">{}</div>
<div class="contact-grid">
{}
</div>{}
</div>
</div>"#,
        escape_html(&name),
        escape_html(&title),
        contact_grid,
        photo
    )
}

/// Print-oriented page CSS; colors come from theme custom properties
const PAGE_CSS: &str = r#"@page { size: A4; margin: 22mm 20mm; }
* { box-sizing: border-box; }
body { font-family: var(--font-family); color: var(--text); line-height: 1.55; }
.name { font-size: 22pt; font-weight: 800; color: var(--accent); text-align: center; letter-spacing: .02em; }
.role { font-size: 12pt; color: var(--text-subtle); text-align: center; margin-top: 2px; }
.contact-grid { display: flex; flex-wrap: wrap; justify-content: center; align-items: center; gap: 6px 12px; margin-top: 6px; line-height: 1.4; }
.contact-item { white-space: nowrap; color: var(--text-contact); font-size: 9.5pt; display: inline-block; }
.contact-separator { color: var(--separator); font-size: 8pt; margin: 0 2px; }
.social-link { color: var(--accent); text-decoration: none; font-weight: 500; }
.social-link:hover { text-decoration: underline; color: var(--accent-link); }
.muted { font-size: 8.5pt; color: var(--muted); font-style: italic; }
.section { margin: 16px 0; }
.section-title { font-size: 13pt; font-weight: 700; letter-spacing: .08em; text-transform: uppercase; color: var(--heading); }
.section-underline { border-bottom: 1px solid var(--rule); padding-bottom: 4px; }
.section-bar { border-left: 3px solid var(--accent); padding-left: 8px; }
.section-divider { border-bottom: 1px dashed var(--rule); padding-bottom: 4px; }
.section-body { margin-top: 8px; }
.item { margin-bottom: 8px; font-size: 10.5pt; }
.entry-heading { font-weight: 600; }
.skill { display: inline-block; border: 1px solid var(--rule); border-radius: 4px; padding: 1px 6px; margin: 0 4px 4px 0; font-size: 9.5pt; }
.bullets { list-style: disc; padding-left: 18px; margin: 6px 0 0 0; }
.two-col { display: grid; grid-template-columns: 34% 66%; gap: 16px; }
.grid-3 { display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; }
.header { margin-bottom: 16px; }
.photo { width: 68px; height: 68px; border-radius: 9999px; object-fit: cover; display: block; margin: 10px auto 0 auto; }
.title-wrap { text-align: center; }
.timeline { position: relative; margin-left: 10px; padding-left: 16px; }
.timeline:before { content: ''; position: absolute; left: 0; top: 0; bottom: 0; width: 2px; background: var(--rule); }
.timeline-item { position: relative; margin-left: 8px; }
.dot { position: absolute; left: -21px; width: 10px; height: 10px; border-radius: 9999px; background: var(--accent); margin-top: 3px; }
@media (max-width: 640px) { .two-col, .grid-3 { display: block; } }"#;

/// Theme tokens emitted as CSS custom properties, in a fixed order
fn theme_css(theme: &Theme) -> String {
    let tokens = [
        "accent",
        "accent-link",
        "text",
        "text-subtle",
        "text-contact",
        "muted",
        "separator",
        "heading",
        "rule",
    ];
    let mut css = String::from(":root {\n");
    for token in tokens {
        css.push_str(&format!(
            "  --{}: {};\n",
            token,
            theme.resolve_or_default(token)
        ));
    }
    css.push_str(&format!("  --font-family: {};\n", theme.font_family));
    css.push_str("}");
    css
}

/// Assemble the final standalone HTML document
pub(crate) fn page(header: &str, content: &str, theme: &Theme) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n<style>\n");
    out.push_str(&theme_css(theme));
    out.push('\n');
    out.push_str(PAGE_CSS);
    out.push_str("\n</style>\n</head>\n<body>\n<div class=\"container\">\n");
    out.push_str(header);
    out.push('\n');
    out.push_str(content);
    out.push_str("</div>\n</body>\n</html>\n");
    out
}
