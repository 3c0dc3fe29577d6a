//! Resume document model and permissive JSON ingest
//!
//! The editing frontend persists documents as loose JSON: section `items`
//! may be plain strings, structured entry records, or a personal-information
//! record depending on the section, and any field may be absent. This module
//! deserializes that shape into a typed model where each section carries its
//! own content discriminant, so the rest of the crate never inspects
//! dynamically-typed values.
//!
//! Ingest is total over JSON values: missing or malformed fields default
//! silently, matching the permissive-parsing policy of the editor. Only
//! syntactically invalid JSON is an error.

use std::path::Path;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors that can occur when loading a document from JSON
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read document file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level resume document owned by an editing session
///
/// The top-level contact fields exist so a missing Personal Information
/// section can be synthesized from them during normalization.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub sections: Vec<Section>,
}

impl Document {
    /// Parse a document from a JSON string
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a document from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize the document back to its JSON wire shape
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Which column a section is placed in for two-column layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Left,
    Right,
}

/// Semantic kind of a section, derived from its title
///
/// Matching is case-insensitive and whitespace-trimmed. "Skills" and
/// "Hobbies" match by containment so variant titles like "Technical Skills"
/// or "Hobbies / Interests" classify correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    PersonalInfo,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Hobbies,
    Custom,
}

impl SectionKind {
    /// The eight kinds every normalized document must contain, in canonical order
    pub const REQUIRED: [SectionKind; 8] = [
        SectionKind::PersonalInfo,
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Certifications,
        SectionKind::Hobbies,
    ];

    /// Classify a section title
    pub fn from_title(title: &str) -> SectionKind {
        let key = title.trim().to_ascii_lowercase();
        match key.as_str() {
            "personal information" => SectionKind::PersonalInfo,
            "summary" => SectionKind::Summary,
            "experience" => SectionKind::Experience,
            "education" => SectionKind::Education,
            "projects" => SectionKind::Projects,
            "certifications" => SectionKind::Certifications,
            _ if key.contains("skills") => SectionKind::Skills,
            _ if key.contains("hobbies") => SectionKind::Hobbies,
            _ => SectionKind::Custom,
        }
    }

    /// Title used when a required section has to be injected
    pub fn canonical_title(self) -> &'static str {
        match self {
            SectionKind::PersonalInfo => "Personal Information",
            SectionKind::Summary => "Summary",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
            SectionKind::Certifications => "Certifications",
            SectionKind::Hobbies => "Hobbies / Interests",
            SectionKind::Custom => "",
        }
    }

    /// Column a section of this kind defaults to
    pub fn default_column(self) -> Column {
        match self {
            SectionKind::Skills | SectionKind::Certifications | SectionKind::Hobbies => {
                Column::Left
            }
            _ => Column::Right,
        }
    }

    /// Kinds whose items are structured entries rather than plain text
    pub fn is_entry_list(self) -> bool {
        matches!(
            self,
            SectionKind::Experience | SectionKind::Education | SectionKind::Projects
        )
    }
}

/// A named, orderable block of resume content
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub kind: SectionKind,
    /// Filled by normalization when absent
    pub column: Option<Column>,
    pub content: SectionContent,
}

impl Section {
    /// Create an empty section of the given kind with its canonical title
    pub fn empty(kind: SectionKind) -> Self {
        let title = kind.canonical_title().to_string();
        Section {
            id: slug(&title),
            title,
            kind,
            column: Some(kind.default_column()),
            content: SectionContent::empty_for(kind),
        }
    }
}

/// Section content, tagged by the section's semantic kind
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    /// Free-text paragraphs (Summary, Certifications, custom sections)
    Text(Vec<String>),
    /// Individual skill tokens, already comma-split and trimmed
    Skills(Vec<String>),
    /// Dated entries with bullet points (Experience, Education, Projects)
    Entries(Vec<Entry>),
    /// The header record; never rendered as a body section
    Personal(PersonalInfo),
}

impl SectionContent {
    /// Empty content of the shape a section kind expects
    pub fn empty_for(kind: SectionKind) -> Self {
        match kind {
            SectionKind::PersonalInfo => SectionContent::Personal(PersonalInfo::default()),
            SectionKind::Skills => SectionContent::Skills(vec![]),
            k if k.is_entry_list() => SectionContent::Entries(vec![]),
            _ => SectionContent::Text(vec![]),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SectionContent::Text(items) => items.is_empty(),
            SectionContent::Skills(tokens) => tokens.is_empty(),
            SectionContent::Entries(entries) => entries.is_empty(),
            SectionContent::Personal(_) => false,
        }
    }
}

/// One dated entry in an Experience/Education/Projects section
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Entry {
    /// Role or degree; the wire shape calls this `role` (or `title`)
    #[serde(rename = "role", skip_serializing_if = "String::is_empty")]
    pub heading: String,
    #[serde(rename = "company", skip_serializing_if = "String::is_empty")]
    pub organization: String,
    #[serde(rename = "startDate", skip_serializing_if = "String::is_empty")]
    pub start_date: String,
    #[serde(rename = "endDate", skip_serializing_if = "String::is_empty")]
    pub end_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
}

/// Identity and contact data used to populate the rendered header
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PersonalInfo {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<ContactLink>,
}

/// A labelled social/contact link shown in the header
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactLink {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub icon: String,
}

/// Derive a stable section id from its title
///
/// Punctuation-only words ("Hobbies / Interests") are dropped so ids stay
/// plain hyphenated tokens.
pub fn slug(title: &str) -> String {
    title
        .trim()
        .to_ascii_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().any(|c| c.is_ascii_alphanumeric()))
        .collect::<Vec<_>>()
        .join("-")
}

/// Split a comma-separated skills string into trimmed, non-empty tokens
pub fn split_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

// --- Serialization: sections write the original `items` wire shape ---

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Section", 4)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("title", &self.title)?;
        if let Some(column) = &self.column {
            state.serialize_field("column", column)?;
        } else {
            state.skip_field("column")?;
        }
        match &self.content {
            SectionContent::Text(items) => state.serialize_field("items", items)?,
            SectionContent::Skills(tokens) => state.serialize_field("items", tokens)?,
            SectionContent::Entries(entries) => state.serialize_field("items", entries)?,
            SectionContent::Personal(info) => {
                state.serialize_field("items", std::slice::from_ref(info))?
            }
        }
        state.end()
    }
}

// --- Deserialization: a raw intermediate absorbs the loose wire shape ---

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct RawDocument {
    name: String,
    title: String,
    email: String,
    phone: String,
    location: String,
    photo_url: Option<String>,
    sections: Vec<RawSection>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawSection {
    id: String,
    title: String,
    column: Option<String>,
    items: Vec<RawItem>,
}

/// A section item as it appears on the wire: either a string or a record
///
/// The catchall keeps ingest total; a number or bool item degrades to an
/// empty value instead of failing the whole document.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawItem {
    Text(String),
    Record(Box<RawRecord>),
    Other(serde_json::Value),
}

/// Union of the entry and personal-information record shapes; the section
/// kind decides which fields are meaningful
#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct RawRecord {
    role: Option<String>,
    title: Option<String>,
    company: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    description: Option<String>,
    bullets: Vec<String>,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    location: Option<String>,
    extras: Vec<ContactLink>,
}

impl RawRecord {
    fn into_entry(self) -> Entry {
        Entry {
            heading: self.role.or(self.title).unwrap_or_default(),
            organization: self.company.unwrap_or_default(),
            start_date: self.start_date.unwrap_or_default(),
            end_date: self.end_date.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            bullets: self.bullets,
        }
    }

    fn into_personal(self) -> PersonalInfo {
        PersonalInfo {
            name: self.name.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            extras: self.extras,
        }
    }
}

impl RawSection {
    fn into_section(self) -> Section {
        let kind = SectionKind::from_title(&self.title);
        let column = self.column.as_deref().map(|c| {
            if c.eq_ignore_ascii_case("left") {
                Column::Left
            } else {
                Column::Right
            }
        });

        let content = match kind {
            SectionKind::PersonalInfo => {
                let info = self
                    .items
                    .into_iter()
                    .find_map(|item| match item {
                        RawItem::Record(record) => Some(record.into_personal()),
                        _ => None,
                    })
                    .unwrap_or_default();
                SectionContent::Personal(info)
            }
            SectionKind::Skills => {
                let tokens = self
                    .items
                    .into_iter()
                    .flat_map(|item| match item {
                        RawItem::Text(text) => split_skills(&text),
                        _ => vec![],
                    })
                    .collect();
                SectionContent::Skills(tokens)
            }
            k if k.is_entry_list() => {
                let entries = self
                    .items
                    .into_iter()
                    .map(|item| match item {
                        RawItem::Record(record) => record.into_entry(),
                        // A bare string in an entry section becomes a description-only entry
                        RawItem::Text(text) => Entry {
                            description: text,
                            ..Entry::default()
                        },
                        RawItem::Other(_) => Entry::default(),
                    })
                    .collect();
                SectionContent::Entries(entries)
            }
            _ => {
                // Custom sections with record items are treated as entry lists
                let has_records = self
                    .items
                    .iter()
                    .any(|item| matches!(item, RawItem::Record(_)));
                if has_records {
                    let entries = self
                        .items
                        .into_iter()
                        .map(|item| match item {
                            RawItem::Record(record) => record.into_entry(),
                            RawItem::Text(text) => Entry {
                                description: text,
                                ..Entry::default()
                            },
                            RawItem::Other(_) => Entry::default(),
                        })
                        .collect();
                    SectionContent::Entries(entries)
                } else {
                    let paragraphs = self
                        .items
                        .into_iter()
                        .filter_map(|item| match item {
                            RawItem::Text(text) => Some(text),
                            _ => None,
                        })
                        .collect();
                    SectionContent::Text(paragraphs)
                }
            }
        };

        let id = if self.id.is_empty() {
            slug(&self.title)
        } else {
            self.id
        };

        Section {
            id,
            title: self.title,
            kind,
            column,
            content,
        }
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawDocument::deserialize(deserializer)?;
        Ok(Document {
            name: raw.name,
            title: raw.title,
            email: raw.email,
            phone: raw.phone,
            location: raw.location,
            photo_url: raw.photo_url,
            sections: raw.sections.into_iter().map(RawSection::into_section).collect(),
        })
    }
}
