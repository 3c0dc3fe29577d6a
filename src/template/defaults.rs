//! Canned sample documents shown when a new resume is created
//!
//! The sample already satisfies the normalizer's invariants apart from the
//! Personal Information section, which normalization synthesizes from the
//! top-level fields (so the placeholder social links stay in one place).

use crate::document::{slug, Document, Entry, Section, SectionContent, SectionKind};

/// Template ids whose sample document carries a placeholder photo
///
/// This set comes from the editor and is wider than the one photo template;
/// kept as-is for wire compatibility.
const WITH_PHOTO_IDS: [u8; 4] = [2, 4, 6, 8];

const PLACEHOLDER_PHOTO: &str = "https://via.placeholder.com/128x128.png?text=Photo";

/// Return the canned sample document for a template id
pub fn default_document(template_id: u8) -> Document {
    let photo_url = WITH_PHOTO_IDS
        .contains(&template_id)
        .then(|| PLACEHOLDER_PHOTO.to_string());

    Document {
        name: "John Doe".to_string(),
        title: "Software Engineer".to_string(),
        email: "john.doe@email.com".to_string(),
        phone: "+1 555-123-4567".to_string(),
        location: "San Francisco, CA".to_string(),
        photo_url,
        sections: vec![
            text_section(
                SectionKind::Summary,
                "Motivated software developer with 3+ years of experience building scalable \
                 web applications using Java, Spring Boot, and React. Passionate about clean \
                 code, performance, and delivering user-centric solutions.",
            ),
            entry_section(
                SectionKind::Experience,
                vec![
                    Entry {
                        heading: "Software Engineer".to_string(),
                        organization: "XYZ Corp".to_string(),
                        start_date: "Jun 2020".to_string(),
                        end_date: "Jul 2023".to_string(),
                        description: String::new(),
                        bullets: vec![
                            "Developed and maintained RESTful services with Spring Boot serving 100k+ monthly users".to_string(),
                            "Implemented React components and state management to enhance UX and reduce bounce rate by 15%".to_string(),
                            "Optimized PostgreSQL queries and added indexes, improving key endpoints by 40%".to_string(),
                        ],
                    },
                    Entry {
                        heading: "Backend Developer (Intern)".to_string(),
                        organization: "ABC Solutions".to_string(),
                        start_date: "Jan 2020".to_string(),
                        end_date: "May 2020".to_string(),
                        description: String::new(),
                        bullets: vec![
                            "Built data processing pipelines in Java and integrated third-party APIs".to_string(),
                            "Wrote unit tests and documentation to improve service reliability".to_string(),
                        ],
                    },
                ],
            ),
            entry_section(
                SectionKind::Education,
                vec![Entry {
                    heading: "B.Tech in Computer Science".to_string(),
                    organization: "ABC University".to_string(),
                    start_date: "2016".to_string(),
                    end_date: "2020".to_string(),
                    description: String::new(),
                    bullets: vec![
                        "Graduated with First Class; Coursework: Data Structures, Databases, Algorithms".to_string(),
                    ],
                }],
            ),
            skills_section(&[
                "Java",
                "Spring Boot",
                "React.js",
                "TypeScript",
                "PostgreSQL",
                "REST APIs",
                "Git",
                "Problem Solving",
            ]),
            entry_section(
                SectionKind::Projects,
                vec![Entry {
                    heading: "E-commerce Web App".to_string(),
                    organization: "Personal Project".to_string(),
                    start_date: String::new(),
                    end_date: String::new(),
                    description: String::new(),
                    bullets: vec![
                        "Built with React and Spring Boot; implemented cart, checkout, and admin dashboard".to_string(),
                        "Deployed on cloud with CI/CD; added payment integration and email notifications".to_string(),
                    ],
                }],
            ),
            text_section(
                SectionKind::Certifications,
                "AWS Certified Solutions Architect \u{2013} Associate",
            ),
            text_section(SectionKind::Hobbies, "Reading, Traveling, Photography"),
        ],
    }
}

fn base_section(kind: SectionKind, content: SectionContent) -> Section {
    let title = kind.canonical_title().to_string();
    Section {
        id: slug(&title),
        title,
        kind,
        column: Some(kind.default_column()),
        content,
    }
}

fn text_section(kind: SectionKind, text: &str) -> Section {
    base_section(kind, SectionContent::Text(vec![text.to_string()]))
}

fn skills_section(tokens: &[&str]) -> Section {
    base_section(
        SectionKind::Skills,
        SectionContent::Skills(tokens.iter().map(|t| t.to_string()).collect()),
    )
}

fn entry_section(kind: SectionKind, entries: Vec<Entry>) -> Section {
    base_section(kind, SectionContent::Entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Column;
    use crate::normalize::normalize_sections;

    #[test]
    fn test_photo_ids() {
        for id in 1..=8u8 {
            let document = default_document(id);
            assert_eq!(
                document.photo_url.is_some(),
                WITH_PHOTO_IDS.contains(&id),
                "id {}",
                id
            );
        }
    }

    #[test]
    fn test_sample_has_seven_body_sections() {
        let document = default_document(1);
        assert_eq!(document.sections.len(), 7);
        assert!(document
            .sections
            .iter()
            .all(|s| s.kind != SectionKind::PersonalInfo));
    }

    #[test]
    fn test_sample_columns_match_kind_defaults() {
        let document = default_document(1);
        for section in &document.sections {
            assert_eq!(section.column, Some(section.kind.default_column()));
        }
        let skills = document
            .sections
            .iter()
            .find(|s| s.kind == SectionKind::Skills)
            .expect("skills present");
        assert_eq!(skills.column, Some(Column::Left));
    }

    #[test]
    fn test_sample_normalizes_without_changes_to_existing() {
        let document = default_document(1);
        let normalized = normalize_sections(&document.sections, &document);
        // Only Personal Information is added
        assert_eq!(normalized.len(), 8);
        assert_eq!(&normalized[..7], &document.sections[..]);
    }
}
