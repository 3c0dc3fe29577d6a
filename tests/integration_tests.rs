//! End-to-end tests for normalization and rendering

use pretty_assertions::assert_eq;

use vitae::{
    normalize_sections, render, template, Document, Section, SectionContent, SectionKind, Variant,
};

const REQUIRED_TITLES: [&str; 8] = [
    "personal information",
    "summary",
    "experience",
    "education",
    "skills",
    "projects",
    "certifications",
    "hobbies / interests",
];

#[test]
fn normalization_yields_each_required_title_once() {
    let mut technical = Section::empty(SectionKind::Skills);
    technical.title = "Technical Skills".to_string();
    technical.id = "technical-skills".to_string();

    let inputs: Vec<Vec<Section>> = vec![
        vec![],
        vec![Section::empty(SectionKind::Skills)],
        vec![
            Section::empty(SectionKind::Experience),
            Section::empty(SectionKind::Experience),
            Section::empty(SectionKind::Summary),
        ],
        // A variant title never stands in for the canonical one
        vec![technical],
    ];

    for input in inputs {
        let sections = normalize_sections(&input, &Document::default());
        for title in REQUIRED_TITLES {
            let count = sections
                .iter()
                .filter(|s| s.title.trim().to_ascii_lowercase() == title)
                .count();
            assert_eq!(count, 1, "title {:?} for input of {} sections", title, sections.len());
        }
    }
}

#[test]
fn normalization_is_idempotent() {
    let doc = Document {
        name: "Ada".to_string(),
        ..Document::default()
    };
    let input = vec![
        Section::empty(SectionKind::Projects),
        Section::empty(SectionKind::Skills),
    ];
    let once = normalize_sections(&input, &doc);
    let twice = normalize_sections(&once, &doc);
    assert_eq!(once, twice);

    let whole = vitae::normalize_document(&doc);
    assert_eq!(vitae::normalize_document(&whole), whole);
}

#[test]
fn all_variants_render_empty_document() {
    let doc = Document::default();
    for variant in Variant::ALL {
        let html = render(&doc, variant);
        assert!(html.starts_with("<!DOCTYPE html>"), "{:?}", variant);
        assert!(html.ends_with("</html>\n"), "{:?}", variant);
    }
}

#[test]
fn one_minimal_renders_name_and_all_default_sections() {
    let doc = Document {
        name: "Jane Roe".to_string(),
        ..Document::default()
    };
    let html = render(&doc, Variant::OneMinimal);
    assert!(html.contains("Jane Roe"));
    for title in [
        "Personal Information",
        "Summary",
        "Experience",
        "Education",
        "Skills",
        "Projects",
        "Certifications",
        "Hobbies / Interests",
    ] {
        assert!(html.contains(title), "missing section title {:?}", title);
    }
}

#[test]
fn skills_csv_renders_as_distinct_tokens() {
    let doc = Document::from_json(
        r#"{ "sections": [ { "title": "Skills", "items": ["Java, Go, SQL"] } ] }"#,
    )
    .expect("valid document");
    let html = render(&doc, Variant::ClassicTwo);
    assert!(html.contains(r#"<span class="skill">Java</span>"#));
    assert!(html.contains(r#"<span class="skill">Go</span>"#));
    assert!(html.contains(r#"<span class="skill">SQL</span>"#));
    // The raw CSV string never appears
    assert!(!html.contains("Java, Go, SQL"));
}

#[test]
fn script_bullet_is_escaped() {
    let doc = Document::from_json(
        r#"{ "sections": [ { "title": "Experience", "items": [
            { "role": "Dev", "bullets": ["Did X", "Did <script>Y</script>"] }
        ] } ] }"#,
    )
    .expect("valid document");
    let html = render(&doc, Variant::ClassicTwo);
    assert!(html.contains("Did X"));
    assert!(html.contains("Did &lt;script&gt;Y&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn default_photo_template_has_canned_extras() {
    let doc = template::default_document(8);
    let sections = normalize_sections(&doc.sections, &doc);
    let personal = sections
        .iter()
        .find(|s| s.kind == SectionKind::PersonalInfo)
        .expect("personal section present");
    match &personal.content {
        SectionContent::Personal(info) => {
            assert_eq!(info.extras.len(), 2);
            assert_eq!(info.extras[0].label, "LinkedIn");
            assert_eq!(info.extras[0].value, "linkedin.com/in/johndoe");
            assert_eq!(info.extras[1].label, "GitHub");
            assert_eq!(info.extras[1].value, "github.com/johndoe");
        }
        other => panic!("expected personal content, got {:?}", other),
    }
}

#[test]
fn user_text_cannot_inject_markup() {
    let hostile = r#"<img src=x onerror="alert('1')">&"#;
    let json = format!(
        r#"{{ "name": {n:?}, "title": {n:?}, "sections": [
            {{ "title": "Summary", "items": [{n:?}] }},
            {{ "title": "Skills", "items": [{n:?}] }}
        ] }}"#,
        n = hostile
    );
    let doc = Document::from_json(&json).expect("valid document");
    for variant in Variant::ALL {
        let html = render(&doc, variant);
        assert!(!html.contains("<img src=x"), "{:?}", variant);
        assert!(!html.contains("onerror=\"alert"), "{:?}", variant);
    }
}

#[test]
fn escape_round_trips() {
    let unescape = |s: &str| {
        s.replace("&#39;", "'")
            .replace("&quot;", "\"")
            .replace("&gt;", ">")
            .replace("&lt;", "<")
            .replace("&amp;", "&")
    };
    for original in [
        "plain text",
        "a < b && c > d",
        r#"He said "don't""#,
        "<script>alert(1)</script>",
        "",
    ] {
        assert_eq!(unescape(&vitae::escape_html(original)), original);
    }
}

#[test]
fn frontend_fixture_renders_with_every_template() {
    // A document shaped the way the editing frontend persists it
    let json = r#"{
        "name": "Ada Lovelace",
        "title": "Analyst",
        "email": "ada@example.com",
        "phone": "+44 20 7946 0000",
        "location": "London",
        "photoUrl": "https://example.com/ada.png",
        "sections": [
            { "id": "personal-information", "title": "Personal Information", "column": "right",
              "items": [ { "name": "Ada Lovelace", "title": "Analyst",
                           "email": "ada@example.com",
                           "extras": [ { "label": "GitHub", "value": "github.com/ada", "icon": "github" } ] } ] },
            { "id": "summary", "title": "Summary", "column": "right",
              "items": ["First programmer."] },
            { "id": "skills", "title": "Skills", "column": "left",
              "items": ["Mathematics, Analytical Engines"] },
            { "id": "experience", "title": "Experience", "column": "right",
              "items": [ { "role": "Collaborator", "company": "Babbage & Co",
                           "startDate": "1842", "endDate": "1843",
                           "bullets": ["Published the first algorithm"] } ] }
        ]
    }"#;
    let doc = Document::from_json(json).expect("valid document");

    for tpl in &template::TEMPLATES {
        let html = tpl.render(&doc, &vitae::Theme::default());
        assert!(html.contains("Ada Lovelace"), "template {}", tpl.id);
        assert!(html.contains("Babbage &amp; Co"), "template {}", tpl.id);
        assert!(
            html.contains(r#"href="https://github.com/ada""#),
            "template {}",
            tpl.id
        );
        // Only the photo template shows the photo
        assert_eq!(html.contains("<img"), tpl.with_photo, "template {}", tpl.id);
    }
}
