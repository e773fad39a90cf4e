use folio_core::{
    load_records, parse_records, BlogPost, CatalogStore, ContentError, Facet, Publication,
    RecordId,
};
use std::io::Write;

const PUBLICATIONS_JSON: &str = r#"[
  {
    "id": "cerevian-net",
    "title": "CerevianNet: Brain Tumor Classification",
    "authors": ["A. Dhrubo", "B. Rahman"],
    "venue": "IEEE Access",
    "year": 2024,
    "type": "Journal",
    "abstract": "A lightweight CNN for MRI based tumor grading.",
    "tags": ["Medical Imaging", "Deep Learning"],
    "featured": true
  },
  {
    "id": "satellite-seg",
    "title": "Multi-Model AI-Driven Satellite Segmentation",
    "type": "Conference",
    "tags": ["Remote Sensing"],
    "link": "https://example.org/satellite"
  }
]"#;

#[test]
fn parse_publications_keeps_order_and_defaults_optional_fields() {
    let records: Vec<Publication> =
        parse_records(PUBLICATIONS_JSON).expect("publications fixture should parse");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, RecordId::from("cerevian-net"));
    assert_eq!(records[0].kind, "Journal");
    assert_eq!(records[0].year, Some(2024));
    assert!(records[0].featured);
    assert!(records[0].link.is_empty());

    assert_eq!(records[1].id, RecordId::from("satellite-seg"));
    assert!(records[1].authors.is_empty());
    assert!(records[1].abstract_text.is_empty());
    assert!(!records[1].featured);
}

#[test]
fn parse_blog_posts_with_numeric_ids_and_camel_case_fields() {
    let json = r#"[
      {"id": 1, "title": "The Future of AI in Healthcare", "readTime": "8 min read",
       "tags": ["AI"], "slug": "future-ai-healthcare", "featured": true},
      {"id": 2, "title": "Building Resilient IoT Systems"}
    ]"#;
    let posts: Vec<BlogPost> = parse_records(json).expect("blog fixture should parse");

    assert_eq!(posts[0].id, RecordId::from(1));
    assert_eq!(posts[0].read_time, "8 min read");
    assert!(posts[1].tags.is_empty());
    assert!(posts[1].slug.is_empty());
}

#[test]
fn null_optional_fields_read_as_empty() {
    let publications = r#"[{"id": "p1", "title": "T", "link": null, "abstract": null,
        "authors": null, "tags": null, "type": null, "year": null, "featured": null}]"#;
    let records: Vec<Publication> =
        parse_records(publications).expect("null optionals should be accepted");
    assert!(records[0].link.is_empty());
    assert!(records[0].abstract_text.is_empty());
    assert!(records[0].authors.is_empty());
    assert!(records[0].tags.is_empty());
    assert!(records[0].kind.is_empty());
    assert_eq!(records[0].year, None);
    assert!(!records[0].featured);

    let posts = r#"[{"id": 1, "title": "Post", "excerpt": null, "readTime": null, "slug": null}]"#;
    let posts: Vec<BlogPost> = parse_records(posts).expect("null optionals should be accepted");
    assert!(posts[0].excerpt.is_empty());
    assert!(posts[0].read_time.is_empty());
    assert_eq!(posts[0].handoff(), None);
}

#[test]
fn parse_rejects_duplicate_ids() {
    let json = r#"[{"id": 1, "title": "A"}, {"id": 1, "title": "B"}]"#;
    let err = parse_records::<BlogPost>(json).expect_err("duplicate ids must fail");
    assert!(matches!(err, ContentError::DuplicateId(ref id) if id == "1"));
}

#[test]
fn parse_rejects_blank_title_and_missing_id() {
    let blank = r#"[{"id": 1, "title": "A"}, {"id": 2, "title": "  "}]"#;
    let err = parse_records::<BlogPost>(blank).expect_err("blank title must fail");
    assert!(matches!(
        err,
        ContentError::MissingField {
            position: 1,
            field: "title"
        }
    ));

    let missing_id = r#"[{"title": "No id"}]"#;
    let err = parse_records::<BlogPost>(missing_id).expect_err("missing id must fail");
    assert!(matches!(err, ContentError::Parse(_)));
}

#[test]
fn load_records_reads_file_into_a_catalog() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(PUBLICATIONS_JSON.as_bytes())
        .expect("fixture should be written");

    let records: Vec<Publication> = load_records(file.path()).expect("file should load");
    let mut store = CatalogStore::new(records);
    store.set_facet(Facet::value("Conference"));

    assert!(store.featured().is_none());
    assert_eq!(store.visible_len(), 1);
}

#[test]
fn load_records_reports_io_errors_with_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("missing.json");

    let err = load_records::<Publication>(&missing).expect_err("missing file must fail");
    assert!(matches!(err, ContentError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}
