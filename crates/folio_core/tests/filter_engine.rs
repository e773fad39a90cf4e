use folio_core::{
    derive_vocabulary, filter, matches, BlogPost, Facet, FilterCriteria, Publication, RecordId,
    Searchable,
};

fn publication(id: i64, title: &str, tags: &[&str], kind: &str) -> Publication {
    let mut publication = Publication::new(id, title, kind);
    publication.tags = tags.iter().map(|tag| tag.to_string()).collect();
    publication
}

fn scenario_records() -> Vec<Publication> {
    vec![
        publication(1, "AI Healthcare", &["AI", "Healthcare"], "Journal"),
        publication(2, "IoT Cities", &["IoT"], "Conference"),
    ]
}

fn catalog() -> Vec<Publication> {
    let mut records = vec![
        publication(
            1,
            "CerevianNet: Brain Tumor Classification",
            &["Deep Learning", "Medical Imaging"],
            "Journal",
        ),
        publication(
            2,
            "Resilient IoT for Smart Cities",
            &["IoT", "Smart Cities"],
            "Conference",
        ),
        publication(
            3,
            "Satellite Segmentation with Multi-Model AI",
            &["AI", "Remote Sensing"],
            "Conference",
        ),
        publication(
            4,
            "Transformers for Chest X-Ray",
            &["Transformers", "Medical Imaging"],
            "Preprint",
        ),
        publication(5, "Medication Compliance via IoT", &["IoT", "Healthcare"], "Journal"),
    ];
    records[3].abstract_text = "We adapt vision transformers to radiology workflows.".to_string();
    records
}

fn ids(records: &[&Publication]) -> Vec<RecordId> {
    records.iter().map(|record| record.id.clone()).collect()
}

fn sample_criteria() -> Vec<FilterCriteria> {
    let mut criteria = Vec::new();
    for term in ["", "iot", "MEDICAL", "  ai ", "radiology", "nothing-matches"] {
        for facet in [
            Facet::All,
            Facet::value("Journal"),
            Facet::value("Conference"),
            Facet::value("Preprint"),
            Facet::value("Workshop"),
        ] {
            criteria.push(FilterCriteria::new(term, facet));
        }
    }
    criteria
}

#[test]
fn search_term_selects_matching_titles_and_tags() {
    let records = scenario_records();
    let criteria = FilterCriteria::new("iot", Facet::All);

    let visible = filter(&records, &criteria);
    assert_eq!(ids(&visible), vec![RecordId::from(2)]);
}

#[test]
fn facet_selects_exact_category() {
    let records = scenario_records();
    let criteria = FilterCriteria::new("", Facet::value("Journal"));

    let visible = filter(&records, &criteria);
    assert_eq!(ids(&visible), vec![RecordId::from(1)]);
}

#[test]
fn text_and_facet_predicates_are_combined_with_and() {
    let records = catalog();
    let criteria = FilterCriteria::new("iot", Facet::value("Journal"));

    let visible = filter(&records, &criteria);
    assert_eq!(ids(&visible), vec![RecordId::from(5)]);
}

#[test]
fn search_matches_abstract_and_partial_tags_case_insensitively() {
    let records = catalog();

    let by_abstract = filter(&records, &FilterCriteria::new("RADIOLOGY", Facet::All));
    assert_eq!(ids(&by_abstract), vec![RecordId::from(4)]);

    let by_partial_tag = filter(&records, &FilterCriteria::new("sensing", Facet::All));
    assert_eq!(ids(&by_partial_tag), vec![RecordId::from(3)]);
}

#[test]
fn search_term_is_trimmed_before_matching() {
    let records = scenario_records();
    assert!(matches(&records[1], &FilterCriteria::new("  IoT  ", Facet::All)));
    assert!(matches(&records[0], &FilterCriteria::new("   ", Facet::All)));
}

#[test]
fn filter_preserves_source_order() {
    let records = catalog();
    for criteria in sample_criteria() {
        let visible = filter(&records, &criteria);
        let positions = visible
            .iter()
            .map(|record| {
                records
                    .iter()
                    .position(|candidate| candidate.id == record.id)
                    .expect("filtered record must come from the source")
            })
            .collect::<Vec<_>>();
        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "order broken for {criteria:?}"
        );
        for record in &records {
            let selected = visible.iter().any(|candidate| candidate.id == record.id);
            assert_eq!(selected, matches(record, &criteria));
        }
    }
}

#[test]
fn filter_is_idempotent() {
    let records = catalog();
    for criteria in sample_criteria() {
        let once = filter(&records, &criteria)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        let twice = filter(&once, &criteria);
        assert_eq!(ids(&twice), once.iter().map(|r| r.id.clone()).collect::<Vec<_>>());
    }
}

#[test]
fn neutral_criteria_keep_every_record() {
    let records = catalog();
    let visible = filter(&records, &FilterCriteria::default());
    assert_eq!(visible.len(), records.len());
    assert!(visible.iter().zip(&records).all(|(left, right)| *left == right));
}

#[test]
fn empty_result_is_a_plain_empty_vec() {
    let records = catalog();
    let visible = filter(&records, &FilterCriteria::new("quantum", Facet::All));
    assert!(visible.is_empty());
    let none: Vec<Publication> = Vec::new();
    assert!(filter(&none, &FilterCriteria::new("iot", Facet::All)).is_empty());
}

#[test]
fn vocabulary_lists_each_category_once_in_first_occurrence_order() {
    let records = catalog();
    assert_eq!(
        derive_vocabulary(&records),
        vec![
            Facet::All,
            Facet::value("Journal"),
            Facet::value("Conference"),
            Facet::value("Preprint"),
        ]
    );
}

#[test]
fn vocabulary_is_complete_for_tag_faceted_collections() {
    let mut first = BlogPost::new(1, "AI in Healthcare");
    first.tags = vec!["AI".into(), "Healthcare".into(), "AI".into()];
    let mut second = BlogPost::new(2, "Resilient IoT");
    second.tags = vec!["IoT".into(), "Healthcare".into(), "".into()];
    let posts = vec![first, second];

    let vocabulary = derive_vocabulary(&posts);
    assert_eq!(vocabulary[0], Facet::All);
    for post in &posts {
        for tag in post.tags().iter().filter(|tag| !tag.is_empty()) {
            let occurrences = vocabulary
                .iter()
                .filter(|facet| facet.as_value() == Some(tag.as_str()))
                .count();
            assert_eq!(occurrences, 1, "tag {tag} must appear exactly once");
        }
    }
    assert_eq!(vocabulary.len(), 4);
}

#[test]
fn tag_facet_matches_by_membership() {
    let mut first = BlogPost::new(1, "AI in Healthcare");
    first.tags = vec!["AI".into(), "Healthcare".into()];
    let mut second = BlogPost::new(2, "Resilient IoT");
    second.tags = vec!["IoT".into()];
    let posts = vec![first, second];

    let visible = filter(&posts, &FilterCriteria::new("", Facet::value("Healthcare")));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, RecordId::from(1));

    let partial = filter(&posts, &FilterCriteria::new("", Facet::value("Health")));
    assert!(partial.is_empty(), "facet match is exact, not substring");
}

#[test]
fn real_value_named_all_does_not_collide_with_sentinel() {
    let mut tagged_all = BlogPost::new(1, "Everything at once");
    tagged_all.tags = vec!["All".into()];
    let mut other = BlogPost::new(2, "Something else");
    other.tags = vec!["Misc".into()];
    let posts = vec![tagged_all, other];

    let vocabulary = derive_vocabulary(&posts);
    assert_eq!(
        vocabulary,
        vec![Facet::All, Facet::value("All"), Facet::value("Misc")]
    );

    let only_all_tag = filter(&posts, &FilterCriteria::new("", Facet::value("All")));
    assert_eq!(only_all_tag.len(), 1);
    assert_eq!(only_all_tag[0].id, RecordId::from(1));

    let unconstrained = filter(&posts, &FilterCriteria::new("", Facet::All));
    assert_eq!(unconstrained.len(), 2);
}

#[test]
fn searchable_text_concatenates_title_excerpt_and_tags() {
    let mut post = BlogPost::new(1, "Title");
    post.excerpt = "Excerpt".to_string();
    post.tags = vec!["One".into(), "Two".into()];
    assert_eq!(post.searchable_text(), "Title\nExcerpt\nOne\nTwo");

    let bare = BlogPost::new(2, "Only title");
    assert_eq!(bare.searchable_text(), "Only title");
}
