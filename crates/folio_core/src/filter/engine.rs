//! Pure filter and vocabulary functions.
//!
//! # Invariants
//! - Output order always follows input order.
//! - Text matching is case-insensitive substring matching over title,
//!   excerpt and every tag.
//! - Facet matching is exact: category equality for `FacetSource::Field`
//!   collections, tag membership for `FacetSource::Tags` collections.

use crate::filter::criteria::{Facet, FilterCriteria};
use crate::model::record::{FacetSource, Facetable, Searchable};
use std::collections::HashSet;

/// Returns `Facet::All` followed by every distinct facet value in first
/// occurrence order.
///
/// Values come from the category field or from tags, depending on the
/// record type's `FACET_SOURCE`. Blank values are skipped.
pub fn derive_vocabulary<R>(records: &[R]) -> Vec<Facet>
where
    R: Searchable + Facetable,
{
    let mut seen = HashSet::new();
    let mut vocabulary = vec![Facet::All];

    for record in records {
        match R::FACET_SOURCE {
            FacetSource::Field => {
                if let Some(value) = record.facet_value() {
                    push_unique(&mut seen, &mut vocabulary, value);
                }
            }
            FacetSource::Tags => {
                for tag in record.tags() {
                    push_unique(&mut seen, &mut vocabulary, tag);
                }
            }
        }
    }

    vocabulary
}

fn push_unique<'a>(seen: &mut HashSet<&'a str>, vocabulary: &mut Vec<Facet>, value: &'a str) {
    if value.trim().is_empty() {
        return;
    }
    if seen.insert(value) {
        vocabulary.push(Facet::value(value));
    }
}

/// Whether one record satisfies both the text and facet predicates.
pub fn matches<R>(record: &R, criteria: &FilterCriteria) -> bool
where
    R: Searchable + Facetable,
{
    let needle = criteria.normalized_search_term();
    matches_text(record, &needle) && matches_facet(record, &criteria.facet)
}

/// Returns the records satisfying `criteria`, in their original order.
pub fn filter<'a, R>(records: &'a [R], criteria: &FilterCriteria) -> Vec<&'a R>
where
    R: Searchable + Facetable,
{
    filter_positions(records, criteria)
        .into_iter()
        .map(|position| &records[position])
        .collect()
}

/// Same selection as [`filter`], reported as positions into `records`.
pub fn filter_positions<R>(records: &[R], criteria: &FilterCriteria) -> Vec<usize>
where
    R: Searchable + Facetable,
{
    let needle = criteria.normalized_search_term();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            matches_text(*record, &needle) && matches_facet(*record, &criteria.facet)
        })
        .map(|(position, _)| position)
        .collect()
}

/// `needle` must already be trimmed and lower-cased.
fn matches_text<R: Searchable>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    contains_folded(record.title(), needle)
        || contains_folded(record.excerpt(), needle)
        || record.tags().iter().any(|tag| contains_folded(tag, needle))
}

fn matches_facet<R>(record: &R, facet: &Facet) -> bool
where
    R: Searchable + Facetable,
{
    let Some(selected) = facet.as_value() else {
        return true;
    };

    if record.facet_value() == Some(selected) {
        return true;
    }

    R::FACET_SOURCE == FacetSource::Tags && record.tags().iter().any(|tag| tag == selected)
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    !haystack.is_empty() && haystack.to_lowercase().contains(needle)
}
