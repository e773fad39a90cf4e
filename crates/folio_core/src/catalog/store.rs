//! Catalog store with memoized derived views.
//!
//! # Invariants
//! - `visible()` equals `engine::filter(records, criteria)` at all times.
//! - Memoized views are dropped whenever an input changes; they are never
//!   patched incrementally.
//! - `featured()` only returns a record that is currently visible.

use crate::filter::criteria::{Facet, FilterCriteria};
use crate::filter::engine;
use crate::model::record::{Facetable, RecordId, Searchable};
use log::debug;
use once_cell::unsync::OnceCell;

/// Per-catalog options supplied at mount time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Curated facet list shown instead of the derived vocabulary.
    pub facet_vocabulary: Option<Vec<String>>,
}

/// State owner for one filtered list view.
pub struct CatalogStore<R> {
    records: Vec<R>,
    options: CatalogOptions,
    criteria: FilterCriteria,
    vocabulary: OnceCell<Vec<Facet>>,
    visible: OnceCell<Vec<usize>>,
}

impl<R> CatalogStore<R>
where
    R: Searchable + Facetable,
{
    /// Creates a store with a derived vocabulary and default criteria.
    pub fn new(records: Vec<R>) -> Self {
        Self::with_options(records, CatalogOptions::default())
    }

    pub fn with_options(records: Vec<R>, options: CatalogOptions) -> Self {
        debug!(
            "event=catalog_mount module=catalog status=ok records={} fixed_vocabulary={}",
            records.len(),
            options.facet_vocabulary.is_some()
        );
        Self {
            records,
            options,
            criteria: FilterCriteria::default(),
            vocabulary: OnceCell::new(),
            visible: OnceCell::new(),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replaces the search term. Takes effect on the next read.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.criteria.search_term {
            return;
        }
        debug!(
            "event=criteria_changed module=catalog field=search_term term_len={}",
            text.chars().count()
        );
        self.criteria.search_term = text;
        self.visible.take();
    }

    /// Replaces the facet selection. Takes effect on the next read.
    pub fn set_facet(&mut self, facet: Facet) {
        if facet == self.criteria.facet {
            return;
        }
        debug!(
            "event=criteria_changed module=catalog field=facet facet_all={}",
            facet.is_all()
        );
        self.criteria.facet = facet;
        self.visible.take();
    }

    /// Restores the mount-time defaults (empty search, `All`).
    pub fn reset_criteria(&mut self) {
        self.set_search_term(String::new());
        self.set_facet(Facet::All);
    }

    /// Facet choices with the `All` sentinel first.
    pub fn vocabulary(&self) -> &[Facet] {
        self.vocabulary.get_or_init(|| match &self.options.facet_vocabulary {
            Some(fixed) => curated_vocabulary(fixed),
            None => engine::derive_vocabulary(&self.records),
        })
    }

    /// Records matching the current criteria, in source order.
    pub fn visible(&self) -> Vec<&R> {
        self.visible_positions()
            .iter()
            .map(|&position| &self.records[position])
            .collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible_positions().len()
    }

    pub fn visible_ids(&self) -> Vec<&RecordId> {
        self.visible().into_iter().map(|record| record.id()).collect()
    }

    /// True when records exist but none match the current criteria.
    ///
    /// This is the "no results" state, not a fault.
    pub fn is_empty_result(&self) -> bool {
        !self.records.is_empty() && self.visible_positions().is_empty()
    }

    /// First record flagged as featured, if it is currently visible.
    ///
    /// Only the first flagged record is ever considered; when it is filtered
    /// out this returns `None` rather than falling through to a later one.
    pub fn featured(&self) -> Option<&R> {
        self.featured_position().map(|position| &self.records[position])
    }

    /// Visible records without the one reported by [`Self::featured`].
    pub fn visible_regular(&self) -> Vec<&R> {
        let featured = self.featured_position();
        self.visible_positions()
            .iter()
            .filter(|&&position| Some(position) != featured)
            .map(|&position| &self.records[position])
            .collect()
    }

    fn featured_position(&self) -> Option<usize> {
        let position = self.records.iter().position(|record| record.is_featured())?;
        self.visible_positions()
            .binary_search(&position)
            .ok()
            .map(|_| position)
    }

    fn visible_positions(&self) -> &[usize] {
        self.visible.get_or_init(|| {
            let positions = engine::filter_positions(&self.records, &self.criteria);
            debug!(
                "event=visible_derived module=catalog status=ok visible={} total={}",
                positions.len(),
                self.records.len()
            );
            positions
        })
    }
}

fn curated_vocabulary(values: &[String]) -> Vec<Facet> {
    let mut vocabulary = vec![Facet::All];
    for value in values {
        if value.trim().is_empty() {
            continue;
        }
        let facet = Facet::value(value.as_str());
        if !vocabulary.contains(&facet) {
            vocabulary.push(facet);
        }
    }
    vocabulary
}

#[cfg(test)]
mod tests {
    use super::curated_vocabulary;
    use crate::filter::criteria::Facet;

    #[test]
    fn curated_vocabulary_dedupes_and_keeps_order() {
        let values = vec![
            "Conference".to_string(),
            "Journal".to_string(),
            "Conference".to_string(),
            " ".to_string(),
            "Preprint".to_string(),
        ];
        assert_eq!(
            curated_vocabulary(&values),
            vec![
                Facet::All,
                Facet::value("Conference"),
                Facet::value("Journal"),
                Facet::value("Preprint"),
            ]
        );
    }

    #[test]
    fn curated_value_spelled_all_is_not_the_sentinel() {
        let vocabulary = curated_vocabulary(&["All".to_string()]);
        assert_eq!(vocabulary, vec![Facet::All, Facet::value("All")]);
    }
}
