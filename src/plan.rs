//! Per-country deduplication preview.
//!
//! Within each country, records are first collapsed by id and the survivors
//! then collapsed by name. In both passes a later record replaces an earlier
//! one with the same key but keeps the earlier one's position. Nothing is
//! written back; the plan only describes what would change.

use crate::document::{Document, UniversityId, UniversityRecord};
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub removed: UniversityRecord,
    /// First surviving record sharing the removed record's name or id.
    pub replaced_by: Option<UniversityRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryPlan {
    pub country: String,
    pub original: usize,
    pub kept: Vec<UniversityRecord>,
    pub removals: Vec<Removal>,
}

impl CountryPlan {
    pub fn is_unchanged(&self) -> bool {
        self.removals.is_empty()
    }
}

pub fn plan_country(country: &str, universities: &[UniversityRecord]) -> CountryPlan {
    let mut by_id: IndexMap<&UniversityId, usize> = IndexMap::new();
    for (idx, uni) in universities.iter().enumerate() {
        by_id.insert(&uni.id, idx);
    }

    let mut by_name: IndexMap<&str, usize> = IndexMap::new();
    for &idx in by_id.values() {
        by_name.insert(universities[idx].name.as_str(), idx);
    }

    let survivors: Vec<usize> = by_name.into_values().collect();
    let mut kept_mask = vec![false; universities.len()];
    for &idx in &survivors {
        kept_mask[idx] = true;
    }

    let removals = universities
        .iter()
        .zip(&kept_mask)
        .filter(|(_, kept)| !**kept)
        .map(|(removed, _)| Removal {
            removed: removed.clone(),
            replaced_by: survivors
                .iter()
                .map(|&idx| &universities[idx])
                .find(|s| s.name == removed.name || s.id == removed.id)
                .cloned(),
        })
        .collect();

    CountryPlan {
        country: country.to_string(),
        original: universities.len(),
        kept: survivors.iter().map(|&idx| universities[idx].clone()).collect(),
        removals,
    }
}

/// Plans for the countries that would change, in document order.
pub fn build_plan(document: &Document) -> Vec<CountryPlan> {
    document
        .countries()
        .map(|(country, record)| plan_country(country, &record.universities))
        .filter(|plan| !plan.is_unchanged())
        .collect()
}
