use crate::document::{Document, UniversityId};
use indexmap::IndexMap;

/// One place a university id was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub country: String,
    pub name: String,
}

/// University id -> every occurrence of it, in scan order.
///
/// Keys iterate in first-insertion order, so reports follow the input.
#[derive(Debug, Default)]
pub struct IdentifierIndex {
    entries: IndexMap<UniversityId, Vec<Occurrence>>,
    occurrences: usize,
}

impl IdentifierIndex {
    pub fn build(document: &Document) -> Self {
        let mut index = Self::default();

        for (country, record) in document.countries() {
            for university in &record.universities {
                index
                    .entries
                    .entry(university.id.clone())
                    .or_default()
                    .push(Occurrence {
                        country: country.to_string(),
                        name: university.name.clone(),
                    });
                index.occurrences += 1;
            }
        }

        index
    }

    pub fn get(&self, id: &UniversityId) -> Option<&[Occurrence]> {
        self.entries.get(id).map(Vec::as_slice)
    }

    /// Ids used by more than one record, in index order.
    pub fn duplicates(&self) -> impl Iterator<Item = (&UniversityId, &[Occurrence])> {
        self.entries
            .iter()
            .filter(|(_, occ)| occ.len() > 1)
            .map(|(id, occ)| (id, occ.as_slice()))
    }

    pub fn is_duplicated(&self, id: &UniversityId) -> bool {
        self.get(id).is_some_and(|occ| occ.len() > 1)
    }

    pub fn unique_ids(&self) -> usize {
        self.entries.len()
    }

    pub fn total_occurrences(&self) -> usize {
        self.occurrences
    }
}
