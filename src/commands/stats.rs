use crate::document::Document;
use crate::index::IdentifierIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryStat {
    pub country: String,
    pub universities: usize,
    /// Universities in this country whose id is used by another record.
    pub duplicated: usize,
}

#[derive(Debug, Default)]
pub struct DuplicateStats {
    pub unique_ids: usize,
    pub total_universities: usize,
    pub duplicated_ids: usize,
    pub skipped: usize,
    pub country_stats: Vec<CountryStat>,
}

impl DuplicateStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collect(document: &Document, index: &IdentifierIndex) -> Self {
        let mut stats = Self::new();
        stats.unique_ids = index.unique_ids();
        stats.duplicated_ids = index.duplicates().count();
        stats.skipped = document.skipped();

        for (country, record) in document.countries() {
            let duplicated = record
                .universities
                .iter()
                .filter(|u| index.is_duplicated(&u.id))
                .count();
            stats.add_country(CountryStat {
                country: country.to_string(),
                universities: record.universities.len(),
                duplicated,
            });
        }

        stats
    }

    pub fn add_country(&mut self, stat: CountryStat) {
        self.total_universities += stat.universities;
        self.country_stats.push(stat);
    }

    pub fn has_duplicates(&self) -> bool {
        self.duplicated_ids > 0
    }

    /// Share of records that carry an id used elsewhere, in percent.
    pub fn duplicate_ratio(&self) -> f64 {
        if self.total_universities == 0 {
            0.0
        } else {
            let duplicated: usize = self.country_stats.iter().map(|c| c.duplicated).sum();
            (duplicated as f64 / self.total_universities as f64) * 100.0
        }
    }
}
