mod formatters;

use crate::commands::stats::DuplicateStats;
use crate::plan::CountryPlan;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use formatters::{format_count, format_record, format_share};

fn bold(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

pub fn stats_table(stats: &DuplicateStats) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            bold("Country"),
            bold("Universities"),
            bold("Duplicated"),
            bold("Share"),
        ]);

    for country in &stats.country_stats {
        table.add_row(vec![
            Cell::new(&country.country),
            Cell::new(format_count(country.universities)),
            Cell::new(format_count(country.duplicated)),
            Cell::new(format_share(country.duplicated, country.universities)),
        ]);
    }

    table.add_row(vec![
        bold("Total"),
        bold(&format_count(stats.total_universities)),
        bold(&format_count(
            stats.country_stats.iter().map(|c| c.duplicated).sum(),
        )),
        bold(&format!("{:.1}%", stats.duplicate_ratio())),
    ]);

    table
}

pub fn print_stats(stats: &DuplicateStats) {
    println!("\n{}", stats_table(stats));
    if stats.skipped > 0 {
        println!("Skipped malformed records: {}", format_count(stats.skipped));
    }
}

pub fn plan_table(plan: &CountryPlan) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            bold("Removed Id"),
            bold("Removed Name"),
            bold("Replaced By Id"),
            bold("Replaced By Name"),
        ]);

    for removal in &plan.removals {
        let (removed_id, removed_name) = format_record(Some(&removal.removed));
        let (by_id, by_name) = format_record(removal.replaced_by.as_ref());
        table.add_row(vec![removed_id, removed_name, by_id, by_name]);
    }

    table
}

pub fn print_plan(plans: &[CountryPlan]) {
    if plans.is_empty() {
        println!("No per-country duplicates found.");
        return;
    }

    for plan in plans {
        println!(
            "Country: {} will have {} universities from {}",
            plan.country,
            format_count(plan.kept.len()),
            format_count(plan.original)
        );
        println!("{}\n", plan_table(plan));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::stats::CountryStat;
    use crate::document::{UniversityId, UniversityRecord};
    use crate::plan::plan_country;

    #[test]
    fn stats_table_lists_every_country_and_total() {
        let mut stats = DuplicateStats::new();
        stats.add_country(CountryStat {
            country: "US".into(),
            universities: 1200,
            duplicated: 3,
        });
        stats.add_country(CountryStat {
            country: "CA".into(),
            universities: 0,
            duplicated: 0,
        });

        let rendered = stats_table(&stats).to_string();
        assert!(rendered.contains("US"));
        assert!(rendered.contains("1,200"));
        assert!(rendered.contains("CA"));
        assert!(rendered.contains("Total"));
    }

    #[test]
    fn plan_table_marks_missing_replacement() {
        let uni = |id: i64, name: &str| UniversityRecord {
            id: UniversityId::Integer(id),
            name: name.to_string(),
        };
        let plan = plan_country("FR", &[uni(1, "A"), uni(1, "B"), uni(2, "B")]);
        let rendered = plan_table(&plan).to_string();
        assert!(rendered.contains("Removed Id"));
        assert!(rendered.contains(" - "));
    }
}
