use crate::commands::stats::DuplicateStats;
use crate::index::IdentifierIndex;
use std::io::{self, Write};

/// Write the duplicate report: one block per duplicated id (or a single
/// "no duplicates" line), then a blank line and the summary counts.
pub fn write_report<W: Write>(
    out: &mut W,
    index: &IdentifierIndex,
    stats: &DuplicateStats,
) -> io::Result<()> {
    let mut found = false;

    for (id, occurrences) in index.duplicates() {
        found = true;
        writeln!(out, "Duplicate id {id}:")?;
        for occ in occurrences {
            writeln!(out, "  - {}: {}", occ.country, occ.name)?;
        }
    }

    if !found {
        writeln!(out, "No duplicates found.")?;
    }

    writeln!(out)?;
    writeln!(out, "Unique university ids: {}", stats.unique_ids)?;
    writeln!(out, "Total universities: {}", stats.total_universities)?;
    Ok(())
}
