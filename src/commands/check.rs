use std::io::Write;

use crate::args::CheckArgs;
use crate::commands::stats::DuplicateStats;
use crate::document::load_document;
use crate::error::DupError;
use crate::index::IdentifierIndex;
use crate::report::write_report;
use tracing::{debug, info};

/// Load the input, build the id index and write the duplicate report to `out`.
///
/// The document is fully loaded and validated before anything is written, so
/// a failing input never produces a partial report.
pub fn check_file<W: Write>(args: &CheckArgs, out: &mut W) -> Result<DuplicateStats, DupError> {
    let file = &args.input.file;
    let document =
        load_document(file, args.input.policy()).map_err(|e| DupError::in_file(file, e))?;

    let index = IdentifierIndex::build(&document);
    debug_assert_eq!(index.total_occurrences(), document.total_universities());
    debug!(
        occurrences = index.total_occurrences(),
        scanned = document.total_universities(),
        "index built"
    );

    let stats = DuplicateStats::collect(&document, &index);
    info!(
        unique_ids = stats.unique_ids,
        total = stats.total_universities,
        duplicated_ids = stats.duplicated_ids,
        duplicates = stats.has_duplicates(),
        "duplicate scan done"
    );

    write_report(out, &index, &stats)?;
    Ok(stats)
}
