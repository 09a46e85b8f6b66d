use crate::args::PlanArgs;
use crate::document::load_document;
use crate::error::DupError;
use crate::plan::{CountryPlan, build_plan};
use tracing::info;

pub fn plan_file(args: &PlanArgs) -> Result<Vec<CountryPlan>, DupError> {
    let file = &args.input.file;
    let document =
        load_document(file, args.input.policy()).map_err(|e| DupError::in_file(file, e))?;

    let plans = build_plan(&document);
    info!(
        countries = document.country_count(),
        affected = plans.len(),
        "dedupe plan built"
    );
    Ok(plans)
}
