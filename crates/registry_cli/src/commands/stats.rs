use anyhow::{Context, Result};
use registry_core::{FilterState, Period, ValveFilter};
use registry_parser::load_records;
use registry_stats::{apply, StatisticsEngine};
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(
    records_path: &str,
    search: Option<&str>,
    valve: ValveFilter,
    period: Period,
    top: usize,
    format: &str,
) -> Result<()> {
    info!("Computing statistics: {}", records_path);

    let records = load_records(Path::new(records_path))
        .with_context(|| format!("Failed to load records file: {}", records_path))?;

    let state = FilterState {
        search_query: search.unwrap_or("").to_string(),
        tipo_valvola: valve,
        period,
    };

    let filtered = apply(&records, &state);
    if !state.is_identity() {
        output::print_info(&format!(
            "Filters kept {} of {} records",
            filtered.len(),
            records.len()
        ));
    }

    let stats = StatisticsEngine::new().with_top_models(top).compute(&filtered);

    output::print_statistics(&stats, format);

    Ok(())
}
