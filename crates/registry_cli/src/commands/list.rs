use anyhow::{Context, Result};
use registry_core::{FilterState, Period, ValveFilter};
use registry_parser::load_records;
use registry_stats::apply;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(
    records_path: &str,
    search: Option<&str>,
    valve: ValveFilter,
    period: Period,
) -> Result<()> {
    info!("Listing records: {}", records_path);

    let records = load_records(Path::new(records_path))
        .with_context(|| format!("Failed to load records file: {}", records_path))?;

    let state = FilterState {
        search_query: search.unwrap_or("").to_string(),
        tipo_valvola: valve,
        period,
    };

    let filtered = apply(&records, &state);

    output::print_records_table(&filtered);
    println!("\n  {} of {} procedures", filtered.len(), records.len());

    Ok(())
}
