use anyhow::{Context, Result};
use registry_core::ProcedureValidator;
use registry_parser::{load_records, parse_file};
use registry_validator::RegistryValidator;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(records_path: &str, profile_path: Option<&str>, format: &str) -> Result<()> {
    info!("Validating records: {}", records_path);

    let records = load_records(Path::new(records_path))
        .with_context(|| format!("Failed to load records file: {}", records_path))?;

    output::print_info(&format!("Loaded {} records", records.len()));

    let validator = match profile_path {
        Some(profile_path) => {
            let profile = parse_file(Path::new(profile_path))
                .with_context(|| format!("Failed to parse profile file: {}", profile_path))?;
            output::print_info(&format!(
                "Using profile {} ({} ranges)",
                profile_path,
                profile.ranges.len()
            ));
            RegistryValidator::with_profile(profile)
        }
        None => RegistryValidator::new(),
    };

    let report = validator.validate_collection(&records);

    output::print_validation_report(&report, format);

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}
