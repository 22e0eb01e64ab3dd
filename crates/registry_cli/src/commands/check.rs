use anyhow::{Context, Result};
use registry_parser::parse_file;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(profile_path: &str) -> Result<()> {
    info!("Checking profile: {}", profile_path);

    let profile = parse_file(Path::new(profile_path))
        .with_context(|| format!("Failed to parse profile file: {}", profile_path))?;

    output::print_success("Profile is valid");

    println!("\nProfile Summary:");
    println!("  Ranges:       {}", profile.ranges.len());
    for (field, range) in profile.ranges.iter() {
        println!(
            "    {:<20} [{}, {}] {}",
            field, range.min, range.max, range.unit
        );
    }
    println!(
        "  Valve models: {} balloon-expandable, {} self-expandable",
        profile.balloon_expandable_models.len(),
        profile.self_expandable_models.len()
    );
    println!("  Risk factors: {}", profile.risk_factors.len());

    Ok(())
}
