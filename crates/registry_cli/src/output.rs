use colored::*;
use registry_core::{format_duration, ValidationReport};
use registry_stats::Statistics;
use serde_json::json;

pub fn print_validation_report(report: &ValidationReport, format: &str) {
    match format {
        "json" => print_json_report(report),
        _ => print_text_report(report),
    }
}

fn print_text_report(report: &ValidationReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    if !report.failures.is_empty() {
        println!("\n{}", "Failures:".red().bold());
        for failure in &report.failures {
            println!(
                "  {} {}",
                format!("Record #{}", failure.index).red(),
                format!("({})", failure.full_name).red()
            );
            for (field, error) in &failure.errors {
                println!("    {}: {}", field.bold(), error);
            }
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Records validated: {}", report.stats.records_validated);
    println!("  Records failed:    {}", report.stats.records_failed);
    println!("  Field errors:      {}", report.error_count());
    println!("  Fields checked:    {}", report.stats.fields_checked);
    println!("  Duration:          {} ms", report.stats.duration_ms);
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &ValidationReport) {
    let failures: Vec<_> = report
        .failures
        .iter()
        .map(|failure| {
            let errors: serde_json::Map<String, serde_json::Value> = failure
                .errors
                .iter()
                .map(|(field, error)| (field.to_string(), json!(error.to_string())))
                .collect();
            json!({
                "index": failure.index,
                "full_name": failure.full_name,
                "errors": errors,
            })
        })
        .collect();

    let output = json!({
        "passed": report.passed,
        "failures": failures,
        "summary": {
            "records_validated": report.stats.records_validated,
            "records_failed": report.stats.records_failed,
            "error_count": report.error_count(),
            "fields_checked": report.stats.fields_checked,
            "duration_ms": report.stats.duration_ms,
        }
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_statistics(stats: &Statistics, format: &str) {
    match format {
        "json" => print_json_statistics(stats),
        _ => print_text_statistics(stats),
    }
}

fn print_text_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  REGISTRY STATISTICS".bold());
    println!("{}", "═".repeat(60));

    println!("\n  Total procedures:  {}", stats.total_procedures);
    println!(
        "  Average duration:  {}",
        stats
            .average_duration_minutes
            .map(|m| format_duration(m.round() as i64))
            .unwrap_or_else(|| "-".to_string())
    );
    println!(
        "  Pre-dilatation:    {:.0}%",
        stats.pre_dilatazione_percentage
    );
    println!(
        "  Post-dilatation:   {:.0}%",
        stats.post_dilatazione_percentage
    );
    println!(
        "  Valve types:       {} balloon-expandable, {} self-expandable",
        stats.balloon_expandable_count, stats.self_expandable_count
    );

    println!("\n{}", "  Average measurements:".bold());
    let averages = [
        ("FE", stats.average_fe, "%"),
        ("Vmax", stats.average_vmax, "m/s"),
        ("Gmax", stats.average_gmax, "mmHg"),
        ("Gmed", stats.average_gmed, "mmHg"),
        ("AVA", stats.average_ava, "cm²"),
    ];
    for (label, value, unit) in averages {
        match value {
            Some(v) => println!("    {:<6} {:.1} {}", format!("{label}:"), v, unit),
            None => println!("    {:<6} -", format!("{label}:")),
        }
    }

    if !stats.top_valve_models.is_empty() {
        println!("\n{}", "  Top valve models:".bold());
        for (i, (model, count)) in stats.top_valve_models.iter().enumerate() {
            println!("    {}. {} ({})", i + 1, model, count);
        }
    }

    println!("{}", "═".repeat(60));
}

fn print_json_statistics(stats: &Statistics) {
    println!("{}", serde_json::to_string_pretty(stats).unwrap());
}

pub fn print_records_table(records: &[registry_core::Procedure]) {
    if records.is_empty() {
        println!("\n  No procedures match the active filters");
        return;
    }

    println!(
        "\n  {:<5} {:<22} {:<4} {:<6} {:<12} {:<19} {:<30} {}",
        "ID".bold(),
        "Patient".bold(),
        "Age".bold(),
        "BMI".bold(),
        "Date".bold(),
        "Valve".bold(),
        "Model".bold(),
        "Duration".bold()
    );

    for record in records {
        let id = record
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        let age = record
            .age()
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());
        let bmi = record
            .bmi()
            .map(|b| format!("{b:.1}"))
            .unwrap_or_else(|| "-".to_string());
        let valve = record
            .tipo_valvola
            .map(|t| t.as_str())
            .unwrap_or("-");
        let duration = record
            .duration_minutes()
            .map(format_duration)
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<5} {:<22} {:<4} {:<6} {:<12} {:<19} {:<30} {}",
            id,
            record.full_name(),
            age,
            bmi,
            record.data_procedura,
            valve,
            record.modello_valvola,
            duration
        );
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
