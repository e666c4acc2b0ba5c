use std::path::Path;

use anyhow::{Context, Result};
use captable::config::Config;
use captable::presentation::create_validate_use_case;
use captable::ValidationReport;
use serde_json::json;

pub fn cmd_validate(snapshot: &Path, config: &Config) -> Result<()> {
    let report = create_validate_use_case(snapshot, config)
        .execute()
        .with_context(|| format!("validating {}", snapshot.display()))?;

    super::emit(&render(&report))?;

    if !report.is_ok() {
        std::process::exit(1);
    }
    Ok(())
}

fn render(report: &ValidationReport) -> serde_json::Value {
    let issues: Vec<serde_json::Value> = report
        .issues()
        .iter()
        .map(|issue| {
            json!({
                "severity": issue.severity,
                "record": issue.record.to_string(),
                "field": issue.field,
                "message": issue.message,
            })
        })
        .collect();

    json!({
        "ok": report.is_ok(),
        "errors": report.error_count(),
        "warnings": report.warning_count(),
        "issues": issues,
    })
}
