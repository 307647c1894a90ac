//! Text rendering of a record for standard output.

use super::SiteRecord;

/// Precautions joined with ", ", or "None" when the list is empty.
pub fn join_precautions(precautions: &[String]) -> String {
    if precautions.is_empty() {
        "None".to_string()
    } else {
        precautions.join(", ")
    }
}

/// Descriptive lines for one record: header, built year, facts, precautions.
pub fn describe(record: &SiteRecord) -> Vec<String> {
    let built = record
        .built_year
        .as_ref()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let facts = record
        .facts
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .unwrap_or("No facts recorded");

    vec![
        format!(
            "🏛️ {} — {}",
            record.display_name(),
            record.display_location()
        ),
        format!("  Built: {}", built),
        format!("  Facts: {}", facts),
        format!("  Precautions: {}", join_precautions(&record.precautions)),
    ]
}
