//! Rendering summary tables for downstream consumers.
//!
//! The flat-text convention for the `text_values` column is a bracketed,
//! comma-separated sequence of floating-point literals (`[10.0, 12.0]`).
//! Existing downstream tooling re-parses that cell by stripping the
//! brackets and splitting on commas, so both directions live here.

use syntagm_core::errors::ExportError;
use syntagm_core::types::{FeatureSet, YearRow};

/// Column header of a feature's tidy table.
pub const TABLE_HEADER: &str =
    "year\tyear_value\ttext_values\ttext_value_sample_std\tyears_mean\tyears_std";

/// Render one feature's summary table as tab-delimited text.
pub fn feature_table(rows: &[YearRow]) -> String {
    let mut out = String::with_capacity(64 * (rows.len() + 1));
    out.push_str(TABLE_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{}\t{:?}\t{}\t{:?}\t{:?}\t{:?}\n",
            row.year,
            row.year_value,
            format_text_values(&row.text_values),
            row.text_value_std,
            row.years_mean,
            row.years_std,
        ));
    }
    out
}

/// Serialize per-text values as `[v1, v2, ...]`.
///
/// `{:?}` keeps a decimal point on round numbers, so every element is a
/// valid floating-point literal on the way back in.
pub fn format_text_values(values: &[f64]) -> String {
    let literals: Vec<String> = values.iter().map(|v| format!("{v:?}")).collect();
    format!("[{}]", literals.join(", "))
}

/// Parse a serialized `text_values` cell back into its values.
pub fn parse_text_values(input: &str) -> Result<Vec<f64>, ExportError> {
    let inner = input
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| ExportError::MalformedValueList {
            input: input.to_string(),
        })?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|literal| {
            literal.trim().parse::<f64>().map_err(|_| ExportError::InvalidFloat {
                literal: literal.trim().to_string(),
            })
        })
        .collect()
}

/// Serialize a whole feature set as JSON, keyed by feature name.
pub fn to_json(features: &FeatureSet) -> Result<String, ExportError> {
    serde_json::to_string_pretty(features).map_err(|e| ExportError::Json {
        message: e.to_string(),
    })
}
