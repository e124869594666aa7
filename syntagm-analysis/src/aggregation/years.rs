//! Per-year summary statistics for one feature.

use std::collections::BTreeMap;

use statrs::statistics::Statistics;

use syntagm_core::errors::AggregateError;
use syntagm_core::types::{FeatureName, FeatureRecord, YearRow};

/// Group a feature's records by year and compute the summary table.
///
/// Per year: `year_value` is the mean of the year's text values and
/// `text_value_std` their sample standard deviation (divisor n−1), with
/// `text_values` kept in discovery order. Across years: `years_mean` /
/// `years_std` over the per-year `year_value`s, broadcast onto every row.
/// Rows come out sorted ascending by year.
///
/// Sample statistics over fewer than two values are undefined; undersized
/// year groups and single-year tables are explicit errors, never NaN.
pub fn summarize(
    feature: FeatureName,
    records: &[FeatureRecord],
) -> Result<Vec<YearRow>, AggregateError> {
    if records.is_empty() {
        return Err(AggregateError::NoRecords { feature });
    }

    // BTreeMap keys give the ascending year order; pushing in record
    // order preserves per-text discovery order inside each year.
    let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for record in records {
        by_year.entry(record.id.year).or_default().push(record.value);
    }

    let mut rows = Vec::with_capacity(by_year.len());
    for (&year, values) in &by_year {
        if values.len() < 2 {
            return Err(AggregateError::InsufficientSamples {
                feature,
                year,
                count: values.len(),
            });
        }
        rows.push(YearRow {
            year,
            year_value: values.iter().mean(),
            text_values: values.clone(),
            text_value_std: values.iter().std_dev(),
            years_mean: 0.0,
            years_std: 0.0,
        });
    }

    let year_values: Vec<f64> = rows.iter().map(|row| row.year_value).collect();
    if year_values.len() < 2 {
        return Err(AggregateError::InsufficientYears {
            feature,
            count: year_values.len(),
        });
    }
    let years_mean = year_values.iter().mean();
    let years_std = year_values.iter().std_dev();
    for row in &mut rows {
        row.years_mean = years_mean;
        row.years_std = years_std;
    }

    Ok(rows)
}
