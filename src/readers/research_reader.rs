use crate::error::Result;
use crate::models::{CategoryCount, Correlation, Finding, ResearchData};
use crate::readers::csv_source::{cell, coerce_number, CsvSource};
use crate::utils::constants::{COL_CATEGORY, COL_DETAIL, COL_PARAMETER, COL_VALUE};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Loads the research findings and health correlation exports.
///
/// Unlike [`crate::readers::SensorReader`], failures are returned to the
/// caller; there is no substitute dataset.
pub struct ResearchReader;

impl ResearchReader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, findings_path: &Path, correlations_path: &Path) -> Result<ResearchData> {
        let findings = self.read_findings(findings_path)?;
        let correlations = self.read_correlations(correlations_path)?;
        let category_counts = self.count_by_category(&findings);

        Ok(ResearchData {
            findings,
            correlations,
            category_counts,
        })
    }

    /// Read `category, detail`; any further columns are ignored.
    pub fn read_findings(&self, path: &Path) -> Result<Vec<Finding>> {
        let source = CsvSource::open(path)?;
        let category = source.column(COL_CATEGORY)?;
        let detail = source.column(COL_DETAIL)?;

        let findings: Vec<Finding> = source
            .records()
            .iter()
            .map(|record| Finding {
                category: cell(record, category).unwrap_or_default().to_string(),
                detail: cell(record, detail).unwrap_or_default().to_string(),
            })
            .collect();

        info!("Loaded {} research findings", findings.len());
        Ok(findings)
    }

    /// Read `parameter, detail, value`, coercing `value` to a number.
    pub fn read_correlations(&self, path: &Path) -> Result<Vec<Correlation>> {
        let source = CsvSource::open(path)?;
        let parameter = source.column(COL_PARAMETER)?;
        let detail = source.column(COL_DETAIL)?;
        let value = source.column(COL_VALUE)?;

        let correlations: Vec<Correlation> = source
            .records()
            .iter()
            .map(|record| Correlation {
                parameter: cell(record, parameter).unwrap_or_default().to_string(),
                detail: cell(record, detail).unwrap_or_default().to_string(),
                value: coerce_number(cell(record, value)),
            })
            .collect();

        info!(
            "Loaded {} health correlations ({} with numeric values)",
            correlations.len(),
            correlations.iter().filter(|c| c.has_value()).count()
        );
        Ok(correlations)
    }

    /// Number of findings per category, ordered by category. Findings
    /// without a category are not counted.
    pub fn count_by_category(&self, findings: &[Finding]) -> Vec<CategoryCount> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for finding in findings.iter().filter(|f| !f.category.is_empty()) {
            *counts.entry(finding.category.as_str()).or_default() += 1;
        }

        counts
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: category.to_string(),
                count,
            })
            .collect()
    }
}

impl Default for ResearchReader {
    fn default() -> Self {
        Self::new()
    }
}
