use crate::models::{
    AxisRole, CategoryCount, ChartData, ChartKind, ChartRow, ChartValue, Correlation,
};
use crate::renderers::findings_renderer::{FindingsRenderer, RenderedFindings};
use crate::utils::constants::{
    CHART_FINDINGS_BY_CATEGORY, CHART_FINDINGS_DISTRIBUTION, CHART_HEALTH_CORRELATIONS,
    COL_CATEGORY, COL_PARAMETER, COL_VALUE, PARAM_HEALTH_IMPLICATIONS, PARAM_PM25_LEVELS,
    RESEARCH_ERROR_MESSAGE, SCATTER_MARKER_SIZE,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum KeyFindings {
    Rendered(Box<RenderedFindings>),
    Error { message: String },
}

/// Research findings tab content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchView {
    pub findings_distribution: ChartData,
    pub health_correlations: ChartData,
    pub key_findings: KeyFindings,
}

impl ResearchView {
    /// Two blank charts and an error message.
    pub fn placeholder() -> Self {
        Self {
            findings_distribution: ChartData::empty(CHART_FINDINGS_DISTRIBUTION, ChartKind::Bar),
            health_correlations: ChartData::empty(CHART_HEALTH_CORRELATIONS, ChartKind::Bar),
            key_findings: KeyFindings::Error {
                message: RESEARCH_ERROR_MESSAGE.to_string(),
            },
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.key_findings, KeyFindings::Error { .. })
    }
}

pub struct ResearchRenderer {
    findings: FindingsRenderer,
}

impl ResearchRenderer {
    pub fn new() -> Self {
        Self {
            findings: FindingsRenderer::new(),
        }
    }

    pub fn render(&self, correlations: &[Correlation]) -> ResearchView {
        let valued: Vec<&Correlation> = correlations.iter().filter(|c| c.has_value()).collect();

        let findings_distribution = ChartData::new(
            CHART_FINDINGS_DISTRIBUTION,
            ChartKind::Bar,
            "Health Impact Metrics",
            AxisRole::new(COL_PARAMETER, "Health Parameter"),
            AxisRole::new(COL_VALUE, "Measured Value"),
        )
        .with_color(COL_PARAMETER)
        .with_rows(parameter_rows(valued.iter().copied(), true));

        let overview = valued.iter().copied().filter(|c| {
            c.parameter == PARAM_PM25_LEVELS || c.parameter == PARAM_HEALTH_IMPLICATIONS
        });
        let health_correlations = ChartData::new(
            CHART_HEALTH_CORRELATIONS,
            ChartKind::Scatter,
            "Health Correlations Overview",
            AxisRole::plain(COL_PARAMETER),
            AxisRole::plain(COL_VALUE),
        )
        .with_marker_size(SCATTER_MARKER_SIZE)
        .with_rows(parameter_rows(overview, false));

        ResearchView {
            findings_distribution,
            health_correlations,
            key_findings: KeyFindings::Rendered(Box::new(self.findings.render(correlations))),
        }
    }
}

impl Default for ResearchRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Bar chart of how many findings each category holds.
pub fn category_chart(counts: &[CategoryCount]) -> ChartData {
    let rows = counts
        .iter()
        .map(|c| ChartRow::new(ChartValue::Text(c.category.clone()), Some(c.count as f64), None))
        .collect();

    ChartData::new(
        CHART_FINDINGS_BY_CATEGORY,
        ChartKind::Bar,
        "Research Findings by Category",
        AxisRole::new(COL_CATEGORY, "Category"),
        AxisRole::new("count", "Number of Findings"),
    )
    .with_rows(rows)
}

fn parameter_rows<'a>(
    correlations: impl Iterator<Item = &'a Correlation>,
    colored: bool,
) -> Vec<ChartRow> {
    correlations
        .map(|c| {
            ChartRow::new(
                ChartValue::Text(c.parameter.clone()),
                c.value,
                colored.then(|| c.parameter.clone()),
            )
        })
        .collect()
}
