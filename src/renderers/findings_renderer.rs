use crate::models::{AxisRole, ChartData, ChartKind, ChartRow, ChartValue, Correlation};
use crate::utils::constants::{
    CHART_HEALTH_RISK, CHART_PM25, COL_DETAIL, COL_VALUE, PARAM_HEALTH_IMPLICATIONS,
    PARAM_PM25_LEVELS, SCATTER_MARKER_SIZE,
};
use serde::{Deserialize, Serialize};

/// Titled list of fixed talking points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingCard {
    pub title: String,
    pub points: Vec<String>,
}

impl FindingCard {
    fn new(title: &str, points: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            points: points.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Static key-finding cards shown beside the correlation charts.
pub fn key_finding_cards() -> Vec<FindingCard> {
    vec![
        FindingCard::new(
            "Pollution Sources",
            &[
                "Traffic-related emissions",
                "Indoor air pollution (vapors, dusts, smoke)",
                "Waste management practices",
            ],
        ),
        FindingCard::new(
            "Vulnerable Groups",
            &[
                "Children with developing lungs",
                "Preterm/low birth weight infants",
                "Residents with limited healthcare access",
            ],
        ),
        FindingCard::new(
            "Study Limitations",
            &[
                "Cross-sectional design",
                "Limited longitudinal data",
                "Indirect waste pollution inference",
            ],
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedFindings {
    pub pm25_levels: Vec<Correlation>,
    pub health_implications: Vec<Correlation>,
    pub pm25_chart: ChartData,
    pub health_risk_chart: ChartData,
    pub cards: Vec<FindingCard>,
}

pub struct FindingsRenderer;

impl FindingsRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, correlations: &[Correlation]) -> RenderedFindings {
        let pm25_levels: Vec<Correlation> = correlations
            .iter()
            .filter(|c| c.parameter == PARAM_PM25_LEVELS)
            .cloned()
            .collect();

        let health_implications: Vec<Correlation> = correlations
            .iter()
            .filter(|c| c.parameter == PARAM_HEALTH_IMPLICATIONS && c.has_value())
            .cloned()
            .collect();

        let pm25_chart = ChartData::new(
            CHART_PM25,
            ChartKind::Bar,
            "PM2.5 Concentration Measurements",
            AxisRole::new(COL_DETAIL, "Measurement Type"),
            AxisRole::new(COL_VALUE, "Concentration (μg/m³)"),
        )
        .with_rows(detail_rows(&pm25_levels));

        let health_risk_chart = ChartData::new(
            CHART_HEALTH_RISK,
            ChartKind::Scatter,
            "Health Risk Indicators",
            AxisRole::new(COL_DETAIL, "Health Outcome"),
            AxisRole::new(COL_VALUE, "Risk Ratio/Odds Ratio"),
        )
        .with_marker_size(SCATTER_MARKER_SIZE)
        .with_rows(detail_rows(&health_implications));

        RenderedFindings {
            pm25_levels,
            health_implications,
            pm25_chart,
            health_risk_chart,
            cards: key_finding_cards(),
        }
    }
}

impl Default for FindingsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn detail_rows(correlations: &[Correlation]) -> Vec<ChartRow> {
    correlations
        .iter()
        .map(|c| ChartRow::new(ChartValue::Text(c.detail.clone()), c.value, None))
        .collect()
}
