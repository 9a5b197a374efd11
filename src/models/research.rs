use serde::{Deserialize, Serialize};

/// One row of the research findings export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: String,
    pub detail: String,
}

/// One row of the health correlations export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub parameter: String,
    pub detail: String,
    /// `None` when the raw value is not numeric.
    pub value: Option<f64>,
}

impl Correlation {
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Everything the research loader produces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResearchData {
    pub findings: Vec<Finding>,
    pub correlations: Vec<Correlation>,
    pub category_counts: Vec<CategoryCount>,
}
