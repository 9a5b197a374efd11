pub mod chart;
pub mod reading;
pub mod research;
pub mod statistics;

pub use chart::{AxisRole, ChartData, ChartKind, ChartRow, ChartValue};
pub use reading::{AggregatedReading, DailyAverage, MeanAccumulator, SensorReading};
pub use research::{CategoryCount, Correlation, Finding, ResearchData};
pub use statistics::LocationStatistics;
