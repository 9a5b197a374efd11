pub mod findings_renderer;
pub mod monitoring_view;
pub mod research_view;

pub use findings_renderer::{key_finding_cards, FindingCard, FindingsRenderer, RenderedFindings};
pub use monitoring_view::{MonitoringRenderer, MonitoringView};
pub use research_view::{category_chart, KeyFindings, ResearchRenderer, ResearchView};
