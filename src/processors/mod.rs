pub mod filter_engine;
pub mod reading_aggregator;
pub mod sample_generator;
pub mod statistics_summarizer;

pub use filter_engine::{DateRange, FilterEngine, FilterOutput, FilterSelection};
pub use reading_aggregator::ReadingAggregator;
pub use sample_generator::SampleDataGenerator;
pub use statistics_summarizer::StatisticsSummarizer;
