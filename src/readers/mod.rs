pub mod csv_source;
pub mod research_reader;
pub mod sensor_reader;

pub use csv_source::CsvSource;
pub use research_reader::ResearchReader;
pub use sensor_reader::SensorReader;
