use crate::models::AggregatedReading;
use crate::utils::constants::{
    SAMPLE_AQI_MAX, SAMPLE_DAYS, SAMPLE_LOCATIONS, SAMPLE_SENSOR_COUNT, SAMPLE_SENSOR_PREFIX,
};
use chrono::{Duration, Local, NaiveDateTime};
use rand::Rng;
use tracing::info;

/// Builds the demo dataset served when real sensor data cannot be loaded.
///
/// The shape is fixed: every sample location gets one reading per day over
/// the last [`SAMPLE_DAYS`] days ending at `now`. Values and sensor labels
/// are random.
pub struct SampleDataGenerator;

impl SampleDataGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self) -> Vec<AggregatedReading> {
        self.generate_with(&mut rand::thread_rng(), Local::now().naive_local())
    }

    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        now: NaiveDateTime,
    ) -> Vec<AggregatedReading> {
        info!("Creating sample data");

        let timestamps: Vec<NaiveDateTime> = (0..SAMPLE_DAYS)
            .rev()
            .map(|days_back| now - Duration::days(days_back))
            .collect();

        let mut readings = Vec::with_capacity(SAMPLE_LOCATIONS.len() * timestamps.len());
        for location in SAMPLE_LOCATIONS {
            for timestamp in &timestamps {
                let aqi = rng.gen_range(0..SAMPLE_AQI_MAX);
                let sensor = rng.gen_range(1..=SAMPLE_SENSOR_COUNT);

                readings.push(AggregatedReading::new(
                    *timestamp,
                    location,
                    format!("{}{}", SAMPLE_SENSOR_PREFIX, sensor),
                    Some(f64::from(aqi)),
                ));
            }
        }

        readings
    }
}

impl Default for SampleDataGenerator {
    fn default() -> Self {
        Self::new()
    }
}
