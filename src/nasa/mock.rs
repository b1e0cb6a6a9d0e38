use chrono::{DateTime, Local};

use crate::numeric::round_tenth;
use crate::random::RandomSource;

use super::catalog::satellite_catalog;
use super::error::ProviderError;
use super::synthetic::{imagery_bands, CLIMATE_SOURCE, STANDARD_PRESSURE_HPA};
use super::types::{
    ClimateQuery, ClimateRecord, Coordinates, ImageryQuery, ImageryRecord, SatelliteCatalog,
};
use super::NasaProvider;

/// Fallback provider: same shapes as the synthetic model, with randomized
/// climate readings and no tile URL.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    rng: RandomSource,
}

impl MockProvider {
    pub fn new(rng: RandomSource) -> Self {
        Self { rng }
    }

    fn imagery_at(&self, query: &ImageryQuery, now: DateTime<Local>) -> ImageryRecord {
        ImageryRecord {
            source: "MODIS Terra".to_string(),
            date: match query.requested_date() {
                Some(date) => date.to_string(),
                None => now.format("%Y-%m-%d").to_string(),
            },
            resolution: "250m".to_string(),
            bands: imagery_bands(),
            image_url: None,
            metadata: None,
        }
    }

    fn climate_at(&self, lat: f64, lon: f64, now: DateTime<Local>) -> ClimateRecord {
        ClimateRecord {
            temperature_2m: round_tenth(15.2 + self.rng.uniform(5.0)),
            precipitation: round_tenth((2.1 + self.rng.uniform(1.0)).max(0.0)),
            surface_pressure: STANDARD_PRESSURE_HPA,
            wind_speed_2m: round_tenth(3.5 + self.rng.uniform(2.0)),
            coordinates: Coordinates { lat, lon },
            timestamp: now,
            source: CLIMATE_SOURCE.to_string(),
        }
    }
}

impl NasaProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn earth_imagery(&self, query: &ImageryQuery) -> Result<ImageryRecord, ProviderError> {
        Ok(self.imagery_at(query, Local::now()))
    }

    fn climate(&self, query: &ClimateQuery) -> Result<ClimateRecord, ProviderError> {
        Ok(self.climate_at(query.lat, query.lon, Local::now()))
    }

    fn satellite_catalog(&self) -> Result<SatelliteCatalog, ProviderError> {
        Ok(satellite_catalog(Local::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn imagery_defaults_to_today_without_url() {
        let now = Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let record = MockProvider::default().imagery_at(&ImageryQuery::default(), now);
        assert_eq!(record.date, "2024-06-15");
        assert!(record.image_url.is_none());

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn empty_date_falls_back_to_today() {
        let now = Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let query = ImageryQuery {
            date: Some(String::new()),
            ..ImageryQuery::default()
        };
        assert_eq!(MockProvider::default().imagery_at(&query, now).date, "2024-06-15");
    }

    #[test]
    fn climate_stays_in_fallback_ranges() {
        let provider = MockProvider::new(RandomSource::from_seed(Some(3)));
        for _ in 0..200 {
            let record = provider.climate_at(12.0, -8.0, Local::now());
            assert!((10.2..=20.2).contains(&record.temperature_2m));
            assert!((0.0..=3.1).contains(&record.precipitation));
            assert!((1.5..=5.5).contains(&record.wind_speed_2m));
            assert_eq!(record.surface_pressure, 1013.25);
            assert_eq!(record.coordinates, Coordinates { lat: 12.0, lon: -8.0 });
        }
    }
}
