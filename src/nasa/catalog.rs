use chrono::{DateTime, Local};

use super::types::{SatelliteCatalog, SatelliteInfo};

struct Platform {
    name: &'static str,
    description: &'static str,
    resolution: &'static str,
    bands: &'static [&'static str],
    update_frequency: &'static str,
}

const PLATFORMS: [Platform; 3] = [
    Platform {
        name: "MODIS Terra",
        description: "Moderate Resolution Imaging Spectroradiometer on Terra satellite",
        resolution: "250m-1km",
        bands: &["true_color", "false_color", "vegetation", "temperature"],
        update_frequency: "daily",
    },
    Platform {
        name: "MODIS Aqua",
        description: "Moderate Resolution Imaging Spectroradiometer on Aqua satellite",
        resolution: "250m-1km",
        bands: &["true_color", "chlorophyll", "sea_surface_temp"],
        update_frequency: "daily",
    },
    Platform {
        name: "VIIRS",
        description: "Visible Infrared Imaging Radiometer Suite",
        resolution: "375m-750m",
        bands: &["true_color", "night_lights", "cloud_cover"],
        update_frequency: "daily",
    },
];

/// The fixed platform catalog, stamped with `now`.
pub fn satellite_catalog(now: DateTime<Local>) -> SatelliteCatalog {
    SatelliteCatalog {
        available_satellites: PLATFORMS
            .iter()
            .map(|p| SatelliteInfo {
                name: p.name.to_string(),
                description: p.description.to_string(),
                resolution: p.resolution.to_string(),
                bands: p.bands.iter().map(|b| b.to_string()).collect(),
                update_frequency: p.update_frequency.to_string(),
            })
            .collect(),
        last_updated: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_three_platforms_in_order() {
        let catalog = satellite_catalog(Local::now());
        let names: Vec<_> = catalog
            .available_satellites
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["MODIS Terra", "MODIS Aqua", "VIIRS"]);
    }

    #[test]
    fn aqua_carries_ocean_bands() {
        let catalog = satellite_catalog(Local::now());
        assert_eq!(
            catalog.available_satellites[1].bands,
            ["true_color", "chlorophyll", "sea_surface_temp"]
        );
    }
}
