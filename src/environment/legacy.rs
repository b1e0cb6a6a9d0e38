//! Fixed payloads kept for dashboard clients written against the first
//! version of the API.

use chrono::{DateTime, Local};

use super::types::{
    CurrentEnvironment, EnvironmentMetrics, ImagerySource, ImagerySources, Layer, LayerList,
    MetricReading, MetricTable,
};

pub fn current_environment(now: DateTime<Local>) -> CurrentEnvironment {
    CurrentEnvironment {
        temperature: 15.2,
        co2_levels: 417.5,
        deforestation_rate: 0.08,
        biodiversity_index: 0.76,
        air_quality: 85.2,
        sea_level_rise: 3.4,
        timestamp: now,
    }
}

pub fn environment_metrics(now: DateTime<Local>) -> EnvironmentMetrics {
    EnvironmentMetrics {
        metrics: MetricTable {
            global_temperature: MetricReading {
                value: 15.2,
                unit: "°C",
                change: "+1.1",
                trend: "rising",
            },
            co2_concentration: MetricReading {
                value: 417.5,
                unit: "ppm",
                change: "+2.5",
                trend: "rising",
            },
            sea_level_rise: MetricReading {
                value: 3.4,
                unit: "mm/year",
                change: "+0.3",
                trend: "rising",
            },
            forest_cover_loss: MetricReading {
                value: 10.1,
                unit: "M hectares/year",
                change: "-0.2",
                trend: "improving",
            },
            biodiversity_index: MetricReading {
                value: 76.0,
                unit: "%",
                change: "-2.1",
                trend: "declining",
            },
        },
        last_updated: now,
    }
}

const LAYERS: [Layer; 6] = [
    Layer {
        id: "temperature",
        name: "Temperature Heatmap",
        description: "Global temperature distribution",
    },
    Layer {
        id: "vegetation",
        name: "Vegetation Index",
        description: "NDVI vegetation health",
    },
    Layer {
        id: "co2",
        name: "CO2 Concentration",
        description: "Atmospheric CO2 levels",
    },
    Layer {
        id: "deforestation",
        name: "Deforestation",
        description: "Forest cover changes",
    },
    Layer {
        id: "night_lights",
        name: "Night Lights",
        description: "Human activity at night",
    },
    Layer {
        id: "air_quality",
        name: "Air Quality",
        description: "PM2.5 and pollution levels",
    },
];

const SOURCES: [ImagerySource; 3] = [
    ImagerySource {
        name: "MODIS Terra",
        description: "Moderate Resolution Imaging Spectroradiometer",
        resolution: "250m",
        update_frequency: "daily",
    },
    ImagerySource {
        name: "MODIS Aqua",
        description: "Moderate Resolution Imaging Spectroradiometer",
        resolution: "250m",
        update_frequency: "daily",
    },
    ImagerySource {
        name: "VIIRS",
        description: "Visible Infrared Imaging Radiometer Suite",
        resolution: "375m",
        update_frequency: "nightly",
    },
];

pub fn available_layers() -> LayerList {
    LayerList {
        layers: LAYERS.to_vec(),
    }
}

pub fn imagery_sources() -> ImagerySources {
    ImagerySources {
        sources: SOURCES.to_vec(),
    }
}
