use crate::random::RandomSource;

use crate::numeric::round_tenth;
use super::types::{Change, EnvironmentSnapshot, Metric, MetricValue, Trend};

/// How one snapshot metric is generated.
///
/// `trend` and `change` are display labels and do not follow the sign of the
/// drawn perturbation.
#[derive(Debug, Clone, Copy)]
pub struct MetricSpec {
    pub baseline: f64,
    pub spread: f64,
    /// Count-like metrics are drawn as integers.
    pub integral: bool,
    pub trend: Trend,
    pub change: Change,
}

const TEMPERATURE: MetricSpec = MetricSpec {
    baseline: 15.2,
    spread: 0.5,
    integral: false,
    trend: Trend::Up,
    change: Change::Label("+1.2°C"),
};

const CO2: MetricSpec = MetricSpec {
    baseline: 417.0,
    spread: 2.0,
    integral: true,
    trend: Trend::Up,
    change: Change::Amount(52),
};

const SEA_LEVEL: MetricSpec = MetricSpec {
    baseline: 3.2,
    spread: 0.2,
    integral: false,
    trend: Trend::Up,
    change: Change::Label("+0.8mm"),
};

const FOREST_COVER: MetricSpec = MetricSpec {
    baseline: 31.2,
    spread: 0.5,
    integral: false,
    trend: Trend::Down,
    change: Change::Label("-2.1%"),
};

const BIODIVERSITY: MetricSpec = MetricSpec {
    baseline: 24.7,
    spread: 1.0,
    integral: false,
    trend: Trend::Up,
    change: Change::Label("+1.5%"),
};

const ICE_COVER: MetricSpec = MetricSpec {
    baseline: 12.8,
    spread: 1.0,
    integral: false,
    trend: Trend::Down,
    change: Change::Label("-3.2%"),
};

const AIR_QUALITY: MetricSpec = MetricSpec {
    baseline: 85.0,
    spread: 5.0,
    integral: true,
    trend: Trend::Down,
    change: Change::Label("+5%"),
};

/// Snapshot metrics in field order.
pub const METRICS: [MetricSpec; 7] = [
    TEMPERATURE,
    CO2,
    SEA_LEVEL,
    FOREST_COVER,
    BIODIVERSITY,
    ICE_COVER,
    AIR_QUALITY,
];

impl MetricSpec {
    pub fn sample(&self, rng: &RandomSource) -> Metric {
        let value = if self.integral {
            MetricValue::Count(self.baseline as i64 + rng.uniform_int(self.spread as i64))
        } else {
            MetricValue::Decimal(round_tenth(self.baseline + rng.uniform(self.spread)))
        };
        Metric {
            value,
            trend: self.trend,
            change: self.change,
        }
    }
}

pub fn current_snapshot(rng: &RandomSource) -> EnvironmentSnapshot {
    let [temperature, co2, sea_level, forest_cover, biodiversity, ice_cover, air_quality] =
        METRICS.map(|spec| spec.sample(rng));

    EnvironmentSnapshot {
        temperature,
        co2,
        sea_level,
        forest_cover,
        biodiversity,
        ice_cover,
        air_quality,
    }
}
