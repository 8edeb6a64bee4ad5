//! Typed access to the precomputed metrics document.
//!
//! The document is a flat JSON object mapping metric names to numbers. Keys the
//! dashboard consumes are declared in [`MetricKey`] together with whether their
//! absence is tolerated.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::error::{DataError, DataResult};

/// Metric keys read by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    AvgIdleBaselineMin,
    AvgIdleAfterMin,
    Top15CustomersShareRides,
    Top5ZonesShareRides,
    #[serde(rename = "trips_share_making_45pct_revenue")]
    TripsShareMaking45pctRevenue,
}

impl MetricKey {
    /// Keys whose absence aborts rendering.
    pub const REQUIRED: [MetricKey; 3] = [
        MetricKey::Top15CustomersShareRides,
        MetricKey::Top5ZonesShareRides,
        MetricKey::TripsShareMaking45pctRevenue,
    ];

    /// Name of the key inside the metrics document.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MetricKey::AvgIdleBaselineMin => "avg_idle_baseline_min",
            MetricKey::AvgIdleAfterMin => "avg_idle_after_min",
            MetricKey::Top15CustomersShareRides => "top15_customers_share_rides",
            MetricKey::Top5ZonesShareRides => "top5_zones_share_rides",
            MetricKey::TripsShareMaking45pctRevenue => "trips_share_making_45pct_revenue",
        }
    }

    pub const fn is_required(&self) -> bool {
        !matches!(
            self,
            MetricKey::AvgIdleBaselineMin | MetricKey::AvgIdleAfterMin
        )
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat metric name -> value mapping, loaded once per process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsDocument {
    values: BTreeMap<String, f64>,
    /// Keys written as integer literals (`7` rather than `7.0`)
    #[serde(default)]
    integral: BTreeSet<String>,
}

impl MetricsDocument {
    pub fn new(values: BTreeMap<String, f64>) -> Self {
        Self {
            values,
            integral: BTreeSet::new(),
        }
    }

    /// Parse a metrics document from JSON text.
    ///
    /// Numbers are kept, `null` counts as absent and any other value type is
    /// skipped. The top level has to be an object.
    pub fn from_json_str(json: &str) -> DataResult<Self> {
        let root: Value = serde_json::from_str(json)?;
        let Value::Object(entries) = root else {
            return Err(DataError::Metrics(
                "top-level value must be a JSON object".to_string(),
            ));
        };

        let mut values = BTreeMap::new();
        let mut integral = BTreeSet::new();
        for (name, value) in entries {
            match value {
                Value::Number(n) => match n.as_f64() {
                    Some(v) => {
                        if !n.is_f64() {
                            integral.insert(name.clone());
                        }
                        values.insert(name, v);
                    }
                    None => log::warn!("Skipping metric '{}': not representable as f64", name),
                },
                Value::Null => {}
                other => log::warn!("Skipping non-numeric metric '{}': {}", name, other),
            }
        }

        Ok(Self { values, integral })
    }

    /// Optional lookup.
    pub fn get(&self, key: MetricKey) -> Option<f64> {
        self.values.get(key.as_str()).copied()
    }

    /// Required lookup; absence is a [`DataError::MissingMetric`].
    pub fn require(&self, key: MetricKey) -> DataResult<f64> {
        self.get(key).ok_or(DataError::MissingMetric(key))
    }

    /// Whether `key` was written as an integer literal.
    pub fn is_integral(&self, key: MetricKey) -> bool {
        self.integral.contains(key.as_str())
    }

    /// Required keys not present in the document.
    pub fn missing_required(&self) -> Vec<MetricKey> {
        MetricKey::REQUIRED
            .into_iter()
            .filter(|k| self.get(*k).is_none())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
