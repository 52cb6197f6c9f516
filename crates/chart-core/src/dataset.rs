// File: crates/chart-core/src/dataset.rs
// Summary: Event dataset model (events -> rank-group series -> day/return points).

use serde::{Deserialize, Serialize};

/// One observation: signed trading-day offset and cumulative return in percent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint(pub i32, pub f64);

impl DataPoint {
    pub fn day(&self) -> i32 { self.0 }
    pub fn ret(&self) -> f64 { self.1 }
}

/// Cumulative returns of one rank group. Points are expected in non-decreasing day order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Rank-group label, e.g. `"Top 1-10"`.
    pub name: String,
    #[serde(default)]
    pub data: Vec<DataPoint>,
}

impl Series {
    pub fn new(name: impl Into<String>, data: Vec<(i32, f64)>) -> Self {
        Self { name: name.into(), data: data.into_iter().map(|(d, r)| DataPoint(d, r)).collect() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub series: Vec<Series>,
}

impl Event {
    pub fn new(id: impl Into<String>, name: impl Into<String>, series: Vec<Series>) -> Self {
        Self { id: id.into(), name: name.into(), series }
    }

    /// All points across every series, in series order.
    pub fn points(&self) -> impl Iterator<Item = &DataPoint> + '_ {
        self.series.iter().flat_map(|s| s.data.iter())
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.data.len()).sum()
    }
}

/// Immutable set of events, loaded once per session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Dataset {
    pub fn new(events: Vec<Event>) -> Self { Self { events } }

    pub fn len(&self) -> usize { self.events.len() }

    pub fn is_empty(&self) -> bool { self.events.is_empty() }

    pub fn first(&self) -> Option<&Event> { self.events.first() }

    pub fn find(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }
}
