// File: crates/chart-core/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests.

#![allow(dead_code)]

use event_chart_core::{Dataset, Event, Series};

/// The single-event example: one "Top 1-10" series through three points.
pub fn acquisition() -> Dataset {
    Dataset::new(vec![Event::new(
        "e1",
        "Acquisition",
        vec![Series::new("Top 1-10", vec![(-5, 0.0), (0, 1.2), (5, 3.4)])],
    )])
}

/// Two events carrying different subsets of the rank bands.
pub fn two_events() -> Dataset {
    Dataset::new(vec![
        Event::new(
            "merger",
            "Merger Announcements",
            vec![
                Series::new("Top 1-10", vec![(-3, -0.5), (0, 0.8), (3, 2.0)]),
                Series::new("Top 11-20", vec![(-3, 0.2), (0, -0.4), (3, -1.1)]),
                Series::new("Top 21-50", vec![(-3, 0.0), (0, 0.3), (3, 0.9)]),
            ],
        ),
        Event::new(
            "buyback",
            "Buyback Programs",
            vec![
                Series::new("Top 51-100", vec![(-2, 0.1), (0, 0.6), (2, 1.5), (4, 2.2)]),
                Series::new("Top 1-10", vec![(-2, -0.2), (0, -1.8), (2, -2.5), (4, -2.9)]),
            ],
        ),
    ])
}

pub const ACQUISITION_JSON: &str = r#"{
  "events": [
    { "id": "e1", "name": "Acquisition",
      "series": [ { "name": "Top 1-10", "data": [[-5, 0.0], [0, 1.2], [5, 3.4]] } ] }
  ]
}"#;
