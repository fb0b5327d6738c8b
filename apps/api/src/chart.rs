//! Chart adapter — turns a `ScoreMap` into closed-polygon radar series data.
//!
//! The server does not render; it hands the frontend a ready-to-plot polar
//! series with the polygon already closed (first vertex repeated at the end).

use serde::Serialize;

use crate::scoring::ScoreMap;

const AXIS_MIN: f64 = 0.0;
const AXIS_MAX: f64 = 100.0;

/// A closed radar polygon over the six evaluation dimensions.
#[derive(Debug, Clone, Serialize)]
pub struct RadarChart {
    /// Axis labels, first repeated at the end.
    pub labels: Vec<String>,
    /// Dimension values in axis order, first repeated at the end.
    pub values: Vec<f64>,
    /// Unit-circle vertex coordinates, radius scaled by value / 100, closed.
    pub points: Vec<[f64; 2]>,
    /// Radial axis range.
    pub range: [f64; 2],
}

/// Builds the radar series for the dimension scores.
/// The aggregate is not an axis and is excluded.
pub fn radar(scores: &ScoreMap) -> RadarChart {
    let n = scores.dimensions.len();

    let mut labels: Vec<String> = scores
        .dimensions
        .iter()
        .map(|d| d.name.to_string())
        .collect();
    let mut values: Vec<f64> = scores.dimensions.iter().map(|d| d.value).collect();

    let mut points: Vec<[f64; 2]> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let angle = std::f64::consts::TAU * i as f64 / n as f64;
            let r = v / AXIS_MAX;
            [r * angle.cos(), r * angle.sin()]
        })
        .collect();

    // Close the polygon
    if let Some(first) = labels.first().cloned() {
        labels.push(first);
        values.push(values[0]);
        points.push(points[0]);
    }

    RadarChart {
        labels,
        values,
        points,
        range: [AXIS_MIN, AXIS_MAX],
    }
}
