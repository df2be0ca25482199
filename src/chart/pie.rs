//! Pie layout
//!
//! Turns a value series into slice geometry. One slice is produced per value
//! (zero values give zero-width slices) so slice indices always line up with
//! the series labels.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

use super::geometry::{ChartArea, Point, SliceGeometry};

/// Sizing of the pie inside its chart area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieStyle {
    /// Space kept free between the pie edge and the area edge, for labels
    pub label_room: f64,
    /// Inner radius as a fraction of the outer one (0 for a full pie)
    pub inner_ratio: f64,
    /// Angle of the first slice edge; the default starts at twelve o'clock
    pub start_angle: f64,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            label_room: 90.0,
            inner_ratio: 0.0,
            start_angle: -FRAC_PI_2,
        }
    }
}

/// Lay the series out clockwise. Empty series, an all-zero series or an area
/// too small to hold a pie produce no slices.
pub fn layout_pie(values: &[u64], area: &ChartArea, style: &PieStyle) -> Vec<SliceGeometry> {
    let total: u64 = values.iter().sum();
    if total == 0 || area.is_empty() {
        return Vec::new();
    }

    let outer_radius = area.width.min(area.height) / 2.0 - style.label_room;
    if outer_radius <= 0.0 {
        tracing::debug!(
            width = area.width,
            height = area.height,
            "Chart area too small for pie"
        );
        return Vec::new();
    }

    let center = area.center();
    let inner_radius = outer_radius * style.inner_ratio.clamp(0.0, 1.0);

    let mut angle = style.start_angle;
    values
        .iter()
        .map(|&value| {
            let sweep = value as f64 / total as f64 * TAU;
            let slice = SliceGeometry {
                center,
                inner_radius,
                outer_radius,
                start_angle: angle,
                end_angle: angle + sweep,
            };
            angle += sweep;
            slice
        })
        .collect()
}

/// Index of the slice under `point`, if any
pub fn hit_test(slices: &[SliceGeometry], point: Point) -> Option<usize> {
    slices
        .iter()
        .position(|slice| slice.sweep() > 0.0 && slice.contains(point))
}
