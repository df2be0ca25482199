//! Plane geometry shared by the pie layout and the callout labels.
//!
//! Coordinates follow the canvas convention: `y` grows downward, so a
//! positive angle turns clockwise on screen.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `distance` from `self` in direction `angle`
    pub fn polar_offset(self, angle: f64, distance: f64) -> Self {
        Self {
            x: self.x + angle.cos() * distance,
            y: self.y + angle.sin() * distance,
        }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle of `other` seen from `self`, in `(-π, π]`
    pub fn angle_to(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

/// Rectangle the chart is drawn into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartArea {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Area covering a whole canvas of the given size
    pub fn of_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Rendered geometry of one pie slice
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceGeometry {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl SliceGeometry {
    /// Angle bisecting the slice
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Whether `point` falls inside the slice
    pub fn contains(&self, point: Point) -> bool {
        let r = self.center.distance_to(point);
        if r < self.inner_radius || r > self.outer_radius {
            return false;
        }

        let sweep = self.sweep();
        if sweep >= TAU {
            return true;
        }

        let relative = (self.center.angle_to(point) - self.start_angle).rem_euclid(TAU);
        relative < sweep
    }
}
