//! Callout labels
//!
//! Each slice gets a two-segment leader line leaving the pie at the slice's
//! mid angle and turning horizontal, with the label written at its end.
//!
//! ```text
//!                 P1 ───────── P2  Label
//!                /
//!              P0  (slice edge)
//! ```

use serde::{Deserialize, Serialize};

use super::geometry::{Point, SliceGeometry};

/// Spacing and stroke settings for callout labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalloutConfig {
    /// Space between the slice edge and where the leader line starts
    pub gap: f64,
    /// Length of the radial segment
    pub offset: f64,
    /// Length of the horizontal segment
    pub horizontal_length: f64,
    /// Minimum horizontal clearance of the line end past the pie edge
    pub margin: f64,
    /// Space between the line end and the text
    pub text_padding: f64,
    pub line_width: f64,
    pub font_size: f64,
    /// Viewports narrower than this use scaled-down spacing
    pub small_viewport_width: f64,
    /// Factor applied to spacing and strokes on small viewports
    pub small_viewport_scale: f64,
}

impl Default for CalloutConfig {
    fn default() -> Self {
        Self {
            gap: 0.0,
            offset: 40.0,
            horizontal_length: 30.0,
            margin: 12.0,
            text_padding: 5.0,
            line_width: 1.0,
            font_size: 12.0,
            small_viewport_width: 768.0,
            small_viewport_scale: 0.6,
        }
    }
}

impl CalloutConfig {
    /// Settings to use on a viewport `width` pixels wide
    pub fn for_viewport(&self, width: f64) -> Self {
        if width >= self.small_viewport_width {
            return self.clone();
        }

        let scale = self.small_viewport_scale;
        Self {
            gap: self.gap * scale,
            offset: self.offset * scale,
            horizontal_length: self.horizontal_length * scale,
            margin: self.margin * scale,
            text_padding: self.text_padding * scale,
            line_width: (self.line_width * scale).max(0.5),
            font_size: (self.font_size * scale).max(9.0),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Right => "right",
        }
    }
}

/// Leader line and label placement for one slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Callout {
    pub index: usize,
    pub label: String,
    /// On the slice edge
    pub start: Point,
    /// End of the radial segment
    pub elbow: Point,
    /// End of the horizontal segment
    pub end: Point,
    /// Text anchor, vertically centered
    pub text_at: Point,
    pub align: TextAlign,
}

impl Callout {
    pub fn is_right_side(&self) -> bool {
        self.align == TextAlign::Left
    }

    pub fn points(&self) -> [Point; 3] {
        [self.start, self.elbow, self.end]
    }
}

/// Cosines within this distance of zero count as pointing straight up or down
const SIDE_EPSILON: f64 = 1e-9;

/// Place one callout per visible slice. Labels are matched by index and
/// [`Callout::index`] keeps the slice position; a missing label is drawn as
/// empty text. Zero-sweep slices get no callout.
pub fn layout_callouts(
    slices: &[SliceGeometry],
    labels: &[String],
    config: &CalloutConfig,
) -> Vec<Callout> {
    slices
        .iter()
        .enumerate()
        .filter(|(_, slice)| slice.sweep() > 0.0)
        .map(|(index, slice)| {
            let label = labels.get(index).cloned().unwrap_or_default();
            place_callout(index, label, slice, config)
        })
        .collect()
}

fn place_callout(index: usize, label: String, slice: &SliceGeometry, config: &CalloutConfig) -> Callout {
    let angle = slice.mid_angle();
    let center = slice.center;
    let radius = slice.outer_radius;

    let start = center.polar_offset(angle, radius);
    let elbow = start.polar_offset(angle, config.gap + config.offset);

    let right_side = angle.cos() > -SIDE_EPSILON;
    let min_reach = radius + config.margin;

    let end_x = if right_side {
        (elbow.x + config.horizontal_length).max(center.x + min_reach)
    } else {
        (elbow.x - config.horizontal_length).min(center.x - min_reach)
    };
    let end = Point::new(end_x, elbow.y);

    let (text_x, align) = if right_side {
        (end.x + config.text_padding, TextAlign::Left)
    } else {
        (end.x - config.text_padding, TextAlign::Right)
    };

    Callout {
        index,
        label,
        start,
        elbow,
        end,
        text_at: Point::new(text_x, end.y),
        align,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn slice_at(angle: f64) -> SliceGeometry {
        SliceGeometry {
            center: Point::new(200.0, 150.0),
            inner_radius: 0.0,
            outer_radius: 60.0,
            start_angle: angle - 0.1,
            end_angle: angle + 0.1,
        }
    }

    #[test]
    fn test_right_pointing_slice() {
        let slice = slice_at(0.0);
        let callouts = layout_callouts(&[slice], &["Italy".to_string()], &CalloutConfig::default());
        let c = &callouts[0];

        assert!(c.end.x > slice.center.x + slice.outer_radius);
        assert!(c.is_right_side());
        assert_eq!(c.align, TextAlign::Left);
        assert!(c.text_at.x > c.end.x);
        assert_eq!(c.label, "Italy");
    }

    #[test]
    fn test_left_pointing_slice() {
        let slice = slice_at(PI);
        let callouts = layout_callouts(&[slice], &["Spain".to_string()], &CalloutConfig::default());
        let c = &callouts[0];

        assert!(c.end.x < slice.center.x - slice.outer_radius);
        assert_eq!(c.align, TextAlign::Right);
        assert!(c.text_at.x < c.end.x);
    }

    #[test]
    fn test_segments() {
        let config = CalloutConfig::default();
        let slice = slice_at(-PI / 4.0);
        let c = &layout_callouts(&[slice], &[], &config)[0];

        // Start sits on the pie edge
        assert!((slice.center.distance_to(c.start) - 60.0).abs() < 1e-9);
        // Radial segment
        assert!((c.start.distance_to(c.elbow) - (config.gap + config.offset)).abs() < 1e-9);
        // Horizontal segment at the elbow height
        assert_eq!(c.end.y, c.elbow.y);
        assert_eq!(c.text_at.y, c.end.y);
        assert_eq!(c.label, "");
    }

    #[test]
    fn test_vertical_slice_is_clamped_outside_pie() {
        let config = CalloutConfig::default();
        let slice = slice_at(FRAC_PI_2);
        let c = &layout_callouts(&[slice], &[], &config)[0];

        assert!(c.end.x >= slice.center.x + slice.outer_radius + config.margin - 1e-9);
    }

    #[test]
    fn test_no_slices() {
        assert!(layout_callouts(&[], &["Orphan".to_string()], &CalloutConfig::default()).is_empty());
    }

    #[test]
    fn test_small_viewport() {
        let config = CalloutConfig::default();
        assert_eq!(config.for_viewport(1024.0), config);

        let small = config.for_viewport(375.0);
        assert!(small.offset < config.offset);
        assert!(small.horizontal_length < config.horizontal_length);
        assert!(small.line_width >= 0.5);
        assert_eq!(small.small_viewport_width, config.small_viewport_width);
    }

    #[test]
    fn test_zero_sweep_slices_get_no_callout() {
        let empty = |angle: f64| SliceGeometry {
            start_angle: angle,
            end_angle: angle,
            ..slice_at(angle)
        };
        let slices = [empty(-FRAC_PI_2), slice_at(0.5), empty(0.5)];
        let labels = ["Zero".to_string(), "Italy".to_string(), "Zero2".to_string()];

        let callouts = layout_callouts(&slices, &labels, &CalloutConfig::default());
        assert_eq!(callouts.len(), 1);
        assert_eq!(callouts[0].index, 1);
        assert_eq!(callouts[0].label, "Italy");
    }

    #[test]
    fn test_vertical_angles_pick_a_stable_side() {
        let config = CalloutConfig::default();
        for angle in [-FRAC_PI_2, FRAC_PI_2, 3.0 * FRAC_PI_2] {
            let c = place_callout(0, String::new(), &slice_at(angle), &config);
            assert!(c.is_right_side(), "angle {} went left", angle);
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        let slices = [slice_at(0.3), slice_at(2.5)];
        let labels = ["A".to_string(), "B".to_string()];
        let config = CalloutConfig::default();
        assert_eq!(
            layout_callouts(&slices, &labels, &config),
            layout_callouts(&slices, &labels, &config)
        );
    }
}
