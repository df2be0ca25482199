//! Chart drawing
//!
//! Drawing goes through [`Surface`], a small subset of a 2D canvas API. The
//! browser dashboard implements it over `CanvasRenderingContext2d`, the CLI
//! over an SVG document.

use serde::{Deserialize, Serialize};

use super::callout::{layout_callouts, Callout, CalloutConfig, TextAlign};
use super::geometry::{ChartArea, Point, SliceGeometry};
use super::palette::color_for;
use super::pie::{hit_test, layout_pie, PieStyle};
use crate::view_model::HomeViewModel;

/// Minimal 2D drawing target
pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);

    /// Fill the slice with the fill style and outline it with the stroke style
    fn wedge(&mut self, slice: &SliceGeometry);

    /// Stroke an open path through `points`
    fn polyline(&mut self, points: &[Point]);

    /// Fill `text` anchored at `at`, vertically centered
    fn text(&mut self, text: &str, at: Point, align: TextAlign);
}

/// Colors and fonts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub border_color: String,
    pub border_width: f64,
    pub line_color: String,
    pub text_color: String,
    pub font_family: String,
    pub font_weight: u16,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            border_color: "#ffffff".to_string(),
            border_width: 2.0,
            line_color: "#94a3b8".to_string(),
            text_color: "#1f2937".to_string(),
            font_family: "'Poppins', sans-serif".to_string(),
            font_weight: 500,
        }
    }
}

impl ChartStyle {
    /// CSS font shorthand at the given pixel size
    pub fn font(&self, size: f64) -> String {
        format!("{} {}px {}", self.font_weight, size, self.font_family)
    }
}

/// Everything that shapes a rendered chart besides the data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub pie: PieStyle,
    pub callouts: CalloutConfig,
    pub style: ChartStyle,
}

/// Geometry of the last draw, kept for hit-testing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartLayout {
    pub slices: Vec<SliceGeometry>,
    pub callouts: Vec<Callout>,
}

impl ChartLayout {
    /// Compute slices and callouts without drawing
    pub fn compute(model: &HomeViewModel, area: &ChartArea, options: &ChartOptions) -> Self {
        let slices = layout_pie(&model.values(), area, &options.pie);
        let callouts = layout_callouts(&slices, &model.labels(), &options.callouts);
        Self { slices, callouts }
    }

    /// Slice index under `point`
    pub fn hit(&self, point: Point) -> Option<usize> {
        hit_test(&self.slices, point)
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Draw the pie slices. No calls are made when there are no slices.
pub fn draw_pie<S: Surface + ?Sized>(surface: &mut S, slices: &[SliceGeometry], style: &ChartStyle) {
    if slices.is_empty() {
        return;
    }

    surface.save();
    surface.set_stroke_style(&style.border_color);
    surface.set_line_width(style.border_width);
    for (index, slice) in slices.iter().enumerate() {
        surface.set_fill_style(color_for(index));
        surface.wedge(slice);
    }
    surface.restore();
}

/// Draw leader lines and labels. No calls are made when there are no callouts.
pub fn draw_callouts<S: Surface + ?Sized>(
    surface: &mut S,
    callouts: &[Callout],
    config: &CalloutConfig,
    style: &ChartStyle,
) {
    if callouts.is_empty() {
        return;
    }

    surface.save();
    surface.set_fill_style(&style.text_color);
    surface.set_stroke_style(&style.line_color);
    surface.set_line_width(config.line_width);
    surface.set_font(&style.font(config.font_size));

    for callout in callouts {
        surface.polyline(&callout.points());
        surface.text(&callout.label, callout.text_at, callout.align);
    }

    surface.restore();
}

/// Lay out and draw the whole chart: slices first, then callouts on top.
pub fn render_chart<S: Surface + ?Sized>(
    surface: &mut S,
    model: &HomeViewModel,
    area: &ChartArea,
    options: &ChartOptions,
) -> ChartLayout {
    let layout = ChartLayout::compute(model, area, options);
    draw_pie(surface, &layout.slices, &options.style);
    draw_callouts(surface, &layout.callouts, &options.callouts, &options.style);
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Country, Participation};

    /// Records every call as a line of text
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn save(&mut self) {
            self.calls.push("save".to_string());
        }
        fn restore(&mut self) {
            self.calls.push("restore".to_string());
        }
        fn set_fill_style(&mut self, color: &str) {
            self.calls.push(format!("fill {}", color));
        }
        fn set_stroke_style(&mut self, color: &str) {
            self.calls.push(format!("stroke {}", color));
        }
        fn set_line_width(&mut self, width: f64) {
            self.calls.push(format!("width {}", width));
        }
        fn set_font(&mut self, font: &str) {
            self.calls.push(format!("font {}", font));
        }
        fn wedge(&mut self, slice: &SliceGeometry) {
            self.calls
                .push(format!("wedge {:.3} {:.3}", slice.start_angle, slice.end_angle));
        }
        fn polyline(&mut self, points: &[Point]) {
            self.calls.push(format!("polyline {}", points.len()));
        }
        fn text(&mut self, text: &str, _at: Point, align: TextAlign) {
            self.calls.push(format!("text {} {}", text, align.as_str()));
        }
    }

    fn model() -> HomeViewModel {
        HomeViewModel::from_countries(&[
            Country::new(1, "Italy").participation(Participation::new(1, 2012, "Londres", 3, 10)),
            Country::new(2, "Spain").participation(Participation::new(2, 2012, "Londres", 1, 10)),
        ])
    }

    fn area() -> ChartArea {
        ChartArea::of_size(800.0, 400.0)
    }

    #[test]
    fn test_render_chart() {
        let mut surface = RecordingSurface::default();
        let layout = render_chart(&mut surface, &model(), &area(), &ChartOptions::default());

        assert_eq!(layout.slices.len(), 2);
        assert_eq!(layout.callouts.len(), 2);

        let wedges = surface.calls.iter().filter(|c| c.starts_with("wedge")).count();
        let lines = surface.calls.iter().filter(|c| c.starts_with("polyline 3")).count();
        assert_eq!(wedges, 2);
        assert_eq!(lines, 2);

        // Italy holds 3/4 of the pie starting at twelve o'clock: its middle
        // points right; Spain's quarter sits on the left
        assert!(surface.calls.contains(&"text Italy left".to_string()));
        assert!(surface.calls.contains(&"text Spain right".to_string()));
        assert!(surface.calls.contains(&format!("fill {}", color_for(1))));
    }

    #[test]
    fn test_saves_and_restores_balanced() {
        let mut surface = RecordingSurface::default();
        render_chart(&mut surface, &model(), &area(), &ChartOptions::default());

        let saves = surface.calls.iter().filter(|c| *c == "save").count();
        let restores = surface.calls.iter().filter(|c| *c == "restore").count();
        assert_eq!(saves, restores);
    }

    #[test]
    fn test_empty_chart_draws_nothing() {
        let mut surface = RecordingSurface::default();
        let layout = render_chart(
            &mut surface,
            &HomeViewModel::default(),
            &area(),
            &ChartOptions::default(),
        );

        assert!(layout.is_empty());
        assert!(surface.calls.is_empty());

        draw_callouts(&mut surface, &[], &CalloutConfig::default(), &ChartStyle::default());
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_redraw_is_idempotent() {
        let mut first = RecordingSurface::default();
        let mut second = RecordingSurface::default();
        render_chart(&mut first, &model(), &area(), &ChartOptions::default());
        render_chart(&mut second, &model(), &area(), &ChartOptions::default());
        assert_eq!(first.calls, second.calls);
    }

    #[test]
    fn test_layout_hit() {
        let layout = ChartLayout::compute(&model(), &area(), &ChartOptions::default());
        let center = area().center();
        assert_eq!(layout.hit(Point::new(center.x + 10.0, center.y)), Some(0));
        assert_eq!(layout.hit(Point::new(center.x - 10.0, center.y - 10.0)), Some(1));
    }

    #[test]
    fn test_font() {
        assert_eq!(ChartStyle::default().font(12.0), "500 12px 'Poppins', sans-serif");
    }
}
