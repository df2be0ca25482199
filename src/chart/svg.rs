//! SVG surface
//!
//! Renders the chart into a standalone SVG document, for headless use.

use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

use super::callout::TextAlign;
use super::geometry::{Point, SliceGeometry};
use super::render::Surface;

#[derive(Debug, Clone)]
struct DrawState {
    fill: String,
    stroke: String,
    line_width: f64,
    font: String,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            fill: "#000000".to_string(),
            stroke: "#000000".to_string(),
            line_width: 1.0,
            font: "10px sans-serif".to_string(),
        }
    }
}

/// [`Surface`] writing SVG elements into a buffer
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
    state: DrawState,
    saved: Vec<DrawState>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            state: DrawState::default(),
            saved: Vec::new(),
        }
    }

    /// Paint a full-size background rectangle
    pub fn with_background(mut self, color: &str) -> Self {
        let _ = writeln!(
            self.body,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            self.width,
            self.height,
            escape(color)
        );
        self
    }

    /// Whether anything was drawn
    pub fn is_blank(&self) -> bool {
        self.body.is_empty()
    }

    /// Close the document
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }

    fn wedge_path(slice: &SliceGeometry) -> String {
        let c = slice.center;
        let r = slice.outer_radius;
        let ri = slice.inner_radius;

        if slice.sweep() >= TAU - 1e-9 {
            // Two half arcs; an SVG arc cannot start and end on the same point
            let mut d = format!(
                "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} Z",
                c.x + r,
                c.y,
                c.x - r,
                c.y,
                c.x + r,
                c.y,
                r = r
            );
            if ri > 0.0 {
                let _ = write!(
                    d,
                    " M {:.2} {:.2} A {ri:.2} {ri:.2} 0 1 0 {:.2} {:.2} A {ri:.2} {ri:.2} 0 1 0 {:.2} {:.2} Z",
                    c.x + ri,
                    c.y,
                    c.x - ri,
                    c.y,
                    c.x + ri,
                    c.y,
                    ri = ri
                );
            }
            return d;
        }

        let large = if slice.sweep() > PI { 1 } else { 0 };
        let outer_start = c.polar_offset(slice.start_angle, r);
        let outer_end = c.polar_offset(slice.end_angle, r);

        if ri > 0.0 {
            let inner_end = c.polar_offset(slice.end_angle, ri);
            let inner_start = c.polar_offset(slice.start_angle, ri);
            format!(
                "M {:.2} {:.2} A {r:.2} {r:.2} 0 {large} 1 {:.2} {:.2} L {:.2} {:.2} A {ri:.2} {ri:.2} 0 {large} 0 {:.2} {:.2} Z",
                outer_start.x,
                outer_start.y,
                outer_end.x,
                outer_end.y,
                inner_end.x,
                inner_end.y,
                inner_start.x,
                inner_start.y,
                r = r,
                ri = ri,
                large = large
            )
        } else {
            format!(
                "M {:.2} {:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 {large} 1 {:.2} {:.2} Z",
                c.x,
                c.y,
                outer_start.x,
                outer_start.y,
                outer_end.x,
                outer_end.y,
                r = r,
                large = large
            )
        }
    }
}

impl Surface for SvgSurface {
    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn set_fill_style(&mut self, color: &str) {
        self.state.fill = color.to_string();
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.state.stroke = color.to_string();
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_font(&mut self, font: &str) {
        self.state.font = font.to_string();
    }

    fn wedge(&mut self, slice: &SliceGeometry) {
        if slice.sweep() <= 0.0 {
            return;
        }

        let _ = writeln!(
            self.body,
            r#"<path d="{}" fill="{}" fill-rule="evenodd" stroke="{}" stroke-width="{}"/>"#,
            Self::wedge_path(slice),
            escape(&self.state.fill),
            escape(&self.state.stroke),
            self.state.line_width
        );
    }

    fn polyline(&mut self, points: &[Point]) {
        if points.len() < 2 {
            return;
        }

        let coords: Vec<String> = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect();
        let _ = writeln!(
            self.body,
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            coords.join(" "),
            escape(&self.state.stroke),
            self.state.line_width
        );
    }

    fn text(&mut self, text: &str, at: Point, align: TextAlign) {
        let anchor = match align {
            TextAlign::Left => "start",
            TextAlign::Right => "end",
        };
        let _ = writeln!(
            self.body,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="{}" dominant-baseline="middle" fill="{}" style="font: {}">{}</text>"#,
            at.x,
            at.y,
            anchor,
            escape(&self.state.fill),
            escape(&self.state.font),
            escape(text)
        );
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::render::{render_chart, ChartOptions};
    use crate::chart::ChartArea;
    use crate::models::{Country, Participation};
    use crate::view_model::HomeViewModel;

    fn slice(start: f64, end: f64, inner: f64) -> SliceGeometry {
        SliceGeometry {
            center: Point::new(100.0, 100.0),
            inner_radius: inner,
            outer_radius: 50.0,
            start_angle: start,
            end_angle: end,
        }
    }

    #[test]
    fn test_wedge_path() {
        let d = SvgSurface::wedge_path(&slice(0.0, PI / 2.0, 0.0));
        assert_eq!(d, "M 100.00 100.00 L 150.00 100.00 A 50.00 50.00 0 0 1 100.00 150.00 Z");

        let d = SvgSurface::wedge_path(&slice(0.0, 1.5 * PI, 0.0));
        assert!(d.contains(" 0 1 1 "), "large arc flag expected: {}", d);
    }

    #[test]
    fn test_full_circle_and_donut() {
        let d = SvgSurface::wedge_path(&slice(0.0, TAU, 0.0));
        assert_eq!(d.matches('A').count(), 2);

        let d = SvgSurface::wedge_path(&slice(0.0, TAU, 20.0));
        assert_eq!(d.matches('A').count(), 4);

        let d = SvgSurface::wedge_path(&slice(0.0, PI, 20.0));
        assert!(d.contains("A 20.00 20.00 0 0 0"));
    }

    #[test]
    fn test_state_stack() {
        let mut svg = SvgSurface::new(10.0, 10.0);
        svg.set_fill_style("#111111");
        svg.save();
        svg.set_fill_style("#222222");
        svg.restore();
        svg.text("a", Point::new(1.0, 1.0), TextAlign::Left);

        let doc = svg.finish();
        assert!(doc.contains(r##"fill="#111111""##));
        assert!(doc.contains(r#"text-anchor="start""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut svg = SvgSurface::new(10.0, 10.0);
        svg.text("Trinidad & <Tobago>", Point::new(1.0, 1.0), TextAlign::Right);
        let doc = svg.finish();
        assert!(doc.contains("Trinidad &amp; &lt;Tobago&gt;"));
        assert!(doc.contains(r#"text-anchor="end""#));
    }

    #[test]
    fn test_render_document() {
        let model = HomeViewModel::from_countries(&[
            Country::new(1, "Italy").participation(Participation::new(1, 2012, "Londres", 28, 372)),
            Country::new(2, "Spain").participation(Participation::new(2, 2012, "Londres", 20, 315)),
        ]);

        let mut svg = SvgSurface::new(800.0, 400.0);
        render_chart(&mut svg, &model, &ChartArea::of_size(800.0, 400.0), &ChartOptions::default());
        let doc = svg.finish();

        assert!(doc.starts_with("<svg"));
        assert_eq!(doc.matches("<path").count(), 2);
        assert_eq!(doc.matches("<polyline").count(), 2);
        assert!(doc.contains(">Italy</text>"));
    }

    #[test]
    fn test_empty_chart_is_blank() {
        let mut svg = SvgSurface::new(800.0, 400.0);
        render_chart(
            &mut svg,
            &HomeViewModel::default(),
            &ChartArea::of_size(800.0, 400.0),
            &ChartOptions::default(),
        );
        assert!(svg.is_blank());
    }
}
