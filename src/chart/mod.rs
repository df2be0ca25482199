//! Medal Pie Chart
//!
//! - **geometry**: points, chart area and slice geometry
//! - **pie**: value series → slice geometry, hit-testing
//! - **callout**: leader lines and label anchors around the pie
//! - **palette**: deterministic slice colors
//! - **render**: drawing through the [`Surface`] trait
//! - **svg**: SVG implementation of [`Surface`]
//!
//! # Pipeline
//!
//! ```text
//! HomeViewModel → layout_pie → layout_callouts → draw_pie → draw_callouts
//! ```
//!
//! Drawing is a pure function of the view model, the area and the options,
//! so redrawing with unchanged inputs issues the same calls.

pub mod callout;
pub mod geometry;
pub mod palette;
pub mod pie;
pub mod render;
pub mod svg;

pub use callout::{layout_callouts, Callout, CalloutConfig, TextAlign};
pub use geometry::{ChartArea, Point, SliceGeometry};
pub use palette::{color_for, SLICE_COLORS};
pub use pie::{hit_test, layout_pie, PieStyle};
pub use render::{
    draw_callouts, draw_pie, render_chart, ChartLayout, ChartOptions, ChartStyle, Surface,
};
pub use svg::SvgSurface;
