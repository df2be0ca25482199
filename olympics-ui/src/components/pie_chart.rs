//! Pie Chart Component
//!
//! Medal pie chart drawn on an HTML5 Canvas, with callout labels, hover
//! tooltip and click-through to the country page.

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use olympics::chart::{
    render_chart, ChartArea, ChartLayout, ChartOptions, Point, SliceGeometry, Surface, TextAlign,
};
use olympics::{country_path, HomeViewModel};

/// Chart width until the canvas has been laid out
const FALLBACK_WIDTH: f64 = 800.0;

/// Chart height in CSS pixels for a viewport of the given width
fn chart_height(viewport_width: f64) -> f64 {
    if viewport_width < 768.0 {
        360.0
    } else {
        500.0
    }
}

/// Backing-store length in device pixels for a length in CSS pixels
fn device_pixels(css: f64, pixel_ratio: f64) -> u32 {
    (css * pixel_ratio.max(1.0)).round().max(1.0) as u32
}

fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(FALLBACK_WIDTH)
}

/// Medal pie chart component
#[component]
pub fn PieChart(
    #[prop(into)]
    model: Signal<HomeViewModel>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let viewport = create_rw_signal(viewport_width());
    let layout = create_rw_signal(ChartLayout::default());
    let hovered = create_rw_signal(None::<usize>);

    let resize = window_event_listener(ev::resize, move |_| viewport.set(viewport_width()));
    on_cleanup(move || resize.remove());

    // Redraw whenever the data or the viewport changes. Layout works in CSS
    // pixels; the backing store is scaled to the device pixel ratio.
    create_effect(move |_| {
        let viewport_width = viewport.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        let mut width = canvas.client_width() as f64;
        if width <= 0.0 {
            width = viewport_width.min(FALLBACK_WIDTH);
        }
        let height = chart_height(viewport_width);
        let ratio = window().device_pixel_ratio();

        canvas.set_width(device_pixels(width, ratio));
        canvas.set_height(device_pixels(height, ratio));

        let mut options = ChartOptions::default();
        options.callouts = options.callouts.for_viewport(viewport_width);

        let area = ChartArea::of_size(width, height);
        model.with(|model| {
            if let Some(drawn) = draw_chart(&canvas, model, &area, ratio, &options) {
                layout.set(drawn);
            }
        });
    });

    // Mouse offsets are CSS pixels, the same space the layout was computed in
    let slice_at = move |ev: &MouseEvent| -> Option<usize> {
        let point = Point::new(ev.offset_x() as f64, ev.offset_y() as f64);
        layout.with_untracked(|l| l.hit(point))
    };

    let on_move = move |ev: MouseEvent| hovered.set(slice_at(&ev));
    let on_leave = move |_| hovered.set(None);

    let navigate = use_navigate();
    let on_click = move |ev: MouseEvent| {
        let Some(index) = slice_at(&ev) else {
            return;
        };
        let target = model.with_untracked(|m| m.medal_series.get(index).map(|s| s.country_id));
        if let Some(id) = target {
            navigate(&country_path(id), NavigateOptions::default());
        }
    };

    let tooltip = move || hovered.get().and_then(|i| model.with(|m| m.tooltip(i)));

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                class="w-full block"
                style:height=move || format!("{}px", chart_height(viewport.get()))
                class:cursor-pointer=move || hovered.get().is_some()
                on:mousemove=on_move
                on:mouseleave=on_leave
                on:click=on_click
            />

            {move || tooltip().map(|text| view! {
                <div class="absolute top-2 left-1/2 -translate-x-1/2 bg-slate-800 text-white text-sm px-3 py-1 rounded pointer-events-none">
                    {text}
                </div>
            })}
        </div>
    }
}

/// Clear the canvas and draw the chart into `area`, given in CSS pixels.
/// Returns `None` when no 2D context is available.
fn draw_chart(
    canvas: &HtmlCanvasElement,
    model: &HomeViewModel,
    area: &ChartArea,
    pixel_ratio: f64,
    options: &ChartOptions,
) -> Option<ChartLayout> {
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    let ratio = pixel_ratio.max(1.0);
    ctx.scale(ratio, ratio).ok()?;

    let mut surface = CanvasSurface { ctx };
    Some(render_chart(&mut surface, model, area, options))
}

/// [`Surface`] over a canvas 2D context
struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style(&color.into());
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style(&color.into());
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn wedge(&mut self, slice: &SliceGeometry) {
        if slice.sweep() <= 0.0 {
            return;
        }

        let c = slice.center;
        self.ctx.begin_path();
        if slice.inner_radius > 0.0 {
            let _ = self
                .ctx
                .arc(c.x, c.y, slice.outer_radius, slice.start_angle, slice.end_angle);
            let _ = self.ctx.arc_with_anticlockwise(
                c.x,
                c.y,
                slice.inner_radius,
                slice.end_angle,
                slice.start_angle,
                true,
            );
        } else {
            self.ctx.move_to(c.x, c.y);
            let _ = self
                .ctx
                .arc(c.x, c.y, slice.outer_radius, slice.start_angle, slice.end_angle);
        }
        self.ctx.close_path();
        self.ctx.fill();
        self.ctx.stroke();
    }

    fn polyline(&mut self, points: &[Point]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.stroke();
    }

    fn text(&mut self, text: &str, at: Point, align: TextAlign) {
        self.ctx.set_text_align(align.as_str());
        self.ctx.set_text_baseline("middle");
        let _ = self.ctx.fill_text(text, at.x, at.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_viewports_get_a_shorter_chart() {
        assert_eq!(chart_height(375.0), 360.0);
        assert_eq!(chart_height(1280.0), 500.0);
    }

    #[test]
    fn test_device_pixels_follow_ratio() {
        assert_eq!(device_pixels(311.0, 1.0), 311);
        assert_eq!(device_pixels(311.0, 3.0), 933);
        assert_eq!(device_pixels(100.5, 2.0), 201);
    }

    #[test]
    fn test_device_pixels_never_zero() {
        assert_eq!(device_pixels(0.0, 2.0), 1);
        assert_eq!(device_pixels(200.0, 0.0), 200);
    }
}
