use std::f32::consts::FRAC_PI_2;

use macroquad::prelude::*;
use projectile_sim::PlotState;
use projectile_sim::core::form::SERIES_LABEL;
use projectile_sim::core::window::PlotBounds;

use crate::constants::{
    CURVE_COLOR, GRID_COLOR, LABEL_COLOR, TITLE_COLOR, X_GRID_LINES, Y_GRID_LINES,
};

/// Screen rectangle of the plot plus the data window it shows.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PlotRect {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
    pub(crate) bounds: PlotBounds,
}

impl PlotRect {
    pub(crate) fn world_to_screen(&self, x: f64, y: f64) -> Vec2 {
        let plot_w = (self.right - self.left).max(1.0);
        let plot_h = (self.bottom - self.top).max(1.0);
        let tx = ((x - self.bounds.x_min) / self.bounds.width()) as f32;
        let ty = ((y - self.bounds.y_min) / self.bounds.height()) as f32;
        vec2(self.left + tx * plot_w, self.bottom - ty * plot_h)
    }
}

fn format_axis_value(value: f64, span: f64) -> String {
    if span >= 1000.0 {
        format!("{value:.0}")
    } else if span >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

fn draw_grid(rect: &PlotRect) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = rect.left + t * (rect.right - rect.left);
        draw_line(x, rect.top, x, rect.bottom, 1.0, GRID_COLOR);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = rect.bottom - t * (rect.bottom - rect.top);
        draw_line(rect.left, y, rect.right, y, 1.0, GRID_COLOR);
    }
}

// Frame plus the ground line and launch column when they fall inside.
fn draw_axes(rect: &PlotRect) {
    draw_rectangle_lines(
        rect.left,
        rect.top,
        rect.right - rect.left,
        rect.bottom - rect.top,
        2.0,
        DARKGRAY,
    );
    let b = rect.bounds;
    if b.y_min < 0.0 && b.y_max > 0.0 {
        let ground = rect.world_to_screen(b.x_min, 0.0);
        draw_line(rect.left, ground.y, rect.right, ground.y, 1.5, GRAY);
    }
    if b.x_min < 0.0 && b.x_max > 0.0 {
        let launch = rect.world_to_screen(0.0, b.y_min);
        draw_line(launch.x, rect.top, launch.x, rect.bottom, 1.5, GRAY);
    }
}

fn draw_axis_tick_labels(rect: &PlotRect, font: Option<&Font>) {
    let tick_font_size: u16 = 16;
    let b = rect.bounds;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = rect.left + t * (rect.right - rect.left);
        let value = b.x_min + f64::from(t) * b.width();
        let label = format_axis_value(value, b.width());
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            rect.bottom + 22.0,
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = rect.bottom - t * (rect.bottom - rect.top);
        let value = b.y_min + f64::from(t) * b.height();
        let label = format_axis_value(value, b.height());
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (rect.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            LABEL_COLOR,
            font,
        );
    }
}

fn draw_titles(plot: &PlotState, rect: &PlotRect, font: Option<&Font>) {
    let title_size = measure_text(plot.title(), font, 26, 1.0);
    let center_x = (rect.left + rect.right) * 0.5;
    draw_ui_text(
        plot.title(),
        center_x - title_size.width * 0.5,
        rect.top - 18.0,
        26,
        TITLE_COLOR,
        font,
    );

    let x_size = measure_text(plot.x_label(), font, 18, 1.0);
    draw_ui_text(
        plot.x_label(),
        center_x - x_size.width * 0.5,
        rect.bottom + 52.0,
        18,
        LABEL_COLOR,
        font,
    );

    let y_size = measure_text(plot.y_label(), font, 18, 1.0);
    let center_y = (rect.top + rect.bottom) * 0.5;
    draw_text_ex(
        plot.y_label(),
        rect.left - 62.0,
        center_y + y_size.width * 0.5,
        TextParams {
            font,
            font_size: 18,
            color: LABEL_COLOR,
            rotation: -FRAC_PI_2,
            ..Default::default()
        },
    );
}

fn draw_legend(rect: &PlotRect, font: Option<&Font>) {
    let size = measure_text(SERIES_LABEL, font, 16, 1.0);
    let w = size.width + 48.0;
    let h = 28.0;
    let x = rect.right - w - 10.0;
    let y = rect.top + 10.0;
    draw_rectangle(x, y, w, h, Color::new(1.0, 1.0, 1.0, 0.85));
    draw_rectangle_lines(x, y, w, h, 1.0, DARKGRAY);
    draw_line(x + 8.0, y + h * 0.5, x + 32.0, y + h * 0.5, 2.5, CURVE_COLOR);
    draw_ui_text(
        SERIES_LABEL,
        x + 38.0,
        y + h * 0.5 + size.height * 0.4,
        16,
        TITLE_COLOR,
        font,
    );
}

fn draw_curve(plot: &PlotState, rect: &PlotRect) {
    let Some(curve) = plot.curve() else {
        return;
    };
    if curve.len() < 2 {
        return;
    }
    let mut prev = rect.world_to_screen(curve[0].x_m, curve[0].y_m);
    for sample in &curve[1..] {
        let cur = rect.world_to_screen(sample.x_m, sample.y_m);
        draw_line(prev.x, prev.y, cur.x, cur.y, 2.5, CURVE_COLOR);
        prev = cur;
    }
}

/// Axes, labels and (if present) the curve with its legend.
pub(crate) fn draw_plot(plot: &PlotState, rect: &PlotRect, font: Option<&Font>) {
    draw_rectangle(
        rect.left,
        rect.top,
        rect.right - rect.left,
        rect.bottom - rect.top,
        WHITE,
    );
    draw_grid(rect);
    draw_axes(rect);
    draw_axis_tick_labels(rect, font);
    draw_titles(plot, rect, font);
    if !plot.is_empty() {
        draw_curve(plot, rect);
        draw_legend(rect, font);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> PlotRect {
        PlotRect {
            left: 100.0,
            right: 500.0,
            top: 50.0,
            bottom: 250.0,
            bounds: PlotBounds {
                x_min: -10.0,
                x_max: 30.0,
                y_min: 0.0,
                y_max: 20.0,
            },
        }
    }

    #[test]
    fn corners_map_to_plot_edges() {
        let r = rect();
        assert_eq!(r.world_to_screen(-10.0, 0.0), vec2(100.0, 250.0));
        assert_eq!(r.world_to_screen(30.0, 20.0), vec2(500.0, 50.0));
        assert_eq!(r.world_to_screen(10.0, 10.0), vec2(300.0, 150.0));
    }

    #[test]
    fn axis_labels_drop_decimals_on_wide_spans() {
        assert_eq!(format_axis_value(12.346, 40.0), "12.35");
        assert_eq!(format_axis_value(123.46, 400.0), "123.5");
        assert_eq!(format_axis_value(1234.4, 4000.0), "1234");
    }
}
