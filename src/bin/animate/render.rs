use kinematics_rust::core::playback::grid_ticks;
use kinematics_rust::core::window::{PlotArea, format_axis_value};
use macroquad::prelude::*;

use crate::constants::{OBJECT_COLOR, OBJECT_RADIUS};
use crate::state::WorldWindow;

#[derive(Clone, Copy)]
pub(crate) struct Canvas {
    pub(crate) area: PlotArea,
    pub(crate) window: WorldWindow,
}

impl Canvas {
    pub(crate) fn new(left: f32, right: f32, top: f32, bottom: f32, window: WorldWindow) -> Self {
        Self {
            area: PlotArea {
                left: left as f64,
                right: right as f64,
                top: top as f64,
                bottom: bottom as f64,
                world_max_x: window.span_x,
                world_max_y: window.span_y,
            },
            window,
        }
    }

    pub(crate) fn to_screen(&self, x: f64, y: f64) -> Vec2 {
        let (sx, sy) = self.area.world_to_screen(x - self.window.min_x, y);
        vec2(sx as f32, sy as f32)
    }

    fn left(&self) -> f32 {
        self.area.left as f32
    }

    fn right(&self) -> f32 {
        self.area.right as f32
    }

    fn top(&self) -> f32 {
        self.area.top as f32
    }

    fn bottom(&self) -> f32 {
        self.area.bottom as f32
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

pub(crate) fn draw_grid(canvas: &Canvas, color: Color) {
    let (left, right, top, bottom) = (canvas.left(), canvas.right(), canvas.top(), canvas.bottom());
    let window = canvas.window;
    for x in grid_ticks(window.min_x, window.span_x) {
        let sx = canvas.to_screen(x, 0.0).x;
        draw_line(sx, top, sx, bottom, 1.0, color);
    }
    for y in grid_ticks(0.0, window.span_y) {
        let sy = canvas.to_screen(window.min_x, y).y;
        draw_line(left, sy, right, sy, 1.0, color);
    }
    draw_line(left, bottom, right, bottom, 2.0, DARKGRAY);
    draw_line(left, top, left, bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(canvas: &Canvas, y_label: &str, font: Option<&Font>) {
    let (left, right, top, bottom) = (canvas.left(), canvas.right(), canvas.top(), canvas.bottom());
    let window = canvas.window;
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;
    let x_extent = window.span_x.max(window.min_x.abs());

    for value in grid_ticks(window.min_x, window.span_x) {
        let x = canvas.to_screen(value, 0.0).x;
        let label = format_axis_value(value, x_extent);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for value in grid_ticks(0.0, window.span_y) {
        let y = canvas.to_screen(window.min_x, value).y;
        let label = format_axis_value(value, window.span_y);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    draw_ui_text(
        "Distance (m)",
        right - 130.0,
        bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text(y_label, left + 10.0, top - 8.0, 18, label_color, font);
}

pub(crate) fn draw_path(canvas: &Canvas, points: &[(f64, f64)], thickness: f32, color: Color) {
    let mut screen = points.iter().map(|&(x, y)| canvas.to_screen(x, y));
    let Some(mut prev) = screen.next() else {
        return;
    };
    for cur in screen {
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        prev = cur;
    }
}

pub(crate) fn draw_object(canvas: &Canvas, x: f64, y: f64) {
    let at = canvas.to_screen(x, y);
    draw_circle(at.x, at.y, OBJECT_RADIUS, OBJECT_COLOR);
    draw_circle_lines(
        at.x,
        at.y,
        OBJECT_RADIUS,
        2.0,
        Color::from_rgba(121, 28, 28, 255),
    );
}
