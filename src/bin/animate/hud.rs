use macroquad::prelude::*;

use crate::constants::{CONTROLS_Y, TITLE_Y};
use crate::render::{Canvas, draw_ui_text};
use crate::state::Viewer;

pub(crate) fn draw_hud(viewer: &Viewer, canvas: &Canvas, screen_h: f32, font: Option<&Font>) {
    draw_header_block(viewer, canvas, font);
    draw_report_block(viewer, canvas, font);
    draw_status_block(viewer, canvas, screen_h, font);
    if let Some(frame) = viewer.frame.filter(|f| f.finished) {
        draw_landing_label(canvas, frame.x, font);
    }
}

fn draw_header_block(viewer: &Viewer, canvas: &Canvas, font: Option<&Font>) {
    let left = canvas.area.left as f32;
    draw_ui_text(
        &format!("Kinematics - {}", viewer.title),
        left,
        TITLE_Y,
        30,
        Color::from_rgba(30, 30, 35, 255),
        font,
    );
    draw_ui_text(
        "Space: start/restart | R: reset | Up/Down: speed | Esc: quit",
        left,
        CONTROLS_Y,
        20,
        DARKGRAY,
        font,
    );
}

fn draw_report_block(viewer: &Viewer, canvas: &Canvas, font: Option<&Font>) {
    let right = canvas.area.right as f32;
    let top = canvas.area.top as f32;
    let x = right - 260.0;
    let mut y = top + 24.0;

    draw_ui_text(&viewer.report.title, x, y, 20, BLACK, font);
    for row in &viewer.report.rows {
        y += 22.0;
        draw_ui_text(
            &format!("{:>5} = {} {}", row.symbol, row.text, row.unit),
            x,
            y,
            18,
            DARKGRAY,
            font,
        );
    }
}

fn draw_status_block(viewer: &Viewer, canvas: &Canvas, screen_h: f32, font: Option<&Font>) {
    let left = canvas.area.left as f32;
    let time_s = viewer.frame.map_or(0.0, |f| f.time_s);
    draw_ui_text(
        &format!("t = {time_s:.2} s | speed x{:.2}", viewer.speed),
        left,
        screen_h - 70.0,
        20,
        DARKGRAY,
        font,
    );

    let status_color = if viewer.subject.is_none() {
        Color::from_rgba(185, 28, 28, 255)
    } else {
        Color::from_rgba(30, 30, 35, 255)
    };
    let status = match (&viewer.refusal, viewer.status_line.as_str()) {
        (Some(refusal), "Ready") => refusal.as_str(),
        (_, line) => line,
    };
    draw_ui_text(status, left, screen_h - 40.0, 20, status_color, font);
}

fn draw_landing_label(canvas: &Canvas, x: f64, font: Option<&Font>) {
    let label = format!("{x:.2} m");
    let size = measure_text(&label, font, 18, 1.0);
    let at = canvas.to_screen(x, 0.0);
    let left = canvas.area.left as f32;
    let right = canvas.area.right as f32;
    let label_x = (at.x - size.width * 0.5).clamp(left + 4.0, (right - size.width - 4.0).max(left + 4.0));
    draw_ui_text(&label, label_x, at.y - 12.0, 18, DARKGRAY, font);
}
