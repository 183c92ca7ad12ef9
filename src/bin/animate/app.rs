use kinematics_rust::config::Config;
use macroquad::prelude::*;
use tracing::warn;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, GRID_COLOR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    LEFT_MARGIN, MSAA_SAMPLES, PATH_COLOR, PREVIEW_COLOR, RIGHT_MARGIN, TOP_MARGIN,
    UI_FONT_PATH,
};
use crate::controls::{apply_actions, draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::{Canvas, draw_axis_tick_labels, draw_grid, draw_object, draw_path};
use crate::state::{Mode, Subject, Viewer};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Kinematics Viewer".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run(mode: Mode, config: Config) {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!(path = UI_FONT_PATH, %err, "falling back to the default font");
            None
        }
    };

    let mut viewer = Viewer::new(&mode, &config);
    let y_label = match viewer.subject {
        Some(Subject::Motion(_)) => "Offset (m)",
        _ => "Height (m)",
    };

    loop {
        let frame_dt = get_frame_time() as f64;
        let screen_w = screen_width();
        let screen_h = screen_height();

        let actions = hotkey_actions().merge(draw_control_panel(&viewer));
        if apply_actions(&mut viewer, actions) {
            break;
        }
        viewer.advance(frame_dt);

        let (left, right) = (LEFT_MARGIN, screen_w - RIGHT_MARGIN);
        let (top, bottom) = (TOP_MARGIN, screen_h - BOTTOM_MARGIN);
        let window = viewer.world_window((right - left) as f64, (bottom - top) as f64);
        let canvas = Canvas::new(left, right, top, bottom, window);

        clear_background(BACKGROUND);
        draw_grid(&canvas, GRID_COLOR);
        draw_axis_tick_labels(&canvas, y_label, ui_font.as_ref());
        draw_path(&canvas, &viewer.preview, 2.0, PREVIEW_COLOR);
        draw_path(&canvas, &viewer.trail, 3.0, PATH_COLOR);

        match viewer.frame {
            Some(frame) => draw_object(&canvas, frame.x, frame.y),
            None => {
                let start_y = match viewer.subject {
                    Some(Subject::Flight(playback)) => playback.solution.inputs.height_m,
                    _ => 0.0,
                };
                draw_object(&canvas, 0.0, start_y);
            }
        }

        draw_hud(&viewer, &canvas, screen_h, ui_font.as_ref());
        next_frame().await;
    }
}
