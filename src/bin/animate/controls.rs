use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::state::Viewer;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) start: bool,
    pub(crate) reset: bool,
    pub(crate) faster: bool,
    pub(crate) slower: bool,
    pub(crate) quit: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            start: self.start || other.start,
            reset: self.reset || other.reset,
            faster: self.faster || other.faster,
            slower: self.slower || other.slower,
            quit: self.quit || other.quit,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        start: is_key_pressed(KeyCode::Space),
        reset: is_key_pressed(KeyCode::R),
        faster: is_key_pressed(KeyCode::Up),
        slower: is_key_pressed(KeyCode::Down),
        quit: is_key_pressed(KeyCode::Escape),
    }
}

pub(crate) fn draw_control_panel(viewer: &Viewer) -> FrameActions {
    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(18.0, 120.0), vec2(300.0, 190.0))
        .label("Playback")
        .ui(&mut *root_ui(), |ui| {
            if ui.button(None, "Start / Restart (Space)") {
                actions.start = true;
            }
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
            if ui.button(None, "Faster (Up)") {
                actions.faster = true;
            }
            if ui.button(None, "Slower (Down)") {
                actions.slower = true;
            }
            ui.separator();
            ui.label(None, &format!("Speed: x{:.2}", viewer.speed));
            ui.label(
                None,
                if viewer.running {
                    "State: Running"
                } else {
                    "State: Stopped"
                },
            );
        });
    actions
}

/// Returns true when the window should close.
pub(crate) fn apply_actions(viewer: &mut Viewer, actions: FrameActions) -> bool {
    if actions.quit {
        return true;
    }
    if actions.reset {
        viewer.reset();
    }
    if actions.start {
        viewer.start();
    }
    if actions.faster {
        viewer.adjust_speed(1.0);
    }
    if actions.slower {
        viewer.adjust_speed(-1.0);
    }
    false
}
