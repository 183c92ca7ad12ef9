use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 120.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 140.0;
pub const BOTTOM_MARGIN: f32 = 130.0;

pub const TITLE_Y: f32 = 46.0;
pub const CONTROLS_Y: f32 = 92.0;
pub const OBJECT_RADIUS: f32 = 9.0;

/// Open-ended straight-line motion stops here.
pub const MAX_SIM_TIME_S: f64 = 60.0;
pub const SPEED_STEP: f64 = 0.25;
pub const MIN_SPEED: f64 = 0.25;
pub const MAX_SPEED: f64 = 5.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.984, 0.992, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.906, 0.925, 1.0);
pub const PATH_COLOR: Color = Color::new(0.212, 0.482, 0.961, 1.0);
pub const PREVIEW_COLOR: Color = Color::new(0.212, 0.482, 0.961, 0.3);
pub const OBJECT_COLOR: Color = Color::new(0.961, 0.349, 0.349, 1.0);
