pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

pub fn fixed_ratio_axis_window(raw_max_x: f64, raw_max_y: f64, ratio: f64) -> (f64, f64) {
    let raw_x_span = raw_max_x.max(1.0);
    let raw_y_span = raw_max_y.max(1.0);
    let x_pad = raw_x_span * X_PADDING_RATIO;
    let y_pad = raw_y_span * Y_PADDING_RATIO;

    let mut x_span = (raw_max_x + x_pad).max(1.0);
    let mut y_span = (raw_max_y + y_pad).max(1.0);

    if x_span / y_span < ratio {
        x_span = y_span * ratio;
    } else {
        y_span = x_span / ratio;
    }

    (x_span, y_span)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub world_max_x: f64,
    pub world_max_y: f64,
}

impl PlotArea {
    /// Screen y grows downward.
    pub fn world_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        let plot_w = (self.right - self.left).max(1.0);
        let plot_h = (self.bottom - self.top).max(1.0);
        let sx = self.left + (x / self.world_max_x.max(1.0)) * plot_w;
        let sy = self.bottom - (y / self.world_max_y.max(1.0)) * plot_h;
        (sx, sy)
    }
}

pub fn format_axis_value(value: f64, axis_max: f64) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}
