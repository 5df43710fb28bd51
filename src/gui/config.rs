use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const BOARD_HEIGHT: usize = 25;
    pub const BOARD_WIDTH: usize = 25;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 220.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(0, 0xff, 0xff);
    pub const DEAD_COLOR: Color32 = Color32::BLACK;

    pub const MAX_FPS: f64 = 60.;
}
