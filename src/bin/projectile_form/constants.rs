use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 760;
pub const MSAA_SAMPLES: i32 = 4;
pub const WINDOW_TITLE: &str = "Projectile Motion Simulator";
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const PANEL_X: f32 = 18.0;
pub const PANEL_Y: f32 = 18.0;
pub const PANEL_W: f32 = 360.0;
pub const PANEL_H: f32 = 330.0;

pub const DIALOG_W: f32 = 380.0;
pub const DIALOG_H: f32 = 130.0;

pub const LEFT_MARGIN: f32 = 470.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 70.0;
pub const BOTTOM_MARGIN: f32 = 80.0;

pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 5;

pub const BACKGROUND: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.91, 0.93, 1.0);
pub const LABEL_COLOR: Color = Color::new(0.41, 0.44, 0.49, 1.0);
pub const TITLE_COLOR: Color = Color::new(0.12, 0.12, 0.14, 1.0);
pub const CURVE_COLOR: Color = Color::new(0.12, 0.47, 0.71, 1.0);
