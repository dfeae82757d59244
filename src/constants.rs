// --- File: constants.rs ---
// --- Global Simulation Constants ---
use crate::color::Color;

// Side length of one cell in physical pixels; the grid size is derived from it once at startup.
pub const CELL_SIZE: f64 = 25.0;
pub const DEFAULT_LIFE_PROBABILITY: f64 = 0.3;

// Birth colors are sampled between these two endpoints.
pub const COLOR_SCALE_START: Color = Color::new(0x00, 0xf2, 0xf2);
pub const COLOR_SCALE_END: Color = Color::new(0x00, 0x75, 0xf2);

// HSL lightness below which a fading color is held constant.
pub const COLOR_LIGHTNESS_THRESHOLD: f32 = 0.1;
// Darkening amount applied to dead cells every generation (Lab L drops by LAB_KN * COLOR_FADE).
pub const COLOR_FADE: f32 = 0.15;
pub const LAB_KN: f32 = 18.0;

pub const INITIAL_FRAME_RATE: u32 = 8;
pub const MIN_FRAME_RATE: u32 = 1;
pub const MAX_FRAME_RATE: u32 = 60;

pub const WINDOW_WIDTH: u32 = 1000;
pub const WINDOW_HEIGHT: u32 = 700;
pub const EXPORT_DIR: &str = "snapshots";

// --- End of File: constants.rs ---
