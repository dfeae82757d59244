// --- File: app.rs ---
use crate::config::LifeConfig;
use crate::constants::{MAX_FRAME_RATE, MIN_FRAME_RATE};
use crate::grid::Grid;
use std::time::Duration;

/// UI flags owned by the host, not by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    pub running: bool,
    pub color_mode: bool,
    frame_rate: u32,
}

impl AppState {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            running: false,
            color_mode: false,
            frame_rate: frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE),
        }
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    pub fn adjust_frame_rate(&mut self, increase: bool) {
        self.frame_rate = if increase {
            (self.frame_rate + 1).min(MAX_FRAME_RATE)
        } else {
            self.frame_rate.saturating_sub(1).max(MIN_FRAME_RATE)
        };
        log::info!("Frame rate: {} fps", self.frame_rate);
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate as f64)
    }
}

/// Size of the drawing surface in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// How many whole cells of `cell_size` fit, never less than one per axis.
    pub fn grid_dimensions(&self, cell_size: f64) -> (usize, usize) {
        let columns = (self.width / cell_size).floor().max(1.0) as usize;
        let rows = (self.height / cell_size).floor().max(1.0) as usize;
        (columns, rows)
    }

    /// Cell under a pointer position, or `None` outside the viewport.
    pub fn cell_at(
        &self,
        pointer_x: f64,
        pointer_y: f64,
        grid_width: usize,
        grid_height: usize,
    ) -> Option<(usize, usize)> {
        if !(0.0..self.width).contains(&pointer_x) || !(0.0..self.height).contains(&pointer_y) {
            return None;
        }
        let cell_w = self.width / grid_width as f64;
        let cell_h = self.height / grid_height as f64;
        let x = ((pointer_x / cell_w).floor() as usize).min(grid_width - 1);
        let y = ((pointer_y / cell_h).floor() as usize).min(grid_height - 1);
        Some((x, y))
    }

    /// Top-left corner and size of the rectangle drawn for cell `(x, y)`.
    pub fn cell_rect(
        &self,
        x: usize,
        y: usize,
        grid_width: usize,
        grid_height: usize,
    ) -> ([f32; 2], [f32; 2]) {
        let cell_w = self.width / grid_width as f64;
        let cell_h = self.height / grid_height as f64;
        (
            [(x as f64 * cell_w) as f32, (y as f64 * cell_h) as f32],
            [cell_w as f32, cell_h as f32],
        )
    }
}

/// Discrete user commands, decoupled from any particular key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Export,
    FasterFrames,
    SlowerFrames,
    ToggleColorMode,
    Clear,
    Randomize,
    Step,
    Quit,
}

impl Command {
    /// Maps a typed character to a command.
    pub fn from_char(key: &str) -> Option<Self> {
        match key {
            "p" => Some(Command::TogglePause),
            "s" => Some(Command::Export),
            "+" | "=" => Some(Command::FasterFrames),
            "-" => Some(Command::SlowerFrames),
            "c" => Some(Command::ToggleColorMode),
            "d" => Some(Command::Clear),
            "r" => Some(Command::Randomize),
            "n" => Some(Command::Step),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Nothing,
    Redraw,
    /// Host should save the current frame under this label.
    Export(String),
    Quit,
}

/// Ties the grid to the host-owned flags and applies user commands.
pub struct App {
    pub grid: Grid,
    pub state: AppState,
    pub config: LifeConfig,
}

impl App {
    pub fn new(grid: Grid, config: LifeConfig) -> Self {
        let state = AppState::new(config.initial_frame_rate);
        Self { grid, state, config }
    }

    /// Called once per timer tick. Returns true if a generation was computed.
    pub fn tick(&mut self) -> bool {
        if !self.state.running {
            return false;
        }
        self.grid.step();
        true
    }

    pub fn handle(&mut self, command: Command) -> Outcome {
        match command {
            Command::TogglePause => {
                self.state.running = !self.state.running;
                log::info!(
                    "Simulation {} at generation {}",
                    if self.state.running { "resumed" } else { "paused" },
                    self.grid.generation()
                );
                Outcome::Redraw
            }
            Command::Export => {
                if self.state.running {
                    log::warn!("Pause the simulation before exporting a snapshot");
                    Outcome::Nothing
                } else {
                    Outcome::Export(self.grid.describe_state(self.state.color_mode))
                }
            }
            Command::FasterFrames => {
                self.state.adjust_frame_rate(true);
                Outcome::Nothing
            }
            Command::SlowerFrames => {
                self.state.adjust_frame_rate(false);
                Outcome::Nothing
            }
            Command::ToggleColorMode => {
                self.state.color_mode = !self.state.color_mode;
                Outcome::Redraw
            }
            Command::Clear => {
                self.grid.clear();
                self.state.running = false;
                log::info!("Cleared grid, simulation paused");
                Outcome::Redraw
            }
            Command::Randomize => {
                self.grid.randomize(self.config.life_probability);
                log::info!(
                    "Randomized grid: {} alive, state {}",
                    self.grid.population(),
                    self.grid.state_id()
                );
                Outcome::Redraw
            }
            Command::Step => {
                if self.state.running {
                    Outcome::Nothing
                } else {
                    self.grid.step();
                    Outcome::Redraw
                }
            }
            Command::Quit => Outcome::Quit,
        }
    }

    /// Toggles the cell under the pointer. Returns true if a cell changed.
    pub fn click(&mut self, pointer_x: f64, pointer_y: f64, viewport: Viewport) -> bool {
        match viewport.cell_at(pointer_x, pointer_y, self.grid.width(), self.grid.height()) {
            Some((x, y)) => {
                self.grid.toggle(x, y);
                true
            }
            None => false,
        }
    }
}
// --- End of File: app.rs ---

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let config = LifeConfig::default();
        let grid = Grid::with_seed(8, 6, config.clone(), 17);
        App::new(grid, config)
    }

    #[test]
    fn grid_dimensions_floor_the_viewport() {
        let viewport = Viewport::new(1000.0, 660.0);
        assert_eq!(viewport.grid_dimensions(25.0), (40, 26));
        assert_eq!(Viewport::new(10.0, 10.0).grid_dimensions(25.0), (1, 1));
    }

    #[test]
    fn pointer_maps_to_cells() {
        let viewport = Viewport::new(200.0, 100.0);
        assert_eq!(viewport.cell_at(0.0, 0.0, 8, 4), Some((0, 0)));
        assert_eq!(viewport.cell_at(24.9, 24.9, 8, 4), Some((0, 0)));
        assert_eq!(viewport.cell_at(25.0, 50.0, 8, 4), Some((1, 2)));
        assert_eq!(viewport.cell_at(199.9, 99.9, 8, 4), Some((7, 3)));
        assert_eq!(viewport.cell_at(200.0, 10.0, 8, 4), None);
        assert_eq!(viewport.cell_at(-1.0, 10.0, 8, 4), None);
    }

    #[test]
    fn cell_rect_tiles_the_viewport() {
        let viewport = Viewport::new(200.0, 100.0);
        assert_eq!(viewport.cell_rect(3, 1, 8, 4), ([75.0, 25.0], [25.0, 25.0]));
    }

    #[test]
    fn frame_rate_is_clamped() {
        let mut state = AppState::new(59);
        state.adjust_frame_rate(true);
        state.adjust_frame_rate(true);
        assert_eq!(state.frame_rate(), MAX_FRAME_RATE);

        let mut state = AppState::new(2);
        state.adjust_frame_rate(false);
        state.adjust_frame_rate(false);
        assert_eq!(state.frame_rate(), MIN_FRAME_RATE);
        assert_eq!(AppState::new(0).frame_rate(), MIN_FRAME_RATE);
        assert_eq!(AppState::new(8).tick_interval(), Duration::from_millis(125));
    }

    #[test]
    fn tick_only_steps_while_running() {
        let mut app = app();
        assert!(!app.tick());
        assert_eq!(app.grid.generation(), 0);
        app.handle(Command::TogglePause);
        assert!(app.tick());
        assert!(app.tick());
        assert_eq!(app.grid.generation(), 2);
    }

    #[test]
    fn clear_pauses_the_simulation() {
        let mut app = app();
        app.handle(Command::TogglePause);
        app.tick();
        assert_eq!(app.handle(Command::Clear), Outcome::Redraw);
        assert!(!app.state.running);
        assert_eq!(app.grid.population(), 0);
        assert_eq!(app.grid.generation(), 0);
    }

    #[test]
    fn export_requires_a_paused_simulation() {
        let mut app = app();
        app.handle(Command::TogglePause);
        assert_eq!(app.handle(Command::Export), Outcome::Nothing);
        app.handle(Command::TogglePause);
        app.handle(Command::ToggleColorMode);
        let expected = format!("S{}G0C1", app.grid.state_id());
        assert_eq!(app.handle(Command::Export), Outcome::Export(expected));
    }

    #[test]
    fn single_step_only_when_paused() {
        let mut app = app();
        assert_eq!(app.handle(Command::Step), Outcome::Redraw);
        assert_eq!(app.grid.generation(), 1);
        app.handle(Command::TogglePause);
        assert_eq!(app.handle(Command::Step), Outcome::Nothing);
        assert_eq!(app.grid.generation(), 1);
    }

    #[test]
    fn click_toggles_the_cell_under_the_pointer() {
        let mut app = app();
        app.handle(Command::Clear);
        let viewport = Viewport::new(80.0, 60.0);
        assert!(app.click(35.0, 15.0, viewport));
        assert!(app.grid.lookup(3, 1).alive);
        assert!(!app.click(90.0, 15.0, viewport));
        assert_eq!(app.grid.population(), 1);
    }

    #[test]
    fn key_characters_map_to_commands() {
        assert_eq!(Command::from_char("p"), Some(Command::TogglePause));
        assert_eq!(Command::from_char("+"), Some(Command::FasterFrames));
        assert_eq!(Command::from_char("d"), Some(Command::Clear));
        assert_eq!(Command::from_char("x"), None);
    }
}
