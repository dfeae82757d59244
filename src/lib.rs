pub mod app;
pub mod cell;
pub mod color;
pub mod config;
pub mod constants;
pub mod export;
pub mod grid;

pub use app::{App, AppState, Command, Outcome, Viewport};
pub use cell::{Cell, Direction};
pub use color::{Color, ColorScale};
pub use config::LifeConfig;
pub use grid::{Grid, fingerprint};
