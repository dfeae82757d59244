// --- File: cell.rs ---
use crate::color::Color;
use crate::grid::Grid;

/// Neighbor directions in the fixed clockwise order used for color averaging.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    pub const CLOCKWISE: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub alive: bool,
    pub color: Color,
}

impl Cell {
    pub fn new(x: usize, y: usize, alive: bool, color: Color) -> Self {
        Self { x, y, alive, color }
    }

    /// The eight wrapped neighbor positions of `(x, y)`, in `Direction::CLOCKWISE` order.
    /// On grids narrower or shorter than three cells some positions repeat.
    pub fn neighbor_coordinates(
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> [(usize, usize); 8] {
        let left = (x + width - 1) % width;
        let right = (x + 1) % width;
        let above = (y + height - 1) % height;
        let below = (y + 1) % height;

        Direction::CLOCKWISE.map(|dir| match dir {
            Direction::Up => (x, above),
            Direction::UpRight => (right, above),
            Direction::Right => (right, y),
            Direction::DownRight => (right, below),
            Direction::Down => (x, below),
            Direction::DownLeft => (left, below),
            Direction::Left => (left, y),
            Direction::UpLeft => (left, above),
        })
    }

    pub fn neighbors<'g>(&self, grid: &'g Grid) -> [&'g Cell; 8] {
        Self::neighbor_coordinates(self.x, self.y, grid.width(), grid.height())
            .map(|(nx, ny)| grid.lookup(nx, ny))
    }

    pub fn live_neighbor_count(&self, grid: &Grid) -> usize {
        self.neighbors(grid).iter().filter(|n| n.alive).count()
    }

    pub fn live_neighbor_colors(&self, grid: &Grid) -> Vec<Color> {
        self.neighbors(grid)
            .iter()
            .filter(|n| n.alive)
            .map(|n| n.color)
            .collect()
    }

    /// What the host should paint for this cell.
    pub fn display_color(&self, color_mode: bool) -> Color {
        match (color_mode, self.alive) {
            (true, _) => self.color,
            (false, true) => Color::WHITE,
            (false, false) => Color::BLACK,
        }
    }
}
// --- End of File: cell.rs ---
