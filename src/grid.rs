// --- File: grid.rs ---
use crate::cell::Cell;
use crate::color::Color;
use crate::config::LifeConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type GridRng = StdRng;

/// A toroidal Game of Life board whose live cells carry colors.
///
/// Cells are stored row-major (`y * width + x`). Each call to [`Grid::step`]
/// builds a complete new generation from the current one before swapping it
/// in, so no cell ever observes a half-updated neighborhood.
pub struct Grid {
    width: usize,
    height: usize,
    generation: u64,
    cells: Vec<Cell>,
    state_id: i32,
    config: LifeConfig,
    rng: GridRng,
}

impl Grid {
    pub fn new(width: usize, height: usize, config: LifeConfig) -> Self {
        Self::with_rng(width, height, config, GridRng::from_entropy())
    }

    /// Like [`Grid::new`] but every random draw is reproducible.
    pub fn with_seed(width: usize, height: usize, config: LifeConfig, seed: u64) -> Self {
        Self::with_rng(width, height, config, GridRng::seed_from_u64(seed))
    }

    fn with_rng(width: usize, height: usize, config: LifeConfig, rng: GridRng) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {}x{}",
            width,
            height
        );
        let probability = config.life_probability;
        let mut grid = Self {
            width,
            height,
            generation: 0,
            cells: Vec::with_capacity(width * height),
            state_id: 0,
            config,
            rng,
        };
        grid.randomize(probability);
        log::info!(
            "Created {}x{} grid ({} cells), state {}",
            width,
            height,
            width * height,
            grid.state_id
        );
        grid
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) outside {}x{} grid; wrap coordinates before lookup",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Coordinates must already be wrapped into range.
    #[inline]
    pub fn lookup(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    /// Re-seeds every cell: alive with the given probability, colored from the
    /// scale when alive and black otherwise. Resets the generation counter.
    pub fn randomize(&mut self, probability: f64) {
        let probability = if probability.is_nan() {
            log::warn!("Life probability is NaN, treating it as 0");
            0.0
        } else if !(0.0..=1.0).contains(&probability) {
            let clamped = probability.clamp(0.0, 1.0);
            log::warn!("Life probability {} out of range, clamped to {}", probability, clamped);
            clamped
        } else {
            probability
        };

        let scale = self.config.color_scale;
        self.cells.clear();
        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.rng.gen_range(0.0..1.0) < probability;
                let color = if alive {
                    scale.sample_random(&mut self.rng)
                } else {
                    Color::BLACK
                };
                self.cells.push(Cell::new(x, y, alive, color));
            }
        }

        self.generation = 0;
        self.refresh_state_id();
        log::debug!(
            "Randomized with p={:.2}: {} alive, state {}",
            probability,
            self.population(),
            self.state_id
        );
    }

    /// Kills every cell. The host is expected to pause after clearing.
    pub fn clear(&mut self) {
        self.randomize(0.0);
    }

    /// Replaces the board with exactly the given live cells (wrapped into range).
    pub fn seed_pattern(&mut self, alive: &[(usize, usize)]) {
        let scale = self.config.color_scale;
        for cell in &mut self.cells {
            cell.alive = false;
            cell.color = Color::BLACK;
        }
        for &(x, y) in alive {
            let index = (y % self.height) * self.width + (x % self.width);
            let cell = &mut self.cells[index];
            if !cell.alive {
                cell.alive = true;
                cell.color = scale.sample_random(&mut self.rng);
            }
        }
        self.generation = 0;
        self.refresh_state_id();
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        let scale = self.config.color_scale;
        let mut next = Vec::with_capacity(self.cells.len());

        for cell in &self.cells {
            let live_neighbors = cell.live_neighbor_count(self);
            let next_alive = if cell.alive {
                live_neighbors == 2 || live_neighbors == 3
            } else {
                live_neighbors == 3
            };

            let next_color = match (cell.alive, next_alive) {
                (true, true) => {
                    let colors = cell.live_neighbor_colors(self);
                    // Survival needs two or three live neighbors.
                    debug_assert!(!colors.is_empty(), "surviving cell without live neighbors");
                    Color::average(&colors).unwrap_or(cell.color)
                }
                (false, true) => scale.sample_random(&mut self.rng),
                _ => self.decay(cell.color),
            };

            next.push(Cell::new(cell.x, cell.y, next_alive, next_color));
        }

        self.cells = next;
        self.generation += 1;
        log::trace!("Generation {}: {} alive", self.generation, self.population());
    }

    /// Fades a color toward black, holding it once it reaches the lightness floor.
    fn decay(&self, color: Color) -> Color {
        let floor = self.config.lightness_threshold;
        if color.lightness() < floor {
            return color;
        }
        let darker = color.darken(self.config.color_fade);
        if darker.lightness() < floor {
            color
        } else {
            darker
        }
    }

    /// Flips one cell. Leaves the generation and state id untouched, so the
    /// exported label does not reflect manual edits.
    pub fn toggle(&mut self, x: usize, y: usize) {
        let index = self.index(x, y);
        let color = if self.cells[index].alive {
            Color::BLACK
        } else {
            self.config.color_scale.sample_random(&mut self.rng)
        };
        let cell = &mut self.cells[index];
        cell.alive = !cell.alive;
        cell.color = color;
    }

    /// Overwrites the color of a live cell. Returns false for a dead cell.
    pub fn paint(&mut self, x: usize, y: usize, color: Color) -> bool {
        let index = self.index(x, y);
        let cell = &mut self.cells[index];
        if !cell.alive {
            return false;
        }
        cell.color = color;
        true
    }

    /// Snapshot label: `S<state id>G<generation>C<color mode>`.
    pub fn describe_state(&self, color_mode: bool) -> String {
        format!(
            "S{}G{}C{}",
            self.state_id,
            self.generation,
            if color_mode { '1' } else { '0' }
        )
    }

    fn refresh_state_id(&mut self) {
        self.state_id = fingerprint(&self.cells);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn state_id(&self) -> i32 {
        self.state_id
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }
}

/// 32-bit rolling hash (`h = h * 31 + c`, wrapping) over the row-major
/// string of `'1'` for alive and `'0'` for dead cells.
pub fn fingerprint(cells: &[Cell]) -> i32 {
    cells.iter().fold(0i32, |h, cell| {
        let c = if cell.alive { '1' } else { '0' };
        h.wrapping_mul(31).wrapping_add(c as i32)
    })
}
// --- End of File: grid.rs ---
