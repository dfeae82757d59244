use chromalife::{App, Cell, Color, Command, Grid, LifeConfig, Outcome, Viewport, fingerprint};

fn bitmap(grid: &Grid) -> Vec<bool> {
    grid.cells().iter().map(|c| c.alive).collect()
}

#[test]
fn plus_on_a_three_by_three_torus_dies_out() {
    let mut grid = Grid::with_seed(3, 3, LifeConfig::default(), 2024);
    grid.seed_pattern(&[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]);
    assert_eq!(
        bitmap(&grid),
        vec![false, true, false, true, true, true, false, true, false]
    );

    // On a 3x3 torus every cell neighbors all eight others, so each cell sees
    // five live cells minus itself: live cells have 4 (die), dead ones 5 (stay dead).
    grid.step();
    assert_eq!(bitmap(&grid), vec![false; 9]);
    assert_eq!(grid.generation(), 1);

    // Former live cells start fading instead of snapping to black.
    let center = grid.lookup(1, 1);
    assert_ne!(center.color, Color::BLACK);
    assert_eq!(grid.lookup(0, 0).color, Color::BLACK);
}

#[test]
fn corner_neighbors_wrap_across_both_edges() {
    let (w, h) = (7, 5);
    let coords = Cell::neighbor_coordinates(0, 0, w, h);
    assert!(coords.contains(&(w - 1, h - 1)));
    assert!(coords.iter().all(|&(x, y)| x < w && y < h));

    let mut grid = Grid::with_seed(w, h, LifeConfig::default(), 5);
    grid.seed_pattern(&[(w - 1, h - 1)]);
    assert_eq!(grid.lookup(0, 0).live_neighbor_count(&grid), 1);
}

#[test]
fn identical_bitmaps_share_a_fingerprint() {
    let pattern = [(0, 0), (3, 1), (4, 4), (2, 2), (1, 3)];
    let mut a = Grid::with_seed(5, 5, LifeConfig::default(), 10);
    let mut b = Grid::with_seed(5, 5, LifeConfig::default(), 20);
    a.seed_pattern(&pattern);
    b.seed_pattern(&pattern);
    assert_eq!(a.state_id(), b.state_id());
    assert_eq!(a.state_id(), fingerprint(b.cells()));

    // Edits that restore the bitmap restore its fingerprint.
    b.paint(0, 0, Color::new(255, 0, 0));
    b.toggle(4, 4);
    b.toggle(4, 4);
    assert_eq!(fingerprint(a.cells()), fingerprint(b.cells()));
}

#[test]
fn glider_returns_to_its_shape_shifted_after_four_generations() {
    let mut grid = Grid::with_seed(8, 8, LifeConfig::default(), 1);
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    grid.seed_pattern(&glider);
    for _ in 0..4 {
        grid.step();
    }
    let mut expected = Grid::with_seed(8, 8, LifeConfig::default(), 1);
    expected.seed_pattern(&glider.map(|(x, y)| (x + 1, y + 1)));
    assert_eq!(bitmap(&grid), bitmap(&expected));
}

#[test]
fn glider_wraps_around_the_torus() {
    let mut grid = Grid::with_seed(8, 8, LifeConfig::default(), 1);
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    grid.seed_pattern(&glider);
    let start = bitmap(&grid);
    // One cell diagonally every four generations, so 32 generations is a full lap.
    for _ in 0..32 {
        grid.step();
    }
    assert_eq!(bitmap(&grid), start);
    assert_eq!(grid.population(), 5);
}

#[test]
fn session_from_startup_to_export_label() {
    let config = LifeConfig::default();
    let viewport = Viewport::new(250.0, 150.0);
    let (gw, gh) = viewport.grid_dimensions(config.cell_size);
    assert_eq!((gw, gh), (10, 6));

    let grid = Grid::with_seed(gw, gh, config.clone(), 77);
    let mut app = App::new(grid, config);
    let seeded_label = app.grid.describe_state(false);
    assert!(seeded_label.ends_with("G0C0"));

    app.handle(Command::TogglePause);
    for _ in 0..3 {
        app.tick();
    }
    app.handle(Command::TogglePause);
    app.click(10.0, 10.0, viewport);

    let state_id = app.grid.state_id();
    assert_eq!(
        app.handle(Command::Export),
        Outcome::Export(format!("S{}G3C0", state_id))
    );

    app.handle(Command::Clear);
    let cleared = app.grid.state_id();
    app.handle(Command::Clear);
    assert_eq!(app.grid.state_id(), cleared);
    assert_eq!(app.grid.describe_state(true), format!("S{}G0C1", cleared));
}
