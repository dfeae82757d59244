mod renderer;

use chromalife::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use chromalife::export;
use chromalife::{App, Command, Grid, LifeConfig, Outcome, Viewport};
use renderer::Renderer;
use std::{sync::Arc, time::Instant};
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{Key, KeyCode, PhysicalKey},
    window::WindowBuilder,
};

// --- Main Function ---
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = LifeConfig::new();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Chromalife")
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .build(&event_loop)?,
    );

    // The grid size is fixed from the first window size; later resizes only stretch the cells.
    let size = window.inner_size();
    let (grid_width, grid_height) = Viewport::new(size.width as f64, size.height as f64)
        .grid_dimensions(config.cell_size);
    log::info!(
        "Window {}x{} px, grid {}x{} cells of {} px",
        size.width,
        size.height,
        grid_width,
        grid_height,
        config.cell_size
    );
    let grid = Grid::new(grid_width, grid_height, config.clone());
    let mut renderer = pollster::block_on(Renderer::new(window.clone(), grid_width * grid_height))?;
    let mut app = App::new(grid, config);

    let mut cursor: Option<PhysicalPosition<f64>> = None;
    let mut next_tick = Instant::now();

    event_loop.run(move |event, elwt: &EventLoopWindowTarget<()>| match event {
        Event::AboutToWait => {
            let now = Instant::now();
            if now >= next_tick {
                if app.tick() {
                    log::debug!(
                        "Generation {}: {} alive",
                        app.grid.generation(),
                        app.grid.population()
                    );
                }
                window.request_redraw();
                next_tick = now + app.state.tick_interval();
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(next_tick));
        }
        Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(physical_size) => {
                renderer.resize(physical_size);
                window.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                renderer.resize(window.inner_size());
                window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => cursor = Some(position),
            WindowEvent::CursorLeft { .. } => cursor = None,
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(position) = cursor {
                    if app.click(position.x, position.y, renderer.viewport()) {
                        window.request_redraw();
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if key_event.state == ElementState::Pressed && !key_event.repeat {
                    let command = match key_event.physical_key {
                        PhysicalKey::Code(KeyCode::Escape) => Some(Command::Quit),
                        PhysicalKey::Code(KeyCode::Space) => Some(Command::TogglePause),
                        PhysicalKey::Code(KeyCode::ArrowUp) => Some(Command::FasterFrames),
                        PhysicalKey::Code(KeyCode::ArrowDown) => Some(Command::SlowerFrames),
                        _ => match &key_event.logical_key {
                            Key::Character(text) => Command::from_char(&text.to_lowercase()),
                            _ => None,
                        },
                    };
                    if let Some(command) = command {
                        match app.handle(command) {
                            Outcome::Redraw => window.request_redraw(),
                            Outcome::Export(label) => {
                                if let Err(e) = export::save_frame(
                                    &app.grid,
                                    app.state.color_mode,
                                    renderer.viewport(),
                                    &app.config.export_dir,
                                ) {
                                    log::error!("Snapshot {} failed: {}", label, e);
                                }
                            }
                            Outcome::Quit => elwt.exit(),
                            Outcome::Nothing => {}
                        }
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                match renderer.render(&app.grid, app.state.color_mode) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        renderer.reconfigure()
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("WGPU Error: OutOfMemory");
                        elwt.exit();
                    }
                    Err(e) => log::warn!("WGPU Error: {:?}", e),
                }
                let paused_text = if app.state.running { "" } else { " [PAUSED]" };
                window.set_title(&format!(
                    "Chromalife - Gen: {} - Alive: {} - {} fps{}{}",
                    app.grid.generation(),
                    app.grid.population(),
                    app.state.frame_rate(),
                    if app.state.color_mode { " - Color" } else { "" },
                    paused_text
                ));
            }
            _ => {}
        },
        _ => {}
    })?;
    Ok(())
}
