// --- File: export.rs ---
use crate::app::Viewport;
use crate::grid::Grid;
use image::RgbImage;
use rayon::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Image(image::ImageError),
    EmptyFrame,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "could not prepare export directory: {}", e),
            ExportError::Image(e) => write!(f, "could not write snapshot: {}", e),
            ExportError::EmptyFrame => write!(f, "viewport has no pixels to export"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            ExportError::Image(e) => Some(e),
            ExportError::EmptyFrame => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<image::ImageError> for ExportError {
    fn from(e: image::ImageError) -> Self {
        ExportError::Image(e)
    }
}

/// Rasterizes the grid the same way the window draws it: one flat rectangle
/// per cell, stretched to fill `width` x `height` pixels.
pub fn render_frame(grid: &Grid, color_mode: bool, width: u32, height: u32) -> RgbImage {
    let w = width as usize;
    let h = height as usize;
    let (gw, gh) = (grid.width(), grid.height());
    let mut rgb = vec![0u8; w * h * 3];

    if w > 0 {
        rgb.par_chunks_mut(w * 3)
            .enumerate()
            .for_each(|(py, row)| {
                let cy = (py * gh / h).min(gh - 1);
                for px in 0..w {
                    let cx = (px * gw / w).min(gw - 1);
                    let color = grid.lookup(cx, cy).display_color(color_mode);
                    row[px * 3..px * 3 + 3].copy_from_slice(&[color.r, color.g, color.b]);
                }
            });
    }

    // The buffer length always matches the dimensions.
    RgbImage::from_raw(width, height, rgb).unwrap_or_else(|| RgbImage::new(width, height))
}

/// Writes `<dir>/<label>.png` for the current frame and returns its path.
pub fn save_frame(
    grid: &Grid,
    color_mode: bool,
    viewport: Viewport,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let width = viewport.width.floor() as u32;
    let height = viewport.height.floor() as u32;
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyFrame);
    }

    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.png", grid.describe_state(color_mode)));
    render_frame(grid, color_mode, width, height).save(&path)?;
    log::info!("Saved snapshot {}", path.display());
    Ok(path)
}
// --- End of File: export.rs ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::config::LifeConfig;

    fn grid_with_corner() -> Grid {
        let mut grid = Grid::with_seed(4, 2, LifeConfig::default(), 3);
        grid.seed_pattern(&[(0, 0)]);
        grid
    }

    #[test]
    fn frame_has_one_rectangle_per_cell() {
        let grid = grid_with_corner();
        let frame = render_frame(&grid, false, 40, 20);
        assert_eq!(frame.dimensions(), (40, 20));
        assert_eq!(frame.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(frame.get_pixel(9, 9).0, [255, 255, 255]);
        assert_eq!(frame.get_pixel(10, 0).0, [0, 0, 0]);
        assert_eq!(frame.get_pixel(0, 10).0, [0, 0, 0]);
    }

    #[test]
    fn color_mode_uses_cell_colors() {
        let grid = grid_with_corner();
        let Color { r, g, b } = grid.lookup(0, 0).color;
        let frame = render_frame(&grid, true, 8, 4);
        assert_eq!(frame.get_pixel(1, 1).0, [r, g, b]);
    }

    #[test]
    fn save_writes_a_png_named_after_the_state() {
        let grid = grid_with_corner();
        let dir = std::env::temp_dir().join(format!("chromalife-export-{}", std::process::id()));
        let path = save_frame(&grid, true, Viewport::new(40.0, 20.0), &dir).unwrap();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(format!("{}.png", grid.describe_state(true)).as_str())
        );
        let reloaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(reloaded.dimensions(), (40, 20));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_viewport_is_rejected() {
        let grid = grid_with_corner();
        let result = save_frame(&grid, false, Viewport::new(0.0, 10.0), Path::new("unused"));
        assert!(matches!(result, Err(ExportError::EmptyFrame)));
    }
}
