//! Rendu PNG de la grille.
//!
//! The renderer draws straight into an RGB8 buffer: solid cell fills, black
//! grid lines on every row/column boundary, and scaled bitmap glyphs for the
//! robot and goal labels. Row 0 is rendered at the top of the image.

use crate::scenario::Scenario;
use crate::types::{CellType, GridError};
use std::path::Path;

/// Side of one grid cell in pixels. A 5x5 grid renders at 604 px, close to
/// the 300 DPI output of the reference figures.
const CELL_PX: u32 = 120;
/// Width of the grid lines.
const LINE_PX: u32 = 4;
/// Pixel size of one bit of the 5x7 label glyphs.
const GLYPH_SCALE: u32 = 12;

struct Palette;
impl Palette {
    const EMPTY: [u8; 3] = [255, 255, 255];
    const ROBOT: [u8; 3] = [0, 0, 255];
    const GOAL: [u8; 3] = [255, 0, 0];
    const OBSTACLE: [u8; 3] = [0, 0, 0];
    const LINE: [u8; 3] = [0, 0, 0];
    const LABEL: [u8; 3] = [255, 255, 255];
}

/// 5x7 glyphs for the two cell labels. Each row's lower 5 bits are pixels,
/// MSB on the left.
const GLYPH_R: [u8; 7] = [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11];
const GLYPH_G: [u8; 7] = [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F];

pub struct GridRenderer {
    grid_size: usize,
    size_px: u32,
    buf: Vec<u8>, // RGB8: size_px * size_px * 3
}

impl GridRenderer {
    pub fn new(grid_size: usize) -> Self {
        let size_px = grid_size as u32 * CELL_PX + LINE_PX;
        Self {
            grid_size,
            size_px,
            buf: vec![0u8; (size_px * size_px * 3) as usize],
        }
    }

    /// Image side length in pixels.
    pub fn size_px(&self) -> u32 {
        self.size_px
    }

    pub fn render(&mut self, scenario: &Scenario) -> &[u8] {
        // Grid lines first: cell interiors are painted over the line color,
        // leaving LINE_PX of black on every boundary.
        self.clear(Palette::LINE);

        for row in 0..self.grid_size {
            for col in 0..self.grid_size {
                match scenario.cell(row, col) {
                    CellType::Robot => {
                        self.fill_cell(row, col, Palette::ROBOT);
                        self.draw_label(row, col, GLYPH_R);
                    }
                    CellType::Goal => {
                        self.fill_cell(row, col, Palette::GOAL);
                        self.draw_label(row, col, GLYPH_G);
                    }
                    CellType::Obstacle => self.fill_cell(row, col, Palette::OBSTACLE),
                    CellType::Empty => self.fill_cell(row, col, Palette::EMPTY),
                }
            }
        }

        &self.buf
    }

    // --- Primitives ---

    #[inline]
    fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
        if x < self.size_px && y < self.size_px {
            let idx = ((y * self.size_px + x) * 3) as usize;
            self.buf[idx..idx + 3].copy_from_slice(&color);
        }
    }

    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: [u8; 3]) {
        for dy in 0..h {
            for dx in 0..w {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    fn clear(&mut self, color: [u8; 3]) {
        for chunk in self.buf.chunks_exact_mut(3) {
            chunk.copy_from_slice(&color);
        }
    }

    /// Interior of cell (row, col), inside its grid lines. Row 0 at the top.
    fn fill_cell(&mut self, row: usize, col: usize, color: [u8; 3]) {
        let x = col as u32 * CELL_PX + LINE_PX;
        let y = row as u32 * CELL_PX + LINE_PX;
        self.fill_rect(x, y, CELL_PX - LINE_PX, CELL_PX - LINE_PX, color);
    }

    /// White glyph centered in the cell interior.
    fn draw_label(&mut self, row: usize, col: usize, glyph: [u8; 7]) {
        let interior = CELL_PX - LINE_PX;
        let x0 = col as u32 * CELL_PX + LINE_PX + (interior - 5 * GLYPH_SCALE) / 2;
        let y0 = row as u32 * CELL_PX + LINE_PX + (interior - 7 * GLYPH_SCALE) / 2;

        for (gy, &bits) in glyph.iter().enumerate() {
            for gx in 0..5u32 {
                if bits & (0x10 >> gx) != 0 {
                    self.fill_rect(
                        x0 + gx * GLYPH_SCALE,
                        y0 + gy as u32 * GLYPH_SCALE,
                        GLYPH_SCALE,
                        GLYPH_SCALE,
                        Palette::LABEL,
                    );
                }
            }
        }
    }
}

/// Render the scenario and save it as a PNG at `path`.
pub fn save_image(scenario: &Scenario, path: &Path) -> Result<(), GridError> {
    let mut renderer = GridRenderer::new(scenario.grid_size);
    let size_px = renderer.size_px();
    let pixels = renderer.render(scenario);
    image::save_buffer(path, pixels, size_px, size_px, image::ColorType::Rgb8)?;
    Ok(())
}
