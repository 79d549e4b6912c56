use crate::cell::Cell;
use crate::color::Color;
use crate::config::Config;
use crate::surface::Surface;

/// Below this many pixels a cell is all fill, no grid lines
const MIN_LINED_CELL: u32 = 3;

/// An in-memory RGB drawing surface.
///
/// Cell `(row, col)` covers the `s * s` square at `x = col * s`, `y = row * s`, where
/// `s = canvas_size / grid_size`, at least 1. Cells past the edge are clipped. The pixel
/// buffer is only allocated on the first draw.
pub struct Canvas {
    /// Side length, in pixels
    size: u32,

    /// Side length of one cell, in pixels
    cell_size: u32,

    live_color: Color,
    dead_color: Color,
    line_color: Color,

    /// Row-major pixels. `None` until something is drawn.
    pixels: Option<Vec<Color>>,
}

impl Canvas {
    pub fn new(config: &Config) -> Self {
        Self {
            size: config.canvas_size,
            cell_size: config.cell_size(),
            live_color: config.live_color,
            dead_color: config.dead_color,
            line_color: config.line_color,
            pixels: None,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Whether the pixel buffer exists yet
    pub fn is_attached(&self) -> bool {
        self.pixels.is_some()
    }

    /// Colour at `(x, y)`, or `None` if nothing has been drawn or `(x, y)` is off the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size || y >= self.size {
            return None;
        }

        let pixels = self.pixels.as_ref()?;

        Some(pixels[self.xy_from(x, y)])
    }

    fn xy_from(&self, x: u32, y: u32) -> usize {
        y as usize * self.size as usize + x as usize
    }

    fn attach(&mut self) -> &mut Vec<Color> {
        let len = self.size as usize * self.size as usize;
        let dead = self.dead_color;

        self.pixels.get_or_insert_with(|| vec![dead; len])
    }

    /// Fill a square of side `s` with its top-left corner at `(x, y)`, clipped to the canvas
    fn fill_square(&mut self, x: u32, y: u32, s: u32, color: Color) {
        let size = self.size;
        let pixels = self.attach();

        for py in y..(y + s).min(size) {
            let start = py as usize * size as usize;
            for px in x..(x + s).min(size) {
                pixels[start + px as usize] = color;
            }
        }
    }

    /// Draw the top and left edges of the square at `(x, y)`
    fn stroke_square(&mut self, x: u32, y: u32, s: u32, color: Color) {
        let size = self.size;
        let pixels = self.attach();

        for d in 0..s {
            if x + d < size && y < size {
                pixels[y as usize * size as usize + (x + d) as usize] = color;
            }
            if x < size && y + d < size {
                pixels[(y + d) as usize * size as usize + x as usize] = color;
            }
        }
    }
}

impl Surface for Canvas {
    fn draw(&mut self, cell: Cell) {
        let s = self.cell_size;
        let (x, y) = (cell.col as u32 * s, cell.row as u32 * s);

        let fill = if cell.live {
            self.live_color
        } else {
            self.dead_color
        };
        self.fill_square(x, y, s, fill);

        if s >= MIN_LINED_CELL {
            self.stroke_square(x, y, s, self.line_color);
        }
    }
}
