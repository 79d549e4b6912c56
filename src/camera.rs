use crate::cell::Cell;
use crate::surface::Surface;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// A text framebuffer that shows one grid cell per braille dot
pub struct Camera {
    /// The cell buffer
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the framebuffer
    w: usize,

    /// Height of the framebuffer
    h: usize,
}

impl Camera {
    pub fn new(w: usize, h: usize) -> Self {
        let cb = vec![false; w * h];

        // Let `w` and `h` refer to width and height of the cell buffer. Then `bw = ceil(w / 2)`
        // and `bh = ceil(h / 4)` are the width and height of braille characters of our framebuffer
        // (that is, not accounting for the trailing newlines expected at the end of each line).
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));
        let cp = vec![BRAILLE_EMPTY; bw * bh];

        // Each braille character is 3 bytes, and newlines one byte
        let fb = String::with_capacity(3 * (bw * bh) + bh);

        let mut cam = Self { cb, fb, cp, w, h };
        cam.render();
        cam
    }

    /// A camera covering a whole `size * size` grid
    pub fn for_grid(size: usize) -> Self {
        Self::new(size, size)
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Width and height of the rendered frame, in characters
    pub fn frame_size(&self) -> (usize, usize) {
        (self.w.div_ceil(2), self.h.div_ceil(4))
    }

    /// Turn a single dot of the framebuffer on or off. Dots off the framebuffer are
    /// ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= self.w || y >= self.h {
            return;
        }

        let i = self.xy_from(x, y);

        self.cb[i] = on;
    }

    /// Reset the cell buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// The most recently rendered frame
    pub fn frame(&self) -> &str {
        &self.fb
    }

    /// Rebuild the frame from the cell buffer. One line per 4 dot rows, each line ending in
    /// `\n`.
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            if px {
                let (x, y) = self.xy_to(n);
                self.cp[(y / 4) * bw + (x / 2)] += Self::get_hex_value(x, y);
            }
        }

        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // every sum of dot values stays inside the braille block
            self.fb
                .push(char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER));
        }
        self.fb.push('\n');

        &self.fb
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.w, n / self.w)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}

/// Columns map to `x`, rows to `y`
impl Surface for Camera {
    fn draw(&mut self, cell: Cell) {
        self.set_pixel(cell.col, cell.row, cell.live);
    }

    fn present(&mut self) {
        self.render();
    }
}

#[cfg(test)]
mod tests {
    use super::Camera;

    #[test]
    fn empty_frame() {
        let cam = Camera::new(3, 5);

        assert_eq!(cam.frame_size(), (2, 2));
        assert_eq!(cam.frame(), "\u{2800}\u{2800}\n\u{2800}\u{2800}\n");
    }

    #[test]
    fn full_block() {
        let mut cam = Camera::new(2, 4);
        for x in 0..2 {
            for y in 0..4 {
                cam.set_pixel(x, y, true);
            }
        }

        assert_eq!(cam.render(), "\u{28FF}\n");

        cam.reset();
        assert_eq!(cam.render(), "\u{2800}\n");
    }

    #[test]
    fn off_frame_pixels_are_ignored() {
        let mut cam = Camera::new(2, 4);
        cam.set_pixel(2, 0, true);
        cam.set_pixel(0, 4, true);

        assert_eq!(cam.render(), "\u{2800}\n");
    }
}
