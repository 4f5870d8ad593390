use serde::{Deserialize, Serialize};

/// One color sample, packed RGB.
pub type Rgb = [u8; 3];

/// Grid of color samples at the engine's logical (downsampled) resolution.
///
/// The engine replaces its buffer wholesale on every render; the buffer is
/// never partially mutated, so a borrowed buffer is always a complete frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Allocate a buffer filled with `fill` (row-major, `width * height`
    /// samples).
    pub fn new(width: u32, height: u32, fill: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Write one sample. Out-of-range coordinates are ignored rather than
    /// growing the buffer.
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            self.pixels[i] = color;
        }
    }

    /// Row-major view of the samples.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Expand every logical sample into a `scale x scale` block of RGBA
    /// bytes, producing a `(width * scale) x (height * scale)` image ready
    /// for blitting. `scale` is clamped to at least 1. Alpha is opaque.
    pub fn to_rgba(&self, scale: u32) -> Vec<u8> {
        let scale = scale.max(1) as usize;
        let out_width = self.width as usize * scale;
        let out_height = self.height as usize * scale;
        let mut rgba = vec![0u8; out_width * out_height * 4];

        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                let [r, g, b] = self.pixels[y * self.width as usize + x];
                for sy in 0..scale {
                    let row = (y * scale + sy) * out_width;
                    for sx in 0..scale {
                        let offset = (row + x * scale + sx) * 4;
                        rgba[offset] = r;
                        rgba[offset + 1] = g;
                        rgba[offset + 2] = b;
                        rgba[offset + 3] = 255;
                    }
                }
            }
        }

        rgba
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}
