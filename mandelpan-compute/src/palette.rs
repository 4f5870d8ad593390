use mandelpan_core::Rgb;
use serde::{Deserialize, Serialize};

/// Number of cycling exterior colors.
pub const PALETTE_SIZE: usize = 16;

/// Fixed escape-time palette: sixteen exterior colors cycled by
/// `iterations % 16`, plus one reserved interior color for points that never
/// escape. Immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    entries: [Rgb; PALETTE_SIZE],
    interior: Rgb,
}

impl Palette {
    pub fn new(entries: [Rgb; PALETTE_SIZE], interior: Rgb) -> Self {
        Self { entries, interior }
    }

    /// Color for an escape-time result. Total for any iteration count:
    /// `max_iterations` maps to the interior color, everything else cycles
    /// through the sixteen entries.
    pub fn color_for(&self, iterations: u32, max_iterations: u32) -> Rgb {
        if iterations >= max_iterations {
            self.interior
        } else {
            self.entries[(iterations as usize) % PALETTE_SIZE]
        }
    }

    pub fn interior(&self) -> Rgb {
        self.interior
    }

    pub fn entries(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.entries
    }
}

impl Default for Palette {
    /// The classic blue-to-gold gradient, interior black.
    fn default() -> Self {
        Self {
            entries: [
                [66, 30, 15],
                [25, 7, 26],
                [9, 1, 47],
                [4, 4, 73],
                [0, 7, 100],
                [12, 44, 138],
                [24, 82, 177],
                [57, 125, 209],
                [134, 181, 229],
                [211, 236, 248],
                [241, 233, 191],
                [248, 201, 95],
                [255, 170, 0],
                [204, 128, 0],
                [153, 87, 0],
                [106, 52, 3],
            ],
            interior: [0, 0, 0],
        }
    }
}
