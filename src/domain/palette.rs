use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Each channel drawn uniformly from `0..255`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            rng.random_range(0..255),
            rng.random_range(0..255),
            rng.random_range(0..255),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Vertex being processed.
pub const ACTIVE_VERTEX: Rgb = Rgb::new(255, 0, 0);
/// Vertex discovered or settled.
pub const PROCESSED_VERTEX: Rgb = Rgb::new(154, 205, 50);
pub const PASSIVE_VERTEX: Rgb = Rgb::new(255, 255, 255);
pub const PASSIVE_EDGE: Rgb = Rgb::new(128, 128, 128);

const DISPLAY_SWATCHES: [Rgb; 15] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(0, 128, 0),
    Rgb::new(128, 128, 128),
    Rgb::new(210, 105, 30),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(128, 0, 0),
    Rgb::new(128, 128, 0),
    Rgb::new(128, 0, 128),
    Rgb::new(0, 128, 128),
    Rgb::new(245, 222, 179),
    Rgb::new(75, 0, 130),
];

/// Display swatches for color indices. Carries no algorithmic weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    swatches: Vec<Rgb>,
}

impl Palette {
    pub fn new(swatches: Vec<Rgb>) -> Self {
        Self { swatches }
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    pub fn swatches(&self) -> &[Rgb] {
        &self.swatches
    }

    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut swatches = self.swatches.clone();
        swatches.shuffle(rng);
        Self { swatches }
    }

    /// Swatch for a color index; indices past the end wrap around.
    pub fn swatch(&self, index: usize) -> Option<Rgb> {
        if self.swatches.is_empty() {
            return None;
        }
        self.swatches.get(index % self.swatches.len()).copied()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DISPLAY_SWATCHES.to_vec())
    }
}
