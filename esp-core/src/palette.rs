//! Farbtabelle
//!
//! Geordnete Liste benannter Farben. Links/Rechts wandert durch diese
//! Reihenfolge (alphabetisch).

use rgb::RGB8;

const fn rgb8(r: u8, g: u8, b: u8) -> RGB8 {
    RGB8 { r, g, b }
}

/// Standard-Tabelle, alphabetisch sortiert
pub const NAMED_COLORS: &[(&str, RGB8)] = &[
    ("aqua", rgb8(0, 255, 255)),
    ("blue", rgb8(0, 0, 255)),
    ("chartreuse", rgb8(127, 255, 0)),
    ("coral", rgb8(255, 127, 80)),
    ("crimson", rgb8(220, 20, 60)),
    ("cyan", rgb8(0, 255, 255)),
    ("deeppink", rgb8(255, 20, 147)),
    ("gold", rgb8(255, 215, 0)),
    ("green", rgb8(0, 128, 0)),
    ("indigo", rgb8(75, 0, 130)),
    ("lime", rgb8(0, 255, 0)),
    ("magenta", rgb8(255, 0, 255)),
    ("orange", rgb8(255, 165, 0)),
    ("orangered", rgb8(255, 69, 0)),
    ("orchid", rgb8(218, 112, 214)),
    ("purple", rgb8(128, 0, 128)),
    ("red", rgb8(255, 0, 0)),
    ("royalblue", rgb8(65, 105, 225)),
    ("salmon", rgb8(250, 128, 114)),
    ("springgreen", rgb8(0, 255, 127)),
    ("teal", rgb8(0, 128, 128)),
    ("turquoise", rgb8(64, 224, 208)),
    ("violet", rgb8(238, 130, 238)),
    ("white", rgb8(255, 255, 255)),
    ("yellow", rgb8(255, 255, 0)),
];

/// Geordnete Zuordnung Name → RGB
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    entries: &'static [(&'static str, RGB8)],
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(NAMED_COLORS)
    }
}

impl Palette {
    pub const fn new(entries: &'static [(&'static str, RGB8)]) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).map(|(name, _)| *name)
    }

    pub fn color(&self, index: usize) -> Option<RGB8> {
        self.entries.get(index).map(|(_, color)| *color)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| *n == name)
    }

    pub fn lookup(&self, name: &str) -> Option<RGB8> {
        self.position(name).and_then(|i| self.color(i))
    }
}
