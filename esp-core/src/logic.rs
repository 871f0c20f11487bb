//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::traits::RandomSource;

/// Größter Wert des 16-Bit Farbkreises
pub const HUE_MAX: u32 = 65535;

/// Wandelt einen Farbton des 16-Bit Farbkreises in RGB um
///
/// Der Kreis hat 1530 diskrete Stufen: 0 = Rot, ~21845 = Grün,
/// ~43690 = Blau, 65535 wieder (fast) Rot.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use esp_core::color_hsv;
/// assert_eq!(color_hsv(0, 255, 255), RGB8 { r: 255, g: 0, b: 0 });
/// assert_eq!(color_hsv(0, 0, 255), RGB8 { r: 255, g: 255, b: 255 });
/// ```
pub fn color_hsv(hue: u16, sat: u8, val: u8) -> RGB8 {
    let hue = ((hue as u32 * 1530 + 32768) / 65536) as u16;

    let (r, g, b): (u16, u16, u16) = if hue < 510 {
        // Rot → Grün
        if hue < 255 { (255, hue, 0) } else { (510 - hue, 255, 0) }
    } else if hue < 1020 {
        // Grün → Blau
        if hue < 765 {
            (0, 255, hue - 510)
        } else {
            (0, 1020 - hue, 255)
        }
    } else if hue < 1530 {
        // Blau → Rot
        if hue < 1275 {
            (hue - 1020, 0, 255)
        } else {
            (255, 0, 1530 - hue)
        }
    } else {
        (255, 0, 0)
    };

    // Sättigung und Helligkeit: +1 erlaubt >> 8 statt / 255
    let v1 = 1 + val as u32;
    let s1 = 1 + sat as u32;
    let s2 = 255 - sat as u32;
    let channel = |c: u16| (((((c as u32 * s1) >> 8) + s2) * v1) >> 8) as u8;

    RGB8 {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

/// Skaliert eine Farbe mit der globalen Helligkeit (0-255)
///
/// 255 lässt die Farbe unverändert, 0 ergibt Schwarz.
pub fn scale_brightness(color: RGB8, brightness: u8) -> RGB8 {
    let scale = |c: u8| ((c as u16 * (brightness as u16 + 1)) >> 8) as u8;
    RGB8 {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

/// Nächster Farbton: springt auf 0 zurück sobald 65535 überschritten ist
pub fn advance_hue(hue: u32, step: f32) -> u32 {
    let next = hue + step as u32;
    if next > HUE_MAX { 0 } else { next }
}

/// Gleichverteilter Index in `0..len` (Multiply-Shift statt Modulo)
pub fn random_index<R: RandomSource>(rng: &mut R, len: usize) -> usize {
    ((rng.next_u32() as u64 * len as u64) >> 32) as usize
}

/// Auswahl aus einer festen, geordneten Liste (Farben, Programme)
///
/// Links/Rechts bleiben an den Enden stehen, es wird nicht umgebrochen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    len: usize,
}

impl Selection {
    /// `index` wird auf `0..len` begrenzt
    pub fn new(index: usize, len: usize) -> Self {
        Self {
            index: index.min(len.saturating_sub(1)),
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn left(&mut self) -> usize {
        self.index = self.index.saturating_sub(1);
        self.index
    }

    pub fn right(&mut self) -> usize {
        self.index = (self.index + 1).min(self.len.saturating_sub(1));
        self.index
    }

    pub fn random<R: RandomSource>(&mut self, rng: &mut R) -> usize {
        self.index = random_index(rng, self.len);
        self.index
    }
}
