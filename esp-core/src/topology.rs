//! Strip-Topologie
//!
//! Benannte Segmente mit Pixel-Anzahl werden hintereinander gelegt. Die
//! flache Index-Folge `0..total` ist der Adressraum aller Programme.

use core::ops::Range;

use heapless::{String, Vec};

/// Maximale Anzahl Pixel auf dem Strip
pub const MAX_PIXELS: usize = 256;

/// Maximale Anzahl Segmente
pub const MAX_SEGMENTS: usize = 8;

/// Maximale Länge eines Segment-Namens
pub const SEGMENT_NAME_LEN: usize = 16;

/// Fehler beim Aufbau der Topologie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TopologyError {
    /// Keine Pixel konfiguriert
    Empty,
    TooManyPixels,
    TooManySegments,
    NameTooLong,
    /// Konfigurations-JSON nicht lesbar
    InvalidConfig,
}

/// Zusammenhängender Bereich auf dem Strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    name: String<SEGMENT_NAME_LEN>,
    start: u16,
    len: u16,
}

impl Segment {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> u16 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn range(&self) -> Range<u16> {
        self.start..self.start + self.len
    }
}

/// Unveränderliche Topologie, wird einmal beim Start gebaut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripTopology {
    segments: Vec<Segment, MAX_SEGMENTS>,
    pixels: Vec<u16, MAX_PIXELS>,
}

impl StripTopology {
    /// Baut die Topologie aus `(Name, Pixel-Anzahl)` Paaren
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use esp_core::StripTopology;
    /// let topology = StripTopology::from_segments([("desk", 3), ("shelf", 2)]).unwrap();
    /// assert_eq!(topology.pixels(), &[0, 1, 2, 3, 4]);
    /// assert_eq!(topology.segment("shelf").unwrap().range(), 3..5);
    /// ```
    pub fn from_segments<'a, I>(segments: I) -> Result<Self, TopologyError>
    where
        I: IntoIterator<Item = (&'a str, u16)>,
    {
        let mut topology = Self {
            segments: Vec::new(),
            pixels: Vec::new(),
        };
        let mut start: usize = 0;

        for (name, count) in segments {
            let end = start + count as usize;
            if end > MAX_PIXELS {
                return Err(TopologyError::TooManyPixels);
            }

            let mut segment_name = String::new();
            segment_name
                .push_str(name)
                .map_err(|_| TopologyError::NameTooLong)?;

            topology
                .segments
                .push(Segment {
                    name: segment_name,
                    start: start as u16,
                    len: count,
                })
                .map_err(|_| TopologyError::TooManySegments)?;

            for index in start..end {
                topology
                    .pixels
                    .push(index as u16)
                    .map_err(|_| TopologyError::TooManyPixels)?;
            }
            start = end;
        }

        if topology.pixels.is_empty() {
            return Err(TopologyError::Empty);
        }
        Ok(topology)
    }

    /// Einfacher Strip ohne Segment-Aufteilung
    pub fn linear(count: u16) -> Result<Self, TopologyError> {
        Self::from_segments([("strip", count)])
    }

    /// Flache Index-Folge aller Pixel
    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.name() == name)
    }
}

// ============================================================================
// JSON-Konfiguration (optional feature)
// ============================================================================

#[cfg(feature = "serde")]
mod config {
    use serde::Deserialize;

    use super::{MAX_SEGMENTS, StripTopology, TopologyError};

    /// Ein Eintrag in `led_list`
    #[derive(Debug, Deserialize)]
    pub struct SegmentConfig<'a> {
        pub name: &'a str,
        pub pixels: u16,
    }

    /// Konfigurations-Datei, z.B. `{"led_list":[{"name":"desk","pixels":60}]}`
    #[derive(Debug, Deserialize)]
    pub struct TopologyConfig<'a> {
        #[serde(borrow)]
        pub led_list: heapless::Vec<SegmentConfig<'a>, MAX_SEGMENTS>,
    }

    impl StripTopology {
        pub fn from_json(json: &str) -> Result<Self, TopologyError> {
            let (config, _) = serde_json_core::from_str::<TopologyConfig>(json)
                .map_err(|_| TopologyError::InvalidConfig)?;
            Self::from_segments(config.led_list.iter().map(|s| (s.name, s.pixels)))
        }
    }
}

#[cfg(feature = "serde")]
pub use config::{SegmentConfig, TopologyConfig};
