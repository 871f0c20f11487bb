//! Core Types für LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Kommando vom Bluetooth-Link
///
/// Wird pro Tick vom Decoder geliefert. `None` heißt: in diesem Tick
/// ist kein vollständiges Kommando angekommen.
///
/// `ProgRandom` (`rdm_prog`) ist eine Erweiterung gegenüber den Tokens der
/// Handy-App; ältere Gegenstellen senden es nie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    BrightUp,
    BrightDown,
    ProgLeft,
    ProgRight,
    ProgRandom,
    SpeedUp,
    SpeedDown,
    ColorLeft,
    ColorRight,
    ColorRandom,
    None,
}

impl Command {
    /// Alle Kommandos mit Wire-Token
    pub const ALL: [Command; 10] = [
        Command::BrightUp,
        Command::BrightDown,
        Command::ProgLeft,
        Command::ProgRight,
        Command::ProgRandom,
        Command::SpeedUp,
        Command::SpeedDown,
        Command::ColorLeft,
        Command::ColorRight,
        Command::ColorRandom,
    ];

    /// ASCII-Token zwischen `^` und `?`
    pub fn token(self) -> Option<&'static [u8]> {
        let token: &'static [u8] = match self {
            Command::BrightUp => b"bright_up",
            Command::BrightDown => b"bright_down",
            Command::ProgLeft => b"prog_left",
            Command::ProgRight => b"prog_right",
            Command::ProgRandom => b"rdm_prog",
            Command::SpeedUp => b"speed_up",
            Command::SpeedDown => b"speed_down",
            Command::ColorLeft => b"color_left",
            Command::ColorRight => b"color_right",
            Command::ColorRandom => b"rdm_color",
            Command::None => return None,
        };
        Some(token)
    }

    /// Unbekannte Tokens ergeben `Command::None`
    pub fn from_token(token: &[u8]) -> Self {
        Self::try_from(token).unwrap_or(Command::None)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Command::BrightUp => "BrightUp",
            Command::BrightDown => "BrightDown",
            Command::ProgLeft => "ProgLeft",
            Command::ProgRight => "ProgRight",
            Command::ProgRandom => "ProgRandom",
            Command::SpeedUp => "SpeedUp",
            Command::SpeedDown => "SpeedDown",
            Command::ColorLeft => "ColorLeft",
            Command::ColorRight => "ColorRight",
            Command::ColorRandom => "ColorRandom",
            Command::None => "None",
        }
    }
}

impl core::convert::TryFrom<&[u8]> for Command {
    type Error = ();

    /// Exakter, case-sensitiver Vergleich gegen die Token-Tabelle
    fn try_from(token: &[u8]) -> Result<Self, Self::Error> {
        Command::ALL
            .iter()
            .copied()
            .find(|cmd| cmd.token() == Some(token))
            .ok_or(())
    }
}

/// Animations-Programm
///
/// Reihenfolge entspricht der Auswahl-Liste (links → rechts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    Fade,
    Fill,
    RainbowFade,
    Snake,
}

impl Program {
    pub const ALL: [Program; 4] = [
        Program::Fade,
        Program::Fill,
        Program::RainbowFade,
        Program::Snake,
    ];

    pub fn index(self) -> usize {
        match self {
            Program::Fade => 0,
            Program::Fill => 1,
            Program::RainbowFade => 2,
            Program::Snake => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Program::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Program::Fade => "fade",
            Program::Fill => "fill",
            Program::RainbowFade => "rainbow_fade",
            Program::Snake => "snake",
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Program {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lookup_is_exact() {
        assert_eq!(Command::from_token(b"bright_up"), Command::BrightUp);
        assert_eq!(Command::from_token(b"BRIGHT_UP"), Command::None);
        assert_eq!(Command::from_token(b"bright_up "), Command::None);
        assert_eq!(Command::from_token(b""), Command::None);
    }

    #[test]
    fn test_every_command_has_unique_token() {
        for cmd in Command::ALL {
            let token = cmd.token().unwrap();
            assert_eq!(Command::from_token(token), cmd);
        }
        assert_eq!(Command::None.token(), None);
    }

    #[test]
    fn test_program_index_matches_order() {
        for (i, program) in Program::ALL.iter().enumerate() {
            assert_eq!(program.index(), i);
            assert_eq!(Program::from_index(i), Some(*program));
        }
        assert_eq!(Program::from_index(4), None);
    }
}
