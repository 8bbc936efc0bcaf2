//! Fehler-Typen für LED-Steuerung
//!
//! Alle Varianten sind `Copy`, damit sie ohne Allokation durch Channels
//! zwischen LED-Task und HTTP-Tasks gereicht werden können.

use core::fmt;

/// Fehler der Hardware-Schnittstellen (Pixel-Ausgabe und Timer)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareError {
    /// Schreiben auf den LED-Bus fehlgeschlagen
    PixelWriteFailed,
    /// Pixel-Index liegt außerhalb des Strips
    PixelOutOfRange,
    /// Timer konnte nicht gestartet oder gestoppt werden
    TimerFailed,
}

impl fmt::Display for HardwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelWriteFailed => f.write_str("pixel write failed"),
            Self::PixelOutOfRange => f.write_str("pixel index out of range"),
            Self::TimerFailed => f.write_str("timer control failed"),
        }
    }
}

/// Fehler-Typ für alle Operationen des Mode Controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// Unbekannter Modus (z.B. "disco" statt "light")
    InvalidMode,
    /// Morse-Modus angefordert, aber kein Morse-Text gesetzt
    InvalidState,
    /// Nicht unterstütztes Zeichen im Morse-Text
    Decode { position: usize, byte: u8 },
    /// Pixel-Ausgabe oder Timer meldet Fehler
    Hardware(HardwareError),
}

impl LedError {
    /// Kurze, statische Fehlerbeschreibung (für JSON-Antworten)
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidMode => "unknown LED mode",
            Self::InvalidState => "no morse code set",
            Self::Decode { .. } => "unsupported morse character",
            Self::Hardware(HardwareError::PixelWriteFailed) => "pixel write failed",
            Self::Hardware(HardwareError::PixelOutOfRange) => "pixel index out of range",
            Self::Hardware(HardwareError::TimerFailed) => "timer control failed",
        }
    }
}

impl fmt::Display for LedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { position, byte } => {
                write!(f, "unsupported morse character {byte:#04x} at {position}")
            }
            Self::Hardware(e) => write!(f, "hardware: {e}"),
            other => f.write_str(other.message()),
        }
    }
}

impl From<HardwareError> for LedError {
    fn from(e: HardwareError) -> Self {
        Self::Hardware(e)
    }
}
