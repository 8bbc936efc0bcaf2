//! Logische Kommandos der Command-Ingestion (HTTP → LED-Task)

use alloc::string::String;
use rgb::RGB8;

use crate::error::LedError;
use crate::types::{LedSnapshot, Mode};

/// LED Command für die Modus-Steuerung
///
/// Jedes Kommando wird vom `ModeController::apply()` auf die passenden
/// Setter plus `set_mode()` abgebildet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedCommand {
    /// Dauerlicht an/aus
    ActivateLight { on: bool },
    /// Blinken mit gegebener Periode
    ActivateBlinky { duration_ms: u32 },
    /// Morse-Text setzen und abspielen
    ActivateMorse { text: String },
    /// Farbe ändern (sofort sichtbar wenn die LED an ist)
    SetColor { color: RGB8 },
    /// Nur den Modus wechseln, Konfiguration bleibt
    SetMode(Mode),
}

/// Anfrage an den LED-Task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedRequest {
    Command(LedCommand),
    /// Nur den aktuellen Zustand abfragen
    Status,
}

impl From<LedCommand> for LedRequest {
    fn from(command: LedCommand) -> Self {
        Self::Command(command)
    }
}

/// Antwort des LED-Tasks: Zustand nach der Anfrage oder Fehler
pub type LedResponse = Result<LedSnapshot, LedError>;

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedCommand {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedCommand::ActivateLight { on } => {
                defmt::write!(fmt, "ActivateLight {{ on: {} }}", on)
            }
            LedCommand::ActivateBlinky { duration_ms } => {
                defmt::write!(fmt, "ActivateBlinky {{ duration: {} ms }}", duration_ms)
            }
            LedCommand::ActivateMorse { text } => {
                defmt::write!(fmt, "ActivateMorse {{ text: {=str} }}", text.as_str())
            }
            LedCommand::SetColor { color } => {
                defmt::write!(
                    fmt,
                    "SetColor {{ rgb: ({}, {}, {}) }}",
                    color.r,
                    color.g,
                    color.b
                )
            }
            LedCommand::SetMode(mode) => {
                defmt::write!(fmt, "SetMode({})", mode)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedRequest {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedRequest::Command(command) => defmt::write!(fmt, "{}", command),
            LedRequest::Status => defmt::write!(fmt, "Status"),
        }
    }
}
