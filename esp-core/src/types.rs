//! Core Types für LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use alloc::string::String;
use rgb::RGB8;

use crate::error::LedError;

/// Gedimmtes Grau - Startfarbe nach dem Booten
pub const DEFAULT_COLOR: RGB8 = RGB8 {
    r: 25,
    g: 25,
    b: 25,
};

/// Blink-Periode bis der erste Blinky-Befehl eintrifft
pub const DEFAULT_BLINK_PERIOD_MS: u32 = 500;

/// Betriebs-Modus der LED (schließen sich gegenseitig aus)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Dauerlicht (an oder aus), kein Timer aktiv
    #[default]
    Light,
    /// Blinken mit periodischem Timer
    Blinky,
    /// Morse-Code Wiedergabe mit One-Shot-Timer
    Morse,
}

impl Mode {
    /// Konvertiert Mode zu einem String (wie in der HTTP-API)
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Blinky => "blinky",
            Mode::Morse => "morse",
        }
    }
}

impl TryFrom<&str> for Mode {
    type Error = LedError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "light" => Ok(Mode::Light),
            "blinky" => Ok(Mode::Blinky),
            "morse" => Ok(Mode::Morse),
            _ => Err(LedError::InvalidMode),
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = LedError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mode::Light),
            1 => Ok(Mode::Blinky),
            2 => Ok(Mode::Morse),
            _ => Err(LedError::InvalidMode),
        }
    }
}

/// Persistente Konfiguration einer LED
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedConfig {
    pub mode: Mode,
    pub on: bool,
    pub color: RGB8,
    pub blink_period_ms: u32,
    pub morse_text: Option<String>,
}

impl Default for LedConfig {
    /// Aus, gedimmtes Grau, Light-Modus
    fn default() -> Self {
        Self {
            mode: Mode::Light,
            on: false,
            color: DEFAULT_COLOR,
            blink_period_ms: DEFAULT_BLINK_PERIOD_MS,
            morse_text: None,
        }
    }
}

/// LED Entity - ein adressierbarer Pixel
///
/// Wird einmal beim Start erstellt und lebt so lange wie der Prozess.
/// Änderungen laufen ausschließlich über den `ModeController`, daher sind
/// die Setter nur crate-intern sichtbar.
#[derive(Debug)]
pub struct LedEntity {
    index: usize,
    config: LedConfig,
}

impl LedEntity {
    /// Erstellt eine LED an Position `index` mit Default-Konfiguration
    pub fn new(index: usize) -> Self {
        Self::with_config(index, LedConfig::default())
    }

    pub fn with_config(index: usize, config: LedConfig) -> Self {
        Self { index, config }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn config(&self) -> &LedConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn is_on(&self) -> bool {
        self.config.on
    }

    pub fn color(&self) -> RGB8 {
        self.config.color
    }

    pub fn blink_period_ms(&self) -> u32 {
        self.config.blink_period_ms
    }

    pub fn morse_text(&self) -> Option<&str> {
        self.config.morse_text.as_deref()
    }

    /// Gibt es einen nicht-leeren Morse-Text zum Abspielen?
    pub fn has_morse_text(&self) -> bool {
        self.morse_text().is_some_and(|text| !text.is_empty())
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.config.mode = mode;
    }

    pub(crate) fn set_on(&mut self, on: bool) {
        self.config.on = on;
    }

    pub(crate) fn set_color(&mut self, color: RGB8) {
        self.config.color = color;
    }

    pub(crate) fn set_blink_period_ms(&mut self, period_ms: u32) {
        self.config.blink_period_ms = period_ms;
    }

    /// Ersetzt den Morse-Text und gibt den alten Puffer zurück
    pub(crate) fn replace_morse_text(&mut self, text: Option<String>) -> Option<String> {
        core::mem::replace(&mut self.config.morse_text, text)
    }
}

/// Momentaufnahme des LED-Zustands
///
/// Wird vom LED-Task als Antwort auf jede erfolgreiche Anfrage verschickt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedSnapshot {
    pub mode: Mode,
    pub on: bool,
    pub color: RGB8,
    pub blink_period_ms: u32,
    pub morse_len: usize,
    pub morse_cursor: usize,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedSnapshot {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "LedSnapshot {{ mode: {}, on: {}, rgb: ({}, {}, {}), blink: {} ms, morse: {}/{} }}",
            self.mode,
            self.on,
            self.color.r,
            self.color.g,
            self.color.b,
            self.blink_period_ms,
            self.morse_cursor,
            self.morse_len
        )
    }
}
