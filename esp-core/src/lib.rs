//! ESP Core - Platform-agnostic LED Mode Controller
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Modus-Steuerung (Light, Blinky, Morse), den
//! Morse-Iterator und die Traits für Pixel-Ausgabe und Timer.

#![no_std]

extern crate alloc;

// Muss als erstes Modul stehen, damit die Makros in allen Modulen sichtbar sind
#[macro_use]
mod fmt;

pub mod command;
pub mod controller;
pub mod error;
pub mod morse;
#[cfg(feature = "serde")]
pub mod protocol;
pub mod timer;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use command::{LedCommand, LedRequest, LedResponse};
pub use controller::ModeController;
pub use error::{HardwareError, LedError};
pub use morse::{MorseIterator, MorseState, MorseStep, MorseSymbol, MorseTiming};
pub use timer::TimerSchedule;
pub use traits::{PixelSink, TimerFacility, TimerKind};
pub use types::{DEFAULT_BLINK_PERIOD_MS, DEFAULT_COLOR, LedConfig, LedEntity, LedSnapshot, Mode};
