//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Pixel-Ausgabe und Timer
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::error::HardwareError;

/// Trait für SmartLED Hardware-Zugriff (Pixel Sink)
///
/// Abstrahiert den LED-Bus (WS2812/Neopixel): Farben werden zuerst in einen
/// Puffer geschrieben und erst mit `flush()` auf die Hardware übertragen.
///
/// # Implementierungen
/// - **Production:** RmtPixelSink (ESP32 RMT Peripheral)
/// - **Testing:** MockPixelSink (in-memory Mock)
pub trait PixelSink: Send {
    /// Setzt die Farbe eines Pixels im Puffer
    ///
    /// # Fehlerbehandlung
    /// `HardwareError::PixelOutOfRange` wenn `index` nicht im Strip liegt
    fn write_pixel(&mut self, index: usize, color: RGB8) -> Result<(), HardwareError>;

    /// Setzt alle Pixel auf Schwarz (aus)
    fn clear(&mut self) -> Result<(), HardwareError>;

    /// Überträgt den Puffer auf den LED-Bus
    ///
    /// # Fehlerbehandlung
    /// `HardwareError::PixelWriteFailed` wenn Hardware-Zugriff fehlschlägt
    fn flush(&mut self) -> Result<(), HardwareError>;
}

/// Die beiden Timer des Mode Controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerKind {
    /// Feuert wiederholt (Blinky)
    Periodic,
    /// Feuert einmal und muss neu gestartet werden (Morse)
    OneShot,
}

/// Trait für die Timer Facility
///
/// Stellt einen periodischen und einen One-Shot-Timer bereit. Wenn ein Timer
/// abläuft, ruft der Besitzer `ModeController::on_timer()` auf.
pub trait TimerFacility {
    /// Startet den periodischen Timer (ersetzt eine laufende Periode)
    fn start_periodic(&mut self, period_ms: u32) -> Result<(), HardwareError>;

    /// Startet den One-Shot-Timer nach `delay_ms` (0 = nächster Tick)
    fn start_once(&mut self, delay_ms: u32) -> Result<(), HardwareError>;

    /// Stoppt einen Timer
    ///
    /// Idempotent: ein bereits gestoppter Timer ist KEIN Fehler.
    fn stop(&mut self, timer: TimerKind) -> Result<(), HardwareError>;

    /// Ist der Timer gerade aktiv?
    fn is_armed(&self, timer: TimerKind) -> bool;
}
