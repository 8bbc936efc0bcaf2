// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus esp-core für die echte Hardware.
// Timer brauchen keine eigene Implementierung: der LED-Task treibt den
// TimerSchedule aus esp-core mit der embassy-time Uhr.

pub mod pixel_sink;

pub use pixel_sink::{RMT_BUFFER_SIZE, RmtPixelSink};
