//! Gemeinsame Mocks für die Integration Tests
//!
//! Laufen auf dem Host (x86_64), ohne ESP32-Hardware.

#![allow(dead_code)] // Nicht jede Test-Datei nutzt jeden Helper

use esp_core::{
    HardwareError, LedEntity, ModeController, PixelSink, TimerFacility, TimerKind, TimerSchedule,
};
use rgb::RGB8;

// ============================================================================
// Mock Pixel Sink
// ============================================================================

/// Ein Aufruf an die Pixel-Ausgabe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkCall {
    Write(usize, RGB8),
    Clear,
    Flush,
}

/// Zeichnet jeden Aufruf auf und kann den nächsten Flush scheitern lassen
#[derive(Debug, Default)]
pub struct MockPixelSink {
    pub calls: Vec<SinkCall>,
    pub pixel: Option<RGB8>,
    pub flush_count: usize,
    pub fail_next_flush: bool,
}

impl MockPixelSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Was die LED nach dem letzten Flush anzeigt (None = aus)
    pub fn shown(&self) -> Option<RGB8> {
        self.pixel
    }

    pub fn take_calls(&mut self) -> Vec<SinkCall> {
        core::mem::take(&mut self.calls)
    }
}

impl PixelSink for MockPixelSink {
    fn write_pixel(&mut self, index: usize, color: RGB8) -> Result<(), HardwareError> {
        if index != 0 {
            return Err(HardwareError::PixelOutOfRange);
        }
        self.calls.push(SinkCall::Write(index, color));
        self.pixel = Some(color);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), HardwareError> {
        self.calls.push(SinkCall::Clear);
        self.pixel = None;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), HardwareError> {
        if self.fail_next_flush {
            self.fail_next_flush = false;
            return Err(HardwareError::PixelWriteFailed);
        }
        self.calls.push(SinkCall::Flush);
        self.flush_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Timers
// ============================================================================

/// Ein Aufruf an die Timer Facility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCall {
    StartPeriodic(u32),
    StartOnce(u32),
    Stop(TimerKind),
}

/// Zeichnet Start/Stop auf; Abläufe werden im Test von Hand ausgelöst
#[derive(Debug, Default)]
pub struct MockTimers {
    pub calls: Vec<TimerCall>,
    pub periodic: bool,
    pub one_shot: bool,
    pub fail_next_start: bool,
}

impl MockTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_calls(&mut self) -> Vec<TimerCall> {
        core::mem::take(&mut self.calls)
    }

    /// Letzte One-Shot-Verzögerung (falls der Timer läuft)
    pub fn pending_once(&self) -> Option<u32> {
        if !self.one_shot {
            return None;
        }
        self.calls.iter().rev().find_map(|call| match call {
            TimerCall::StartOnce(delay) => Some(*delay),
            _ => None,
        })
    }

    fn check_fail(&mut self) -> Result<(), HardwareError> {
        if self.fail_next_start {
            self.fail_next_start = false;
            return Err(HardwareError::TimerFailed);
        }
        Ok(())
    }
}

impl TimerFacility for MockTimers {
    fn start_periodic(&mut self, period_ms: u32) -> Result<(), HardwareError> {
        self.check_fail()?;
        self.calls.push(TimerCall::StartPeriodic(period_ms));
        self.periodic = true;
        Ok(())
    }

    fn start_once(&mut self, delay_ms: u32) -> Result<(), HardwareError> {
        self.check_fail()?;
        self.calls.push(TimerCall::StartOnce(delay_ms));
        self.one_shot = true;
        Ok(())
    }

    fn stop(&mut self, timer: TimerKind) -> Result<(), HardwareError> {
        self.calls.push(TimerCall::Stop(timer));
        match timer {
            TimerKind::Periodic => self.periodic = false,
            TimerKind::OneShot => self.one_shot = false,
        }
        Ok(())
    }

    fn is_armed(&self, timer: TimerKind) -> bool {
        match timer {
            TimerKind::Periodic => self.periodic,
            TimerKind::OneShot => self.one_shot,
        }
    }
}

// ============================================================================
// Helper
// ============================================================================

pub type MockController = ModeController<MockPixelSink, MockTimers>;
pub type ScheduledController = ModeController<MockPixelSink, TimerSchedule>;

pub fn mock_controller() -> MockController {
    ModeController::new(LedEntity::new(0), MockPixelSink::new(), MockTimers::new())
}

pub fn scheduled_controller() -> ScheduledController {
    ModeController::new(LedEntity::new(0), MockPixelSink::new(), TimerSchedule::new())
}

/// Simuliert einen One-Shot-Ablauf wie die Hardware: Timer ist danach aus
pub fn fire_once(controller: &mut MockController) {
    assert!(
        controller.timers().one_shot,
        "one-shot timer fired while not armed"
    );
    controller.timers_mut().one_shot = false;
    controller.on_timer(TimerKind::OneShot).unwrap();
}

/// Ein Ablauf des Schedulers: (Zeitpunkt in ms, LED an?)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Firing {
    pub at_ms: u64,
    pub on: bool,
}

/// Lässt die Uhr von Ablauf zu Ablauf springen, bis kein Timer mehr läuft
/// oder `max_firings` erreicht ist
pub fn run_schedule(controller: &mut ScheduledController, max_firings: usize) -> Vec<Firing> {
    let mut firings = Vec::new();

    while firings.len() < max_firings {
        let Some((_, due_ms)) = controller.timers().next_due() else {
            break;
        };
        controller.timers_mut().set_now(due_ms);
        let Some(kind) = controller.timers_mut().take_due() else {
            break;
        };
        controller.on_timer(kind).unwrap();
        firings.push(Firing {
            at_ms: due_ms,
            on: controller.entity().is_on(),
        });
    }
    firings
}
