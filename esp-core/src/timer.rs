//! Software-Timer auf Basis einer monotonen Millisekunden-Uhr
//!
//! `TimerSchedule` implementiert [`TimerFacility`] ohne eigene Hardware: der
//! Besitzer (LED-Task oder Test) setzt mit `set_now()` die aktuelle Zeit,
//! fragt mit `next_due()` den nächsten Ablauf ab und holt mit `take_due()`
//! den fälligen Timer ab. Da nur der Besitzer die Uhr weiterdreht, kann ein
//! gestoppter Timer nie mehr feuern.

use crate::error::HardwareError;
use crate::traits::{TimerFacility, TimerKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PeriodicDeadline {
    period_ms: u32,
    due_ms: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TimerSchedule {
    now_ms: u64,
    periodic: Option<PeriodicDeadline>,
    one_shot_due_ms: Option<u64>,
}

impl TimerSchedule {
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            periodic: None,
            one_shot_due_ms: None,
        }
    }

    /// Aktualisiert die Uhr (darf nicht rückwärts laufen)
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Nächster Ablauf als (Timer, absolute Zeit in ms)
    ///
    /// Bei gleichem Zeitpunkt hat der One-Shot-Timer Vorrang.
    pub fn next_due(&self) -> Option<(TimerKind, u64)> {
        let periodic = self.periodic.map(|p| (TimerKind::Periodic, p.due_ms));
        let one_shot = self.one_shot_due_ms.map(|due| (TimerKind::OneShot, due));

        match (one_shot, periodic) {
            (Some(o), Some(p)) => Some(if p.1 < o.1 { p } else { o }),
            (o, p) => o.or(p),
        }
    }

    /// Holt einen fälligen Timer ab
    ///
    /// Der One-Shot-Timer wird dabei deaktiviert (der Callback darf ihn neu
    /// starten), der periodische Timer wird um eine Periode weitergestellt.
    pub fn take_due(&mut self) -> Option<TimerKind> {
        let (kind, due_ms) = self.next_due()?;
        if due_ms > self.now_ms {
            return None;
        }

        match kind {
            TimerKind::OneShot => self.one_shot_due_ms = None,
            TimerKind::Periodic => {
                if let Some(periodic) = self.periodic.as_mut() {
                    let next = periodic.due_ms + u64::from(periodic.period_ms);
                    // Verpasste Perioden werden übersprungen statt nachgeholt
                    periodic.due_ms = if next > self.now_ms {
                        next
                    } else {
                        self.now_ms + u64::from(periodic.period_ms)
                    };
                }
            }
        }
        Some(kind)
    }
}

impl TimerFacility for TimerSchedule {
    fn start_periodic(&mut self, period_ms: u32) -> Result<(), HardwareError> {
        // Periode 0 würde den LED-Task blockieren
        let period_ms = period_ms.max(1);
        self.periodic = Some(PeriodicDeadline {
            period_ms,
            due_ms: self.now_ms + u64::from(period_ms),
        });
        Ok(())
    }

    fn start_once(&mut self, delay_ms: u32) -> Result<(), HardwareError> {
        self.one_shot_due_ms = Some(self.now_ms + u64::from(delay_ms));
        Ok(())
    }

    fn stop(&mut self, timer: TimerKind) -> Result<(), HardwareError> {
        match timer {
            TimerKind::Periodic => self.periodic = None,
            TimerKind::OneShot => self.one_shot_due_ms = None,
        }
        Ok(())
    }

    fn is_armed(&self, timer: TimerKind) -> bool {
        match timer {
            TimerKind::Periodic => self.periodic.is_some(),
            TimerKind::OneShot => self.one_shot_due_ms.is_some(),
        }
    }
}
