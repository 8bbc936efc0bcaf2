//! Mode Controller - Zustandsmaschine für Light, Blinky und Morse
//!
//! Der Controller besitzt die LED Entity, den Morse-Iterator, die Pixel-Ausgabe
//! und beide Timer. Er ist nicht `Sync`: genau ein Besitzer (der LED-Task)
//! ruft sowohl die Kommandos als auch die Timer-Callbacks auf. Dadurch kann
//! kein Callback einen Morse-Text lesen, der gerade ersetzt wird.

use alloc::string::String;
use rgb::RGB8;

use crate::command::{LedCommand, LedRequest, LedResponse};
use crate::error::LedError;
use crate::morse::{MorseIterator, MorseStep, MorseTiming};
use crate::traits::{PixelSink, TimerFacility, TimerKind};
use crate::types::{LedEntity, LedSnapshot, Mode};

pub struct ModeController<P, T> {
    entity: LedEntity,
    morse: MorseIterator,
    timing: MorseTiming,
    sink: P,
    timers: T,
}

impl<P: PixelSink, T: TimerFacility> ModeController<P, T> {
    /// Erstellt den Controller, ohne Hardware anzufassen
    ///
    /// Nach dem Erstellen sollte einmal `set_mode()` aufgerufen werden, damit
    /// die LED den Zustand der Entity anzeigt.
    pub fn new(entity: LedEntity, sink: P, timers: T) -> Self {
        Self {
            entity,
            morse: MorseIterator::new(),
            timing: MorseTiming::default(),
            sink,
            timers,
        }
    }

    pub fn with_timing(mut self, timing: MorseTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn entity(&self) -> &LedEntity {
        &self.entity
    }

    pub fn morse(&self) -> &MorseIterator {
        &self.morse
    }

    pub fn timing(&self) -> MorseTiming {
        self.timing
    }

    pub fn sink(&self) -> &P {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut P {
        &mut self.sink
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    pub fn snapshot(&self) -> LedSnapshot {
        LedSnapshot {
            mode: self.entity.mode(),
            on: self.entity.is_on(),
            color: self.entity.color(),
            blink_period_ms: self.entity.blink_period_ms(),
            morse_len: self.entity.morse_text().map_or(0, str::len),
            morse_cursor: self.morse.cursor(),
        }
    }

    // ========================================================================
    // Modus-Wechsel
    // ========================================================================

    /// Wechselt den Modus
    ///
    /// Stoppt beide Timer, setzt den Modus und startet genau den Timer des
    /// neuen Modus:
    /// - Light: sofort rendern, kein Timer
    /// - Blinky: periodischen Timer starten, der erste Wechsel passiert erst
    ///   beim ersten Ablauf
    /// - Morse: One-Shot-Timer mit Verzögerung 0, Wiedergabe beginnt von vorne
    ///
    /// # Fehlerbehandlung
    /// `LedError::InvalidState` wenn Morse ohne (oder mit leerem) Text
    /// angefordert wird. Der alte Modus und sein Timer bleiben dann aktiv.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), LedError> {
        if mode == Mode::Morse && !self.entity.has_morse_text() {
            error!("LED: Morse mode requested without morse code");
            return Err(LedError::InvalidState);
        }

        self.stop_timers()?;
        self.entity.set_mode(mode);
        info!("LED: Mode set to {}", mode.as_str());

        match mode {
            Mode::Light => self.render(),
            Mode::Blinky => {
                let period_ms = self.entity.blink_period_ms();
                if period_ms == 0 {
                    warn!("LED: Blink period is 0 ms, blinking as fast as possible");
                }
                self.timers.start_periodic(period_ms)?;
                info!("LED: Blinking with period {} ms", period_ms);
                Ok(())
            }
            Mode::Morse => {
                self.morse.rewind();
                self.timers.start_once(0)?;
                Ok(())
            }
        }
    }

    /// Wechselt den Modus anhand des Namens ("light", "blinky", "morse")
    pub fn set_mode_by_name(&mut self, name: &str) -> Result<(), LedError> {
        let mode = Mode::try_from(name).inspect_err(|_| error!("LED: Unknown LED mode"))?;
        self.set_mode(mode)
    }

    fn stop_timers(&mut self) -> Result<(), LedError> {
        self.timers.stop(TimerKind::Periodic)?;
        self.timers.stop(TimerKind::OneShot)?;
        Ok(())
    }

    // ========================================================================
    // Setter
    // ========================================================================

    /// Setzt den An/Aus-Zustand, rendert NICHT
    pub fn set_on(&mut self, on: bool) {
        self.entity.set_on(on);
    }

    /// Setzt die Blink-Periode, wirksam beim nächsten `set_mode(Blinky)`
    ///
    /// 0 ms wird akzeptiert und bedeutet "so schnell wie der Timer kann".
    pub fn set_blink_period(&mut self, period_ms: u32) {
        if period_ms == 0 {
            warn!("LED: Blink period of 0 ms accepted");
        }
        self.entity.set_blink_period_ms(period_ms);
    }

    /// Setzt die Farbe und rendert sofort, wenn die LED an ist
    pub fn set_color(&mut self, r: u8, g: u8, b: u8) -> Result<(), LedError> {
        self.entity.set_color(RGB8 { r, g, b });
        info!("LED: Set color to R: {}, G: {}, B: {}", r, g, b);

        if self.entity.is_on() {
            self.render()?;
        }
        Ok(())
    }

    /// Ersetzt den Morse-Text
    ///
    /// Der alte Puffer wird hier freigegeben. Der Iterator wird zurückgesetzt,
    /// damit ein neuer Text nie an einer alten Cursor-Position weiterläuft.
    pub fn set_morse_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!("LED: Morse code set ({} chars)", text.len());
        drop(self.entity.replace_morse_text(Some(text)));
        self.morse.rewind();
    }

    // ========================================================================
    // Kommandos
    // ========================================================================

    /// Führt ein Kommando der Command-Ingestion aus
    pub fn apply(&mut self, command: LedCommand) -> Result<(), LedError> {
        match command {
            LedCommand::ActivateLight { on } => {
                self.set_on(on);
                self.set_mode(Mode::Light)
            }
            LedCommand::ActivateBlinky { duration_ms } => {
                self.set_blink_period(duration_ms);
                self.set_mode(Mode::Blinky)
            }
            LedCommand::ActivateMorse { text } => {
                // Leerer Text darf eine laufende Wiedergabe nicht ersetzen
                if text.is_empty() {
                    error!("LED: Morse mode requested without morse code");
                    return Err(LedError::InvalidState);
                }
                self.set_morse_text(text);
                self.set_mode(Mode::Morse)
            }
            LedCommand::SetColor { color } => self.set_color(color.r, color.g, color.b),
            LedCommand::SetMode(mode) => self.set_mode(mode),
        }
    }

    /// Beantwortet eine Anfrage mit dem Zustand danach
    pub fn handle(&mut self, request: LedRequest) -> LedResponse {
        if let LedRequest::Command(command) = request {
            self.apply(command)?;
        }
        Ok(self.snapshot())
    }

    // ========================================================================
    // Timer-Callbacks
    // ========================================================================

    /// Dispatch eines abgelaufenen Timers
    pub fn on_timer(&mut self, timer: TimerKind) -> Result<(), LedError> {
        match (timer, self.entity.mode()) {
            (TimerKind::Periodic, Mode::Blinky) => self.on_blinky_tick(),
            (TimerKind::OneShot, Mode::Morse) => self.on_morse_tick(),
            (timer, mode) => {
                warn!(
                    "LED: Ignoring {} timer in {} mode",
                    timer,
                    mode.as_str()
                );
                Ok(())
            }
        }
    }

    /// Periodischer Timer: LED umschalten und rendern
    pub fn on_blinky_tick(&mut self) -> Result<(), LedError> {
        self.entity.set_on(!self.entity.is_on());
        self.render()
    }

    /// One-Shot-Timer: nächster Schritt der Morse-Wiedergabe
    ///
    /// Jeder Schritt rendert und startet den Timer neu, nur das Ende
    /// (`MorseStep::Done`) startet keinen Timer mehr.
    pub fn on_morse_tick(&mut self) -> Result<(), LedError> {
        let text = self.entity.morse_text().unwrap_or_default();
        if self.morse.cursor() == 0 {
            info!("LED: Starting to blink morse code {=str}", text);
        }

        match self.morse.advance(text, self.timing) {
            MorseStep::Symbol {
                symbol,
                on,
                hold_ms,
            } => {
                debug!("LED: {} for {} ms", symbol, hold_ms);
                self.morse_blink(on, hold_ms)
            }
            MorseStep::Gap { hold_ms } => {
                debug!("LED: Pausing {} ms for gap", hold_ms);
                self.morse_blink(false, hold_ms)
            }
            MorseStep::Unknown { position, byte } => {
                let err = LedError::Decode { position, byte };
                error!("LED: Skipping morse character: {}", err);
                // Weiter mit dem nächsten Zeichen statt die Wiedergabe anzuhalten
                self.timers.start_once(0)?;
                Ok(())
            }
            MorseStep::Done => {
                self.entity.set_on(false);
                self.render()?;
                info!("LED: Finished morse code");
                Ok(())
            }
        }
    }

    fn morse_blink(&mut self, on: bool, hold_ms: u32) -> Result<(), LedError> {
        self.entity.set_on(on);
        self.render()?;
        self.timers.start_once(hold_ms)?;
        Ok(())
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Überträgt An/Aus-Zustand und Farbe auf die Pixel-Ausgabe
    pub fn render(&mut self) -> Result<(), LedError> {
        let result = if self.entity.is_on() {
            self.sink
                .write_pixel(self.entity.index(), self.entity.color())
                .and_then(|()| self.sink.flush())
        } else {
            self.sink.clear().and_then(|()| self.sink.flush())
        };

        result.map_err(|e| {
            error!("LED: Render failed: {}", e);
            LedError::from(e)
        })
    }

    /// Stoppt beide Timer und gibt alle Teile zurück
    ///
    /// Wird die Entity danach gedroppt, ist auch der Morse-Text freigegeben.
    pub fn into_parts(mut self) -> Result<(LedEntity, P, T), LedError> {
        self.stop_timers()?;
        Ok((self.entity, self.sink, self.timers))
    }
}
