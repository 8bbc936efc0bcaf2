//! Morse-Code Encoding und Wiedergabe-Iterator
//!
//! Der Morse-Text besteht nur aus den Zeichen `.` `-` ` ` und `/`.
//! Jeder Aufruf von [`MorseIterator::advance`] entspricht einem Ablauf des
//! One-Shot-Timers und liefert, was die LED als nächstes tun soll und wie
//! lange bis zum nächsten Ablauf gewartet wird.

/// Länge eines Punktes in Millisekunden
pub const DEFAULT_DOT_MS: u32 = 100;

/// Zeitbasis der Morse-Wiedergabe
///
/// Alle Längen sind Vielfache der Punkt-Länge:
/// Strich = 3, Zeichen-Pause = 3, Wort-Pause = 7, Lücke zwischen Punkt/Strich = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MorseTiming {
    dot_ms: u32,
}

impl MorseTiming {
    pub const fn new(dot_ms: u32) -> Self {
        Self { dot_ms }
    }

    pub const fn dot_ms(self) -> u32 {
        self.dot_ms
    }

    pub const fn dash_ms(self) -> u32 {
        self.dot_ms * 3
    }

    pub const fn char_sep_ms(self) -> u32 {
        self.dash_ms()
    }

    pub const fn word_sep_ms(self) -> u32 {
        self.dot_ms * 7
    }

    pub const fn gap_ms(self) -> u32 {
        self.dot_ms
    }
}

impl Default for MorseTiming {
    fn default() -> Self {
        Self::new(DEFAULT_DOT_MS)
    }
}

/// Unterstützte Zeichen im Morse-Text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MorseSymbol {
    /// `.`
    Dot,
    /// `-`
    Dash,
    /// ` ` trennt Buchstaben
    CharSeparator,
    /// `/` trennt Wörter
    WordSeparator,
}

impl MorseSymbol {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'.' => Some(Self::Dot),
            b'-' => Some(Self::Dash),
            b' ' => Some(Self::CharSeparator),
            b'/' => Some(Self::WordSeparator),
            _ => None,
        }
    }

    /// Punkt und Strich leuchten, Trennzeichen sind Pausen
    pub fn is_tone(self) -> bool {
        matches!(self, Self::Dot | Self::Dash)
    }

    pub fn duration_ms(self, timing: MorseTiming) -> u32 {
        match self {
            Self::Dot => timing.dot_ms(),
            Self::Dash => timing.dash_ms(),
            Self::CharSeparator => timing.char_sep_ms(),
            Self::WordSeparator => timing.word_sep_ms(),
        }
    }
}

/// Zwischen zwei aufeinanderfolgenden Punkten/Strichen muss eine Lücke liegen
pub fn needs_gap(current: u8, next: u8) -> bool {
    let is_tone = |byte| matches!(byte, b'.' | b'-');
    is_tone(current) && is_tone(next)
}

/// Zustand des Iterators vor dem nächsten Timer-Ablauf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MorseState {
    /// Cursor steht auf 0, Länge wird beim nächsten Ablauf neu berechnet
    Start,
    /// Nächster Ablauf rendert die Lücke zwischen Punkt/Strich
    Gap,
    /// Nächster Ablauf liest das Zeichen unter dem Cursor
    Symbol,
    /// Ende des Textes erreicht
    Done,
}

/// Ergebnis eines Timer-Ablaufs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MorseStep {
    /// LED an (Punkt/Strich) oder aus (Trennzeichen) für `hold_ms`
    Symbol {
        symbol: MorseSymbol,
        on: bool,
        hold_ms: u32,
    },
    /// LED aus für `hold_ms`, Cursor bleibt stehen
    Gap { hold_ms: u32 },
    /// Unbekanntes Zeichen wurde übersprungen
    Unknown { position: usize, byte: u8 },
    /// Wiedergabe beendet, Cursor wieder auf 0
    Done,
}

/// Wiedergabe-Cursor über den Morse-Text der LED
///
/// Wird einmal zusammen mit der LED erstellt und für jede Wiedergabe
/// wiederverwendet. Der Text selbst gehört der `LedEntity` und wird bei jedem
/// Schritt nur ausgeliehen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MorseIterator {
    cursor: usize,
    length: usize,
    in_gap: bool,
}

impl MorseIterator {
    pub const fn new() -> Self {
        Self {
            cursor: 0,
            length: 0,
            in_gap: false,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Länge des Textes beim letzten Start der Wiedergabe
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn in_gap(&self) -> bool {
        self.in_gap
    }

    pub fn state(&self) -> MorseState {
        if self.cursor == 0 {
            MorseState::Start
        } else if self.cursor >= self.length {
            MorseState::Done
        } else if self.in_gap {
            MorseState::Gap
        } else {
            MorseState::Symbol
        }
    }

    /// Setzt den Cursor zurück, der nächste Ablauf beginnt von vorne
    pub fn rewind(&mut self) {
        self.cursor = 0;
        self.in_gap = false;
    }

    /// Verarbeitet einen Timer-Ablauf
    ///
    /// Reihenfolge: Start (Länge neu berechnen) → Done → Gap → Symbol.
    /// Nach einem Punkt/Strich, auf den direkt ein weiterer Punkt/Strich
    /// folgt, wird `in_gap` gesetzt.
    pub fn advance(&mut self, text: &str, timing: MorseTiming) -> MorseStep {
        let bytes = text.as_bytes();

        if self.cursor == 0 {
            self.length = bytes.len();
            self.in_gap = false;
        }

        // Text kann seit dem Start kürzer geworden sein
        let Some(&current) = bytes.get(self.cursor).filter(|_| self.cursor < self.length) else {
            self.rewind();
            return MorseStep::Done;
        };

        if self.in_gap {
            self.in_gap = false;
            return MorseStep::Gap {
                hold_ms: timing.gap_ms(),
            };
        }

        let position = self.cursor;
        self.cursor += 1;

        if self.cursor < self.length
            && bytes
                .get(self.cursor)
                .is_some_and(|&next| needs_gap(current, next))
        {
            self.in_gap = true;
        }

        match MorseSymbol::from_byte(current) {
            Some(symbol) => MorseStep::Symbol {
                symbol,
                on: symbol.is_tone(),
                hold_ms: symbol.duration_ms(timing),
            },
            None => MorseStep::Unknown {
                position,
                byte: current,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot() -> MorseStep {
        MorseStep::Symbol {
            symbol: MorseSymbol::Dot,
            on: true,
            hold_ms: 100,
        }
    }

    #[test]
    fn test_timing_defaults() {
        let timing = MorseTiming::default();
        assert_eq!(timing.dot_ms(), 100);
        assert_eq!(timing.dash_ms(), 300);
        assert_eq!(timing.char_sep_ms(), 300);
        assert_eq!(timing.word_sep_ms(), 700);
        assert_eq!(timing.gap_ms(), 100);
    }

    #[test]
    fn test_symbol_table() {
        assert_eq!(MorseSymbol::from_byte(b'.'), Some(MorseSymbol::Dot));
        assert_eq!(MorseSymbol::from_byte(b'/'), Some(MorseSymbol::WordSeparator));
        assert_eq!(MorseSymbol::from_byte(b'a'), None);
        assert!(!MorseSymbol::CharSeparator.is_tone());
    }

    #[test]
    fn test_needs_gap_only_between_tones() {
        assert!(needs_gap(b'.', b'-'));
        assert!(needs_gap(b'-', b'-'));
        assert!(!needs_gap(b'.', b' '));
        assert!(!needs_gap(b'/', b'.'));
    }

    #[test]
    fn test_three_dots_insert_gaps() {
        let timing = MorseTiming::default();
        let mut it = MorseIterator::new();

        assert_eq!(it.advance("...", timing), dot());
        assert_eq!(it.state(), MorseState::Gap);
        assert_eq!(it.advance("...", timing), MorseStep::Gap { hold_ms: 100 });
        assert_eq!(it.advance("...", timing), dot());
        assert_eq!(it.advance("...", timing), MorseStep::Gap { hold_ms: 100 });
        assert_eq!(it.advance("...", timing), dot());
        assert_eq!(it.state(), MorseState::Done);
        assert_eq!(it.advance("...", timing), MorseStep::Done);
        assert_eq!(it.cursor(), 0);
    }

    #[test]
    fn test_gap_does_not_move_cursor() {
        let timing = MorseTiming::default();
        let mut it = MorseIterator::new();

        it.advance(".-", timing);
        assert_eq!(it.cursor(), 1);
        assert!(it.in_gap());
        it.advance(".-", timing);
        assert_eq!(it.cursor(), 1);
        assert!(!it.in_gap());
    }

    #[test]
    fn test_start_recomputes_length() {
        let timing = MorseTiming::default();
        let mut it = MorseIterator::new();

        it.advance(".", timing);
        assert_eq!(it.length(), 1);
        assert_eq!(it.advance(".", timing), MorseStep::Done);

        it.advance("-- --", timing);
        assert_eq!(it.length(), 5);
    }

    #[test]
    fn test_unknown_byte_is_reported_and_skipped() {
        let timing = MorseTiming::default();
        let mut it = MorseIterator::new();

        assert_eq!(
            it.advance("x.", timing),
            MorseStep::Unknown {
                position: 0,
                byte: b'x'
            }
        );
        assert_eq!(it.advance("x.", timing), dot());
    }

    #[test]
    fn test_empty_text_is_done_immediately() {
        let mut it = MorseIterator::new();
        assert_eq!(it.advance("", MorseTiming::default()), MorseStep::Done);
    }

    #[test]
    fn test_shortened_text_finishes_instead_of_panicking() {
        let timing = MorseTiming::default();
        let mut it = MorseIterator::new();

        it.advance("- - -", timing);
        it.advance("- - -", timing);
        assert_eq!(it.advance("-", timing), MorseStep::Done);
        assert_eq!(it.cursor(), 0);
    }
}
