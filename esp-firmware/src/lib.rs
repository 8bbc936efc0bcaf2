// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Heap für Morse-Texte und WiFi
extern crate alloc;

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{LedCommand, LedError, LedRequest, LedResponse, LedSnapshot, Mode};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::mutex::Mutex;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Der LED-Task ist der einzige Besitzer des Mode Controllers. HTTP-Tasks
// schicken Anfragen über den Request-Channel und warten auf die Antwort im
// Response-Channel. Timer-Abläufe und Kommandos laufen dadurch nie parallel.

/// Anfrage mit laufender Nummer, die Antwort trägt dieselbe Nummer
pub type LedEnvelope = (u32, LedRequest);

/// Antwort mit der Nummer der Anfrage
pub type LedReply = (u32, LedResponse);

/// Channel für Anfragen (HTTP → LED Task)
/// - 1: Nachrichten-Kapazität (nur eine Anfrage zur Zeit)
pub type LedRequestChannel = Channel<NoopRawMutex, LedEnvelope, 1>;

/// Sender für Anfragen (HTTP-Tasks)
pub type LedRequestSender = Sender<'static, NoopRawMutex, LedEnvelope, 1>;

/// Receiver für Anfragen (LED Task)
pub type LedRequestReceiver = Receiver<'static, NoopRawMutex, LedEnvelope, 1>;

/// Channel für Antworten (LED Task → HTTP)
pub type LedResponseChannel = Channel<NoopRawMutex, LedReply, 1>;

/// Sender für Antworten (LED Task)
pub type LedResponseSender = Sender<'static, NoopRawMutex, LedReply, 1>;

/// Receiver für Antworten (HTTP-Tasks)
pub type LedResponseReceiver = Receiver<'static, NoopRawMutex, LedReply, 1>;

/// Sperre mit Anfrage-Zähler, immer nur ein HTTP-Task hat eine Anfrage offen
pub type LedClientLock = Mutex<NoopRawMutex, u32>;

/// Zugang der HTTP-Tasks zum LED-Task
///
/// Copy, damit jede Route ihre eigene Kopie in den Handler mitnehmen kann.
#[derive(Clone, Copy)]
pub struct LedClient {
    requests: LedRequestSender,
    responses: LedResponseReceiver,
    lock: &'static LedClientLock,
}

impl LedClient {
    pub fn new(
        requests: LedRequestSender,
        responses: LedResponseReceiver,
        lock: &'static LedClientLock,
    ) -> Self {
        Self {
            requests,
            responses,
            lock,
        }
    }

    /// Schickt eine Anfrage an den LED-Task und wartet auf die Antwort
    pub async fn call(&self, request: LedRequest) -> LedResponse {
        let mut counter = self.lock.lock().await;
        *counter = counter.wrapping_add(1);
        let id = *counter;

        self.requests.send((id, request)).await;
        loop {
            let (reply_id, response) = self.responses.receive().await;
            if reply_id == id {
                return response;
            }
            // Antwort einer abgebrochenen Anfrage (z.B. HTTP-Timeout) verwerfen
        }
    }
}
