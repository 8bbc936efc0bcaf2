// LED Task - Besitzt den Mode Controller und treibt dessen Timer
use defmt::{error, info};
use embassy_futures::select::{Either, select};
use embassy_time::{Instant, Timer};
use esp_core::{LedEntity, Mode, ModeController, MorseTiming, PixelSink, TimerSchedule};
use esp_hal_smartled::smart_led_buffer;

use crate::config::{LED_COUNT, LED_INDEX, MORSE_DOT_MS, RMT_CLOCK_MHZ};
use crate::hal::RmtPixelSink;
use crate::{LedRequestReceiver, LedResponseSender};

/// Ereignis der Hauptschleife
enum LedEvent {
    Request(crate::LedEnvelope),
    TimerDue,
}

/// LED Logic - Testbare Logik ohne direkte Hardware-Abhängigkeit
///
/// Der Task ist der einzige Besitzer von LED Entity, Morse-Iterator und
/// Timern. Er wartet gleichzeitig auf:
/// - Anfragen der HTTP-Tasks (Request-Channel)
/// - den nächsten fälligen Timer des `TimerSchedule`
///
/// Weil beides in derselben Schleife abgearbeitet wird, kann ein Timer-Callback
/// nie parallel zu einem Modus-Wechsel oder zum Ersetzen des Morse-Textes
/// laufen. Ein gestoppter Timer verschwindet sofort aus dem Schedule.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `P: PixelSink` ermöglicht:
/// - Real Hardware (RmtPixelSink) im Production-Code
/// - Mock Implementation (MockPixelSink) in Tests
pub async fn led_logic<P: PixelSink>(
    mut controller: ModeController<P, TimerSchedule>,
    requests: LedRequestReceiver,
    responses: LedResponseSender,
) -> ! {
    // Nach dem Flashen/Booten: LED aus, Light-Modus
    controller.timers_mut().set_now(Instant::now().as_millis());
    controller.set_on(false);
    if let Err(e) = controller.set_mode(Mode::Light) {
        error!("LED: Initial render failed: {}", e);
    }
    info!("LED: Ready at index {}", controller.entity().index());

    loop {
        let event = match controller.timers().next_due() {
            Some((_, due_ms)) => {
                match select(requests.receive(), Timer::at(Instant::from_millis(due_ms))).await {
                    Either::First(envelope) => LedEvent::Request(envelope),
                    Either::Second(()) => LedEvent::TimerDue,
                }
            }
            None => LedEvent::Request(requests.receive().await),
        };

        controller.timers_mut().set_now(Instant::now().as_millis());

        match event {
            LedEvent::Request((id, request)) => {
                info!("LED: Request received: {}", request);
                let response = controller.handle(request);
                if let Err(e) = &response {
                    error!("LED: Request failed: {}", e);
                }
                responses.send((id, response)).await;
            }
            LedEvent::TimerDue => {
                if let Some(timer) = controller.timers_mut().take_due() {
                    if let Err(e) = controller.on_timer(timer) {
                        error!("LED: {} timer callback failed: {}", timer, e);
                    }
                }
            }
        }
    }
}

/// LED Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `led_logic()` Funktion auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `requests`: Channel Receiver für Anfragen der HTTP-Tasks
/// - `responses`: Channel Sender für die Antworten
#[embassy_executor::task]
pub async fn led_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    requests: LedRequestReceiver,
    responses: LedResponseSender,
) {
    // Buffer für SmartLED Daten erstellen
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(LED_COUNT);

    // Hardware initialisieren: RmtPixelSink kapselt RMT + SmartLED
    let sink = match RmtPixelSink::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Ok(sink) => sink,
        Err(e) => {
            error!("LED: RMT initialization failed: {}", e);
            return;
        }
    };

    let controller = ModeController::new(LedEntity::new(LED_INDEX), sink, TimerSchedule::new())
        .with_timing(MorseTiming::new(MORSE_DOT_MS));

    led_logic(controller, requests, responses).await
}
