//! Integration Tests für Pixel-Ausgabe und LED Entity
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockPixelSink

mod common;

use common::{MockPixelSink, SinkCall, mock_controller};
use esp_core::{
    DEFAULT_COLOR, HardwareError, LedConfig, LedEntity, LedError, Mode, ModeController,
    PixelSink, TimerSchedule,
};
use rgb::RGB8;

// ============================================================================
// Tests: MockPixelSink
// ============================================================================

#[test]
fn test_mock_pixel_sink_write_and_flush() {
    let mut mock = MockPixelSink::new();
    let color = RGB8 { r: 10, g: 0, b: 0 };

    assert_eq!(mock.flush_count, 0);
    assert_eq!(mock.shown(), None);

    mock.write_pixel(0, color).unwrap();
    mock.flush().unwrap();

    assert_eq!(mock.flush_count, 1);
    assert_eq!(mock.shown(), Some(color));
    assert_eq!(mock.calls, vec![SinkCall::Write(0, color), SinkCall::Flush]);
}

#[test]
fn test_mock_pixel_sink_rejects_foreign_index() {
    let mut mock = MockPixelSink::new();
    let result = mock.write_pixel(3, RGB8 { r: 1, g: 2, b: 3 });
    assert_eq!(result, Err(HardwareError::PixelOutOfRange));
    assert!(mock.calls.is_empty());
}

#[test]
fn test_mock_pixel_sink_recovers_after_fail() {
    let mut mock = MockPixelSink::new();
    mock.fail_next_flush = true;

    // Erster Flush schlägt fehl
    assert_eq!(mock.flush(), Err(HardwareError::PixelWriteFailed));
    assert_eq!(mock.flush_count, 0);

    // Zweiter Flush klappt
    assert!(mock.flush().is_ok());
    assert_eq!(mock.flush_count, 1);
}

// ============================================================================
// Tests: LedEntity
// ============================================================================

#[test]
fn test_entity_defaults() {
    let led = LedEntity::new(0);
    assert_eq!(led.config(), &LedConfig::default());
    assert_eq!(led.color(), DEFAULT_COLOR);
    assert!(!led.is_on());
    assert_eq!(led.mode(), Mode::Light);
}

#[test]
fn test_entity_with_custom_config() {
    let config = LedConfig {
        on: true,
        color: RGB8 { r: 0, g: 0, b: 99 },
        ..LedConfig::default()
    };
    let led = LedEntity::with_config(0, config);
    assert!(led.is_on());
    assert_eq!(led.color().b, 99);
}

// ============================================================================
// Tests: Render
// ============================================================================

#[test]
fn test_render_on_writes_color_then_flushes() {
    let mut controller = mock_controller();
    controller.set_on(true);
    controller.render().unwrap();

    assert_eq!(
        controller.sink().calls,
        vec![SinkCall::Write(0, DEFAULT_COLOR), SinkCall::Flush]
    );
}

#[test]
fn test_render_off_clears_then_flushes() {
    let mut controller = mock_controller();
    controller.render().unwrap();

    assert_eq!(controller.sink().calls, vec![SinkCall::Clear, SinkCall::Flush]);
    assert_eq!(controller.sink().shown(), None);
}

#[test]
fn test_render_propagates_hardware_error() {
    let mut controller = mock_controller();
    controller.sink_mut().fail_next_flush = true;

    assert_eq!(
        controller.render(),
        Err(LedError::Hardware(HardwareError::PixelWriteFailed))
    );
}

#[test]
fn test_render_at_wrong_index_fails() {
    let mut controller =
        ModeController::new(LedEntity::new(5), MockPixelSink::new(), TimerSchedule::new());
    controller.set_on(true);

    assert_eq!(
        controller.render(),
        Err(LedError::Hardware(HardwareError::PixelOutOfRange))
    );
}

#[test]
fn test_snapshot_reflects_entity() {
    let mut controller = mock_controller();
    controller.set_blink_period(250);
    controller.set_morse_text("-.-");

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.mode, Mode::Light);
    assert_eq!(snapshot.blink_period_ms, 250);
    assert_eq!(snapshot.morse_len, 3);
    assert_eq!(snapshot.morse_cursor, 0);
}
