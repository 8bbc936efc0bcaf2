//! Integration Tests für das HTTP-Protokoll
//!
//! JSON-Bodies werden mit serde-json-core geparst, genau wie im HTTP-Task.

mod common;

use common::mock_controller;
use esp_core::protocol::{
    BlinkyRequest, ColorRequest, ErrorResponse, LightRequest, LightState, ModeRequest,
    MorseRequest, StatusResponse, error_status_code,
};
use esp_core::{HardwareError, LedCommand, LedError, Mode};
use rgb::RGB8;

fn parse<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, serde_json_core::de::Error> {
    serde_json_core::from_slice::<T>(json.as_bytes()).map(|(value, _)| value)
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    let mut buffer = [0u8; 256];
    let n = serde_json_core::to_slice(value, &mut buffer).unwrap();
    String::from_utf8(buffer[..n].to_vec()).unwrap()
}

// ============================================================================
// Tests: Requests
// ============================================================================

#[test]
fn test_light_on_request() {
    let request: LightRequest = parse(r#"{"state":"on"}"#).unwrap();
    assert_eq!(request.state, LightState::On);
    assert_eq!(
        LedCommand::from(request),
        LedCommand::ActivateLight { on: true }
    );
}

#[test]
fn test_light_off_request() {
    let request: LightRequest = parse(r#"{"state":"off"}"#).unwrap();
    assert_eq!(
        LedCommand::from(request),
        LedCommand::ActivateLight { on: false }
    );
}

#[test]
fn test_light_unknown_state_is_rejected() {
    assert!(parse::<LightRequest>(r#"{"state":"dimmed"}"#).is_err());
}

#[test]
fn test_blinky_request() {
    let request: BlinkyRequest = parse(r#"{"duration":750}"#).unwrap();
    assert_eq!(
        LedCommand::from(request),
        LedCommand::ActivateBlinky { duration_ms: 750 }
    );
}

#[test]
fn test_morse_request() {
    let request: MorseRequest = parse(r#"{"morse":"... --- ..."}"#).unwrap();
    assert_eq!(
        LedCommand::from(request),
        LedCommand::ActivateMorse {
            text: "... --- ...".into()
        }
    );
}

#[test]
fn test_color_request() {
    let request: ColorRequest = parse(r#"{"red":255,"green":128,"blue":0}"#).unwrap();
    assert_eq!(
        LedCommand::from(request),
        LedCommand::SetColor {
            color: RGB8 {
                r: 255,
                g: 128,
                b: 0
            }
        }
    );
}

#[test]
fn test_color_out_of_range_is_rejected() {
    assert!(parse::<ColorRequest>(r#"{"red":256,"green":0,"blue":0}"#).is_err());
}

#[test]
fn test_mode_request() {
    let request: ModeRequest = parse(r#"{"mode":"morse"}"#).unwrap();
    assert_eq!(
        LedCommand::try_from(request),
        Ok(LedCommand::SetMode(Mode::Morse))
    );
}

#[test]
fn test_unknown_mode_request_is_invalid_mode() {
    let request: ModeRequest = parse(r#"{"mode":"rainbow"}"#).unwrap();
    assert_eq!(LedCommand::try_from(request), Err(LedError::InvalidMode));
}

// ============================================================================
// Tests: Responses
// ============================================================================

#[test]
fn test_status_response_json() {
    let controller = mock_controller();
    let status = StatusResponse::from(controller.snapshot());

    assert_eq!(
        to_json(&status),
        r#"{"mode":"light","state":"off","rgb":{"r":25,"g":25,"b":25},"blink_period_ms":500,"morse_length":0,"morse_cursor":0}"#
    );
}

#[test]
fn test_status_response_after_morse_start() {
    let mut controller = mock_controller();
    let snapshot = controller
        .handle(LedCommand::ActivateMorse { text: "-.".into() }.into())
        .unwrap();
    let status = StatusResponse::from(snapshot);

    assert_eq!(status.mode, "morse");
    assert_eq!(status.morse_length, 2);
    assert_eq!(status.morse_cursor, 0);
}

#[test]
fn test_error_response_json() {
    let error = ErrorResponse::from(LedError::InvalidState);
    assert_eq!(to_json(&error), r#"{"error":"no morse code set"}"#);
}

#[test]
fn test_error_status_codes() {
    assert_eq!(error_status_code(&LedError::InvalidMode), 400);
    assert_eq!(
        error_status_code(&LedError::Decode {
            position: 0,
            byte: b'?'
        }),
        400
    );
    assert_eq!(error_status_code(&LedError::InvalidState), 409);
    assert_eq!(
        error_status_code(&LedError::Hardware(HardwareError::PixelWriteFailed)),
        500
    );
}
