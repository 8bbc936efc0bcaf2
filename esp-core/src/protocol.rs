//! HTTP-Protokoll-Definitionen
//!
//! JSON-Bodies der POST-Endpoints und die Antworten des Servers.
//! Nur mit Feature `serde` verfügbar.

use alloc::string::String;
use rgb::RGB8;
use serde::{Deserialize, Serialize};

use crate::command::LedCommand;
use crate::error::LedError;
use crate::types::{LedSnapshot, Mode};

/// An/Aus für POST /light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LightState {
    On,
    Off,
}

/// POST /light  `{"state":"on"}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LightRequest {
    pub state: LightState,
}

/// POST /blinky  `{"duration":500}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BlinkyRequest {
    pub duration: u32,
}

/// POST /morse  `{"morse":"... --- ..."}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MorseRequest {
    pub morse: String,
}

/// POST /color  `{"red":255,"green":0,"blue":0}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ColorRequest {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// POST /mode  `{"mode":"blinky"}`
///
/// Der Modus bleibt ein String, damit unbekannte Namen als
/// `LedError::InvalidMode` (statt als JSON-Fehler) gemeldet werden.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModeRequest {
    pub mode: String,
}

impl From<LightRequest> for LedCommand {
    fn from(request: LightRequest) -> Self {
        LedCommand::ActivateLight {
            on: request.state == LightState::On,
        }
    }
}

impl From<BlinkyRequest> for LedCommand {
    fn from(request: BlinkyRequest) -> Self {
        LedCommand::ActivateBlinky {
            duration_ms: request.duration,
        }
    }
}

impl From<MorseRequest> for LedCommand {
    fn from(request: MorseRequest) -> Self {
        LedCommand::ActivateMorse {
            text: request.morse,
        }
    }
}

impl From<ColorRequest> for LedCommand {
    fn from(request: ColorRequest) -> Self {
        LedCommand::SetColor {
            color: RGB8 {
                r: request.red,
                g: request.green,
                b: request.blue,
            },
        }
    }
}

impl TryFrom<ModeRequest> for LedCommand {
    type Error = LedError;

    fn try_from(request: ModeRequest) -> Result<Self, Self::Error> {
        Mode::try_from(request.mode.as_str()).map(LedCommand::SetMode)
    }
}

/// RGB-Struct für JSON-Serialisierung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Antwort auf jede erfolgreiche Anfrage und auf GET /status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    pub mode: &'static str,
    pub state: LightState,
    pub rgb: RgbColor,
    pub blink_period_ms: u32,
    pub morse_length: usize,
    pub morse_cursor: usize,
}

impl From<LedSnapshot> for StatusResponse {
    fn from(snapshot: LedSnapshot) -> Self {
        Self {
            mode: snapshot.mode.as_str(),
            state: if snapshot.on {
                LightState::On
            } else {
                LightState::Off
            },
            rgb: RgbColor {
                r: snapshot.color.r,
                g: snapshot.color.g,
                b: snapshot.color.b,
            },
            blink_period_ms: snapshot.blink_period_ms,
            morse_length: snapshot.morse_len,
            morse_cursor: snapshot.morse_cursor,
        }
    }
}

/// Fehler-Antwort `{"error":"..."}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl From<LedError> for ErrorResponse {
    fn from(error: LedError) -> Self {
        Self {
            error: error.message(),
        }
    }
}

/// HTTP-Statuscode für einen Fehler des Mode Controllers
pub fn error_status_code(error: &LedError) -> u16 {
    match error {
        LedError::InvalidMode | LedError::Decode { .. } => 400,
        LedError::InvalidState => 409,
        LedError::Hardware(_) => 500,
    }
}
