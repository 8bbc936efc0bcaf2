// HTTP Server Task - Nimmt LED-Kommandos als JSON entgegen
use defmt::{info, warn};
use embassy_net::Stack;
use embassy_time::Duration;
use esp_core::protocol::{
    BlinkyRequest, ColorRequest, ErrorResponse, LightRequest, ModeRequest, MorseRequest,
    StatusResponse, error_status_code,
};
use picoserve::extract::Json;
use picoserve::io::embedded_io_async;
use picoserve::response::{IntoResponse, Response, StatusCode};
use picoserve::routing::{get, post};

use crate::config::*;
use crate::{LedClient, LedCommand, LedError, LedRequest, LedResponse};

/// Antwort-Enum für alle Endpoints
/// Entweder der LED-Zustand nach dem Kommando oder ein Fehler mit Statuscode
enum ApiResponse {
    Status(StatusResponse),
    Error { status: u16, body: ErrorResponse },
}

impl From<LedResponse> for ApiResponse {
    fn from(response: LedResponse) -> Self {
        match response {
            Ok(snapshot) => ApiResponse::Status(snapshot.into()),
            Err(error) => ApiResponse::from(error),
        }
    }
}

impl From<LedError> for ApiResponse {
    fn from(error: LedError) -> Self {
        ApiResponse::Error {
            status: error_status_code(&error),
            body: error.into(),
        }
    }
}

impl IntoResponse for ApiResponse {
    async fn write_to<
        R: embedded_io_async::Read,
        W: picoserve::response::ResponseWriter<Error = R::Error>,
    >(
        self,
        connection: picoserve::response::Connection<'_, R>,
        response_writer: W,
    ) -> Result<picoserve::ResponseSent, W::Error> {
        let mut json_buffer = [0u8; JSON_RESPONSE_BUFFER_SIZE];

        let (status, written) = match &self {
            ApiResponse::Status(status) => (200, serde_json_core::to_slice(status, &mut json_buffer)),
            ApiResponse::Error { status, body } => {
                (*status, serde_json_core::to_slice(body, &mut json_buffer))
            }
        };

        let (status, body) = match written
            .ok()
            .and_then(|n| core::str::from_utf8(&json_buffer[..n]).ok())
        {
            Some(body) => (status, body),
            None => {
                warn!("HTTP: Response did not fit into JSON buffer");
                (500, r#"{"error":"response too large"}"#)
            }
        };

        Response::new(StatusCode::new(status), body)
            .with_header("Content-Type", "application/json")
            .write_to(connection, response_writer)
            .await
    }
}

/// Schickt ein Kommando an den LED-Task
async fn send_command(client: LedClient, command: LedCommand) -> ApiResponse {
    client.call(LedRequest::Command(command)).await.into()
}

/// HTTP Server Task - läuft parallel zu anderen Tasks
///
/// Endpoints (alle JSON):
/// - POST /light  `{"state":"on"|"off"}`
/// - POST /blinky `{"duration":<ms>}`
/// - POST /morse  `{"morse":"... --- ..."}`
/// - POST /color  `{"red":r,"green":g,"blue":b}`
/// - POST /mode   `{"mode":"light"|"blinky"|"morse"}`
/// - GET  /status
///
/// **Task Pool:** Diese Task wird mehrfach gespawnt für concurrent connections.
/// Alle Instanzen teilen sich den LedClient, die Anfragen werden im LED-Task
/// nacheinander abgearbeitet.
///
/// # Parameter
/// - `task_id`: Eindeutige ID für diese Server-Instanz
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
/// - `client`: Zugang zum LED-Task
#[embassy_executor::task(pool_size = 4)]
pub async fn http_server_task(task_id: usize, stack: &'static Stack<'static>, client: LedClient) {
    info!("HTTP: Server task {} starting on port {}...", task_id, HTTP_PORT);

    let app = picoserve::Router::new()
        .route(
            "/light",
            post(
                move |Json(request): Json<LightRequest, JSON_UNESCAPE_BUFFER_SIZE>| async move {
                    info!("HTTP: POST /light");
                    send_command(client, request.into()).await
                },
            ),
        )
        .route(
            "/blinky",
            post(
                move |Json(request): Json<BlinkyRequest, JSON_UNESCAPE_BUFFER_SIZE>| async move {
                    info!("HTTP: POST /blinky ({} ms)", request.duration);
                    send_command(client, request.into()).await
                },
            ),
        )
        .route(
            "/morse",
            post(
                move |Json(request): Json<MorseRequest, JSON_UNESCAPE_BUFFER_SIZE>| async move {
                    info!("HTTP: POST /morse ({} chars)", request.morse.len());
                    send_command(client, request.into()).await
                },
            ),
        )
        .route(
            "/color",
            post(
                move |Json(request): Json<ColorRequest, JSON_UNESCAPE_BUFFER_SIZE>| async move {
                    info!("HTTP: POST /color");
                    send_command(client, request.into()).await
                },
            ),
        )
        .route(
            "/mode",
            post(
                move |Json(request): Json<ModeRequest, JSON_UNESCAPE_BUFFER_SIZE>| async move {
                    info!("HTTP: POST /mode");
                    match LedCommand::try_from(request) {
                        Ok(command) => send_command(client, command).await,
                        Err(error) => {
                            warn!("HTTP: Unknown LED mode requested");
                            ApiResponse::from(error)
                        }
                    }
                },
            ),
        )
        .route(
            "/status",
            get(move || async move { ApiResponse::from(client.call(LedRequest::Status).await) }),
        );

    // Server-Konfiguration
    let config = picoserve::Config::new(picoserve::Timeouts {
        start_read_request: Some(Duration::from_secs(5)),
        read_request: Some(Duration::from_secs(1)),
        write: Some(Duration::from_secs(1)),
        persistent_start_read_request: Some(Duration::from_secs(5)),
    })
    .keep_connection_alive();

    // HTTP-Buffer für Requests/Responses
    let mut http_buffer = [0u8; HTTP_BUFFER_SIZE];

    // TCP-Buffers für Socket
    let mut rx_buffer = [0u8; TCP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TCP_TX_BUFFER_SIZE];

    let server = picoserve::Server::new(&app, &config, &mut http_buffer);

    // task_id ermöglicht mehrere concurrent Server-Instanzen
    let _ = server
        .listen_and_serve(task_id, *stack, HTTP_PORT, &mut rx_buffer, &mut tx_buffer)
        .await;

    info!("HTTP: Server task {} ended", task_id);
}

