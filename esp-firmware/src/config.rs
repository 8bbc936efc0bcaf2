// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die RGB LED (WS2812/Neopixel), siehe `led_task`
pub const LED_GPIO_PIN: u8 = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Anzahl der LEDs im Strip (nur die Onboard-LED)
pub const LED_COUNT: usize = 1;

/// Position der gesteuerten LED im Strip
pub const LED_INDEX: usize = 0;

/// Länge eines Morse-Punktes in Millisekunden
/// Strich und Pausen werden daraus abgeleitet (3x, 7x)
pub const MORSE_DOT_MS: u32 = 100;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Wartezeit nach einem WiFi-Fehler vor dem nächsten Versuch
pub const WIFI_RETRY_DELAY_SECS: u64 = 5;

/// Wartezeit nach einem Disconnect vor dem Reconnect
pub const WIFI_RECONNECT_DELAY_SECS: u64 = 2;

/// Poll-Intervall beim Warten auf Link und DHCP
pub const DHCP_POLL_INTERVAL_MS: u64 = 500;

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
/// Auch für die Morse-Texte der LED
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

/// Anzahl Sockets im Netzwerk-Stack (HTTP-Tasks + Reserve)
pub const NET_SOCKET_COUNT: usize = 6;

// ============================================================================
// HTTP Server Konfiguration
// ============================================================================

/// HTTP Port
pub const HTTP_PORT: u16 = 80;

/// Anzahl paralleler HTTP-Server-Tasks
/// Muss mit `pool_size` von `http_server_task` übereinstimmen
pub const HTTP_TASK_COUNT: usize = 4;

/// HTTP Buffer-Größe in Bytes
/// Für Request-Header und JSON-Body (Morse-Texte bis ~256 Zeichen)
pub const HTTP_BUFFER_SIZE: usize = 1024;

/// TCP RX Buffer-Größe in Bytes
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// TCP TX Buffer-Größe in Bytes
pub const TCP_TX_BUFFER_SIZE: usize = 1024;

/// Puffer für Escape-Sequenzen in JSON-Strings
pub const JSON_UNESCAPE_BUFFER_SIZE: usize = 256;

/// JSON Serialisierungs-Buffer für Antworten
/// Für {"mode":"blinky","state":"on","rgb":{...},"blink_period_ms":...}
pub const JSON_RESPONSE_BUFFER_SIZE: usize = 192;
