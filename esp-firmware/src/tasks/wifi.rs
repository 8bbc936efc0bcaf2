// WiFi Tasks - Station-Modus, Netzwerk-Stack und DHCP
//
// Die LED-Steuerung ist nur über HTTP erreichbar. Solange keine IP-Adresse
// vorhanden ist, läuft der LED-Task trotzdem normal weiter.
use defmt::{Debug2Format, error, info, warn};
use embassy_net::{Runner, Stack};
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController, WifiDevice, WifiEvent};

use crate::config::{
    DHCP_POLL_INTERVAL_MS, WIFI_PASSWORD, WIFI_RECONNECT_DELAY_SECS, WIFI_RETRY_DELAY_SECS,
    WIFI_SSID,
};

/// Startet den WiFi-Controller im Station-Modus
async fn start_station(controller: &mut WifiController<'static>) -> bool {
    let client_config = ModeConfig::Client(
        ClientConfig::default()
            .with_ssid(WIFI_SSID.into())
            .with_password(WIFI_PASSWORD.into()),
    );

    if let Err(e) = controller.set_config(&client_config) {
        error!("WiFi: Failed to set configuration: {}", Debug2Format(&e));
        return false;
    }

    if let Err(e) = controller.start_async().await {
        error!("WiFi: Failed to start: {}", Debug2Format(&e));
        return false;
    }

    info!("WiFi: Station started");
    true
}

/// WiFi Connection Task
///
/// Verbindet mit dem Access Point und verbindet nach einem Disconnect neu.
/// Fehler beim Starten oder Verbinden werden nach `WIFI_RETRY_DELAY_SECS`
/// erneut versucht.
#[embassy_executor::task]
pub async fn connection_task(mut controller: WifiController<'static>) {
    info!("WiFi: Starting connection task");

    loop {
        if matches!(controller.is_started(), Ok(false)) && !start_station(&mut controller).await {
            Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
            continue;
        }

        info!("WiFi: Connecting to '{}'...", WIFI_SSID);
        if let Err(e) = controller.connect_async().await {
            error!("WiFi: Connection failed: {}", Debug2Format(&e));
            Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
            continue;
        }
        info!("WiFi: Connected");

        controller.wait_for_event(WifiEvent::StaDisconnected).await;
        warn!("WiFi: Disconnected from AP, reconnecting...");

        Timer::after(Duration::from_secs(WIFI_RECONNECT_DELAY_SECS)).await;
    }
}

/// Network Task - Treibt den embassy-net Stack
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}

/// DHCP Monitor Task
///
/// Wartet auf Link und IP-Adresse und loggt danach, unter welcher Adresse
/// die HTTP-Schnittstelle erreichbar ist.
#[embassy_executor::task]
pub async fn dhcp_task(stack: &'static Stack<'static>) {
    while !stack.is_link_up() {
        Timer::after(Duration::from_millis(DHCP_POLL_INTERVAL_MS)).await;
    }

    info!("WiFi: Link is up, waiting for IP address...");

    let config = loop {
        if let Some(config) = stack.config_v4() {
            break config;
        }
        Timer::after(Duration::from_millis(DHCP_POLL_INTERVAL_MS)).await;
    };

    info!("WiFi: Got IP address {}", Debug2Format(&config.address.address()));
    info!("  Gateway: {}", Debug2Format(&config.gateway));
    info!("HTTP: LED API reachable at http://{}/status", Debug2Format(&config.address.address()));
}
