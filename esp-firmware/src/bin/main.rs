// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (WiFi und Morse-Texte)
extern crate alloc;

use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, Stack, StackResources};
use embassy_time::{Duration, Timer};

use esp_hal::clock::CpuClock;
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use esp_led_modes::config::{EXTRA_HEAP_SIZE, HTTP_TASK_COUNT, NET_SOCKET_COUNT, WIFI_HEAP_SIZE};
use esp_led_modes::tasks::{connection_task, dhcp_task, http_server_task, led_task, net_task};
use esp_led_modes::{LedClient, LedClientLock, LedRequestChannel, LedResponseChannel};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Reihenfolge beim Start:
/// 1. Hardware, Heap und Embassy Runtime
/// 2. Channels zwischen HTTP-Tasks und LED-Task
/// 3. LED-Task (LED aus, Light-Modus)
/// 4. WiFi und HTTP-Server
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    esp_alloc::heap_allocator!(
        #[esp_hal::ram(reclaimed)]
        size: WIFI_HEAP_SIZE
    );
    esp_alloc::heap_allocator!(size: EXTRA_HEAP_SIZE);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Channels zum LED-Task: Anfragen hin, Antworten zurück
    static REQUEST_CHANNEL: static_cell::StaticCell<LedRequestChannel> =
        static_cell::StaticCell::new();
    let request_channel = &*REQUEST_CHANNEL.init(LedRequestChannel::new());

    static RESPONSE_CHANNEL: static_cell::StaticCell<LedResponseChannel> =
        static_cell::StaticCell::new();
    let response_channel = &*RESPONSE_CHANNEL.init(LedResponseChannel::new());

    static CLIENT_LOCK: static_cell::StaticCell<LedClientLock> = static_cell::StaticCell::new();
    let client_lock = &*CLIENT_LOCK.init(LedClientLock::new(0));

    let led_client = LedClient::new(
        request_channel.sender(),
        response_channel.receiver(),
        client_lock,
    );

    // LED-Task zuerst: die LED ist auch ohne WiFi in einem definierten Zustand
    spawner
        .spawn(led_task(
            peripherals.GPIO8,
            peripherals.RMT,
            request_channel.receiver(),
            response_channel.sender(),
        ))
        .unwrap();

    // WiFi Hardware initialisieren
    static RADIO_INIT: static_cell::StaticCell<esp_radio::Controller> =
        static_cell::StaticCell::new();
    let radio_init =
        RADIO_INIT.init(esp_radio::init().expect("Failed to initialize Wi-Fi/BLE controller"));

    let (wifi_controller, wifi_interface) =
        esp_radio::wifi::new(radio_init, peripherals.WIFI, Default::default())
            .expect("Failed to initialize Wi-Fi");

    // Random seed für TCP/IP Stack (von Hardware RNG)
    let rng = Rng::new();
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;

    // Ein Socket pro HTTP-Task plus DHCP
    static RESOURCES: static_cell::StaticCell<StackResources<NET_SOCKET_COUNT>> =
        static_cell::StaticCell::new();
    let resources = RESOURCES.init(StackResources::new());

    let (stack, runner) = embassy_net::new(
        wifi_interface.sta,
        NetConfig::dhcpv4(Default::default()),
        resources,
        seed,
    );

    static STACK: static_cell::StaticCell<Stack<'static>> = static_cell::StaticCell::new();
    let stack = &*STACK.init(stack);

    spawner.spawn(connection_task(wifi_controller)).unwrap();
    spawner.spawn(net_task(runner)).unwrap();
    spawner.spawn(dhcp_task(stack)).unwrap();

    // HTTP Server Tasks für parallele Verbindungen, alle mit demselben LedClient
    for task_id in 0..HTTP_TASK_COUNT {
        spawner
            .spawn(http_server_task(task_id, stack, led_client))
            .unwrap();
    }

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
