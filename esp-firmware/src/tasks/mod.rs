// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// HTTP-Tasks sprechen nur über Channels mit dem LED-Task (HTTP ↔ LED).

pub mod http;
pub mod led;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use http::http_server_task;
pub use led::{led_logic, led_task};
pub use wifi::{connection_task, dhcp_task, net_task};
