// Build-Script für esp-led-modes
//
// 1. WiFi-Credentials aus .env zur Compile-Zeit einbacken (siehe config.rs)
// 2. Linker-Skripte für defmt und das ESP32-C6 Memory-Layout

const WIFI_ENV_VARS: [&str; 2] = ["WIFI_SSID", "WIFI_PASSWORD"];

fn main() {
    // Ohne .env müssen die Variablen in der Umgebung gesetzt sein
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  .env file nicht gefunden: {}", e);
        eprintln!("   Setze WIFI_SSID und WIFI_PASSWORD als Environment-Variablen");
    }

    for var in WIFI_ENV_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
        if let Ok(value) = std::env::var(var) {
            println!("cargo:rustc-env={}={}", var, value);
        }
    }
    println!("cargo:rerun-if-changed=.env");

    linker_hints();

    println!("cargo:rustc-link-arg=-Tdefmt.x");
    // linkall.x muss als letztes Skript kommen
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

/// Gibt bei typischen Linker-Fehlern einen Hinweis aus
///
/// Der Linker ruft dieses Build-Script als `--error-handling-script` mit
/// Fehler-Typ und Symbol-Name auf.
fn linker_hints() {
    let args: Vec<String> = std::env::args().collect();

    if let [_, kind, what, ..] = args.as_slice() {
        if kind == "undefined-symbol" {
            let hint = match what.as_str() {
                s if s.starts_with("_defmt_") => {
                    Some("`defmt` not found - is `defmt.x` passed as linker script?")
                }
                "_stack_start" => Some("Is the linker script `linkall.x` missing?"),
                s if s.starts_with("esp_rtos_") => {
                    Some("`esp-radio` needs a scheduler - call `esp_rtos::start()` before WiFi init")
                }
                "malloc" | "free" | "calloc" | "realloc_internal" | "malloc_internal" => {
                    Some("Heap missing - check the `esp-alloc` dependency")
                }
                _ => None,
            };
            if let Some(hint) = hint {
                eprintln!();
                eprintln!("💡 {}", hint);
                eprintln!();
            }
            std::process::exit(0);
        }
        std::process::exit(1);
    }

    if let Ok(exe) = std::env::current_exe() {
        println!(
            "cargo:rustc-link-arg=--error-handling-script={}",
            exe.display()
        );
    }
}
