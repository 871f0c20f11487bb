// Build-Script: Wird vor dem Kompilieren ausgeführt
// Wählt die Strip-Konfiguration und konfiguriert den Linker für ESP32-C6

/// Konfiguration falls STRIP_CONFIG nicht gesetzt ist
const DEFAULT_STRIP_CONFIG: &str = "desk";

fn main() {
    // Lade .env file für STRIP_CONFIG
    // Fehler ignorieren wenn .env nicht existiert (dann gilt der Default)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  .env file nicht gefunden: {}", e);
        eprintln!("   Nutze STRIP_CONFIG={}", DEFAULT_STRIP_CONFIG);
    }

    // Name der Topologie-Datei unter config/<name>.json
    // Die Datei wird zur Compile-Zeit eingebacken (include_str!)
    let strip_config =
        std::env::var("STRIP_CONFIG").unwrap_or_else(|_| DEFAULT_STRIP_CONFIG.to_string());
    let config_path = format!("config/{}.json", strip_config);
    if !std::path::Path::new(&config_path).exists() {
        eprintln!("⚠️  {} existiert nicht", config_path);
    }
    println!("cargo:rustc-env=STRIP_CONFIG={}", strip_config);
    println!("cargo:rerun-if-env-changed=STRIP_CONFIG");
    println!("cargo:rerun-if-changed={}", config_path);

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // Füge Linker-Skripte hinzu:

    // 1. defmt.x - defmt Logging-Support
    //    Definiert Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout
    //    WICHTIG: Muss als LETZTES kommen (sonst Probleme mit flip-link)
    //    Definiert Flash/RAM-Layout und Startup-Code
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt hilfreiche Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // Wenn vom Linker aufgerufen (mit Error-Typ und Symbol-Name)
    if args.len() > 2 {
        let kind = &args[1]; // Fehler-Typ (z.B. "undefined-symbol")
        let what = &args[2]; // Symbol-Name (z.B. "_defmt_...")

        match kind.as_str() {
            "undefined-symbol" => match what.as_str() {
                what if what.starts_with("_defmt_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and you have included `use defmt_rtt as _;`"
                    );
                    eprintln!();
                }
                "_stack_start" => {
                    eprintln!();
                    eprintln!("💡 Is the linker script `linkall.x` missing?");
                    eprintln!();
                }
                what if what.starts_with("esp_rtos_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `esp-rtos` scheduler missing. Make sure `esp_rtos::start` is called before spawning tasks."
                    );
                    eprintln!();
                }
                _ => (),
            },
            // we don't have anything helpful for "missing-lib" yet
            _ => {
                std::process::exit(1);
            }
        }

        std::process::exit(0);
    }

    println!(
        "cargo:rustc-link-arg=--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}
