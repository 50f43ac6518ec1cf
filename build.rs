use std::env;
use std::fs;
use std::path::Path;

// Exporta las variables de .env como rustc-env para que
// utils/constants.rs pueda leerlas con option_env! (FUNCTIONS_URL, etc.)
fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();

                    // No pisar variables ya definidas en el entorno
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default FUNCTIONS_URL (localhost).");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
