use std::env;
use std::fs;
use std::path::Path;

/// Claves que `config::AppConfig::from_env` lee con `option_env!`
const KNOWN_KEYS: &[&str] = &["ENVIRONMENT", "ENABLE_LOGGING", "LOG_LEVEL"];

fn main() {
    let env_file = Path::new(".env");

    if let Ok(contents) = fs::read_to_string(env_file) {
        println!("cargo:rerun-if-changed=.env");

        for (key, value) in contents.lines().filter_map(parse_line) {
            if !KNOWN_KEYS.contains(&key) {
                println!("cargo:warning=.env: clave desconocida {}, ignorada", key);
                continue;
            }

            // La variable del entorno real tiene prioridad sobre .env
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }

    for key in KNOWN_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}

/// `KEY=VALUE`, ignorando comentarios y líneas vacías
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"')))
}
