// Inyecta la configuración de .env como variables de compilación
// (leídas luego con option_env! en src/config.rs)

use std::env;
use std::fs;

const KEYS: [&str; 4] = ["API_URL", "ENVIRONMENT", "ENABLE_LOGGING", "CUSTOMER_SYNC_ENABLED"];

/// `CLAVE=valor` sin comentarios ni comillas envolventes
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    Some((key.trim(), value))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let Ok(contents) = fs::read_to_string(".env") else {
        println!("cargo:warning=Sin .env: API_URL queda sin configurar (ver .env.example)");
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !KEYS.contains(&key) {
            println!("cargo:warning=Clave desconocida en .env: {}", key);
            continue;
        }
        // El entorno del proceso manda sobre .env
        if env::var_os(key).is_none() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
