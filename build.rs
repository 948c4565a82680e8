use std::env;
use std::fs;
use std::path::Path;

// Claves que la app lee con option_env! (ver src/config.rs)
const CLAVES_CONOCIDAS: &[&str] = &[
    "BACKEND_URL",
    "ENVIRONMENT",
    "LOG_LEVEL",
    "SUCCESS_FLASH_MS",
    "AVISO_PRECIO_MS",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        // Sin .env: option_env! usa los valores por defecto de config.rs
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            println!("cargo:warning=Línea ignorada en .env: {}", line);
            continue;
        };

        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !CLAVES_CONOCIDAS.contains(&key) {
            println!("cargo:warning=Clave desconocida en .env: {}", key);
            continue;
        }

        // Una variable ya exportada en el entorno tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
