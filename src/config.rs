use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefijo de los endpoints. Vacío = mismo origen (rutas relativas)
    pub backend_url: String,
    pub environment: String,
    pub log_level: String,
    pub ui_config: UIConfig,
}

/// Clases CSS y tiempos del feedback visual
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub success_class: String,
    pub invalid_class: String,
    pub success_flash_ms: u32,
    pub aviso_precio_ms: u32,
    pub precio_input_class: String,
    pub precio_input_width: String,
    pub talles_select_class: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
            ui_config: UIConfig::default(),
        }
    }
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            success_class: "text-success".to_string(),
            invalid_class: "is-invalid".to_string(),
            success_flash_ms: 1000,
            aviso_precio_ms: 2000,
            precio_input_class: "form-control form-control-sm d-inline-block".to_string(),
            precio_input_width: "80px".to_string(),
            talles_select_class: "form-select form-select-sm w-auto d-inline-block".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = UIConfig::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .unwrap_or("")
                .trim_end_matches('/')
                .to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or("info").to_string(),
            ui_config: UIConfig {
                success_flash_ms: option_env!("SUCCESS_FLASH_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.success_flash_ms),
                aviso_precio_ms: option_env!("AVISO_PRECIO_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.aviso_precio_ms),
                ..defaults
            },
        }
    }

    /// URL completa para un endpoint (`/actualizar-precio`, `/pagar`, ...)
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel para wasm_logger. En producción nunca baja de `info`
    pub fn log_level(&self) -> log::Level {
        let level = match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        };
        if self.is_production() && level > log::Level::Info {
            log::Level::Info
        } else {
            level
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
