use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
        )
    }

    /// Valores ausentes o inválidos caen al valor por defecto
    pub fn from_values(
        environment: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .filter(|v| v.parse::<log::Level>().is_ok())
                .map(str::to_lowercase)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Nivel máximo para el logger; `None` si el logging está apagado
    pub fn log_level(&self) -> Option<log::Level> {
        if !self.enable_logging {
            return None;
        }
        Some(self.log_level.parse().unwrap_or(log::Level::Info))
    }

    /// Configuración efectiva en JSON, para el log de arranque
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<config no serializable: {}>", e))
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
