use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub db: DbConfig,
    pub ui: UiConfig,
    pub log_level: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db: DbConfig::default(),
            ui: UiConfig::default(),
            log_level: "info".to_string(),
            enable_logging: true,
        }
    }
}

/// Parámetros de la base IndexedDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbConfig {
    pub name: String,
    pub version: u32,
    pub store_name: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            name: "Products".to_string(),
            version: 1,
            store_name: "products".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// ID del elemento raíz donde se monta la app
    pub root_id: String,
    /// Idioma por defecto si no hay preferencia guardada
    pub default_language: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            root_id: "app".to_string(),
            default_language: "RU".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("DB_NAME"),
            option_env!("DB_VERSION"),
            option_env!("STORE_NAME"),
            option_env!("APP_ROOT_ID"),
            option_env!("LANGUAGE"),
            option_env!("LOG_LEVEL"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    /// Construye la config a partir de valores opcionales; lo que no parsea cae al default
    #[allow(clippy::too_many_arguments)]
    fn from_values(
        db_name: Option<&str>,
        db_version: Option<&str>,
        store_name: Option<&str>,
        root_id: Option<&str>,
        language: Option<&str>,
        log_level: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();

        Self {
            db: DbConfig {
                name: non_empty(db_name).unwrap_or(defaults.db.name),
                version: db_version
                    .and_then(|v| v.trim().parse::<u32>().ok())
                    .filter(|v| *v > 0)
                    .unwrap_or(defaults.db.version),
                store_name: non_empty(store_name).unwrap_or(defaults.db.store_name),
            },
            ui: UiConfig {
                root_id: non_empty(root_id).unwrap_or(defaults.ui.root_id),
                default_language: non_empty(language)
                    .map(|l| l.to_uppercase())
                    .unwrap_or(defaults.ui.default_language),
            },
            log_level: non_empty(log_level).unwrap_or(defaults.log_level),
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// Nivel de log para wasm_logger (Off si el logging está deshabilitado)
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
