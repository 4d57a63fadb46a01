// ============================================================================
// WORLDMAP PWA - Mapa MapLibre a pantalla completa (Yew + WASM)
// ============================================================================
// - Components: renderizan el contenedor del mapa
// - Hooks: atan el ciclo de vida del mapa al del componente
// - Maps: capacidad de la librería + binder attach/detach + FFI MapLibre
// - Config: configuración en tiempo de compilación (.env vía build.rs)
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod maps;
pub mod utils;

use crate::components::App;
use crate::config::CONFIG;

/// Inicializa panic hook y logging, y monta la app en `<body>`
pub fn start() {
    // Primero el panic hook, para que cualquier fallo llegue a la consola
    console_error_panic_hook::set_once();

    if let Some(level) = CONFIG.log_level() {
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!("🚀 WorldMap starting ({})", CONFIG.environment);
    log::debug!("⚙️ Config: {}", CONFIG.to_json());

    yew::Renderer::<App>::new().render();
}
