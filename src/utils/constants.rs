// ============================================================================
// CONSTANTES DEL MAPA
// ============================================================================
// Valores fijos: el mapa siempre arranca igual, sin configuración externa
// ============================================================================

/// Documento de estilo remoto (lo descarga MapLibre, no nosotros)
pub const STYLE_URL: &str = "https://demotiles.maplibre.org/style.json";

/// Centro inicial `[lng, lat]`
pub const DEFAULT_CENTER: [f64; 2] = [0.0, 0.0];

pub const DEFAULT_ZOOM: f64 = 2.0;

/// Clases del contenedor: ancho y alto de viewport completos
pub const CONTAINER_CLASS: &str = "w-screen h-screen";

/// Nombre del global que expone `maplibre-gl.js`
pub const MAPLIBRE_GLOBAL: &str = "maplibregl";
