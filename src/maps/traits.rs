use thiserror::Error;

use crate::utils::constants::{DEFAULT_CENTER, DEFAULT_ZOOM, STYLE_URL};

/// Capacidad mínima que necesitamos de una librería de mapas externa.
///
/// La librería es opaca: construye una instancia a partir de unas opciones y
/// la libera. Todo lo demás (descarga del estilo, tiles, render) queda dentro
/// de ella. `destroy` consume la instancia, así que una instancia liberada no
/// se puede volver a usar.
pub trait MapLibrary {
    /// Elemento del DOM (o equivalente) donde se monta el mapa
    type Container;

    /// Handle a un mapa vivo
    type Instance;

    fn construct(&self, options: MapOptions<Self::Container>) -> Result<Self::Instance, MapError>;

    fn destroy(&self, instance: Self::Instance);
}

/// Opciones de construcción reconocidas por la librería
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions<C> {
    pub container: C,
    pub style: String,
    /// `[lng, lat]`
    pub center: [f64; 2],
    pub zoom: f64,
}

impl<C> MapOptions<C> {
    /// Opciones fijas del mapa del mundo para un contenedor dado
    pub fn world(container: C) -> Self {
        Self {
            container,
            style: STYLE_URL.to_string(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    /// La librería lanzó una excepción al construir el mapa
    #[error("map construction failed: {0}")]
    Construction(String),

    /// El global `maplibregl` no está cargado en la página
    #[error("mapping library is not loaded on the page")]
    LibraryUnavailable,
}
