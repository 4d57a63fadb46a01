// ============================================================================
// MAPLIBRE FFI - Bindings a MapLibre GL JS
// ============================================================================
// Solo `new maplibregl.Map({...})` y `map.remove()`. La descarga del estilo
// y el render son cosa de la librería.
// ============================================================================

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::traits::{MapError, MapLibrary, MapOptions};
use crate::utils::constants::MAPLIBRE_GLOBAL;

#[wasm_bindgen]
extern "C" {
    /// `maplibregl.Map`
    #[wasm_bindgen(js_namespace = maplibregl, js_name = Map)]
    pub type MaplibreMap;

    #[wasm_bindgen(constructor, js_namespace = maplibregl, js_class = "Map", catch)]
    fn new(options: &Object) -> Result<MaplibreMap, JsValue>;

    /// Libera el canvas, el contexto WebGL y los listeners del mapa
    #[wasm_bindgen(method)]
    fn remove(this: &MaplibreMap);
}

/// Renderizador de mapas para web usando MapLibre GL JS
#[derive(Debug, Clone, Copy, Default)]
pub struct MapLibreGl;

impl MapLibreGl {
    /// `true` si `window.maplibregl` está cargado
    pub fn is_available() -> bool {
        Reflect::get(&js_sys::global(), &JsValue::from_str(MAPLIBRE_GLOBAL))
            .map(|lib| !lib.is_undefined() && !lib.is_null())
            .unwrap_or(false)
    }
}

impl MapLibrary for MapLibreGl {
    type Container = HtmlElement;
    type Instance = MaplibreMap;

    fn construct(&self, options: MapOptions<HtmlElement>) -> Result<MaplibreMap, MapError> {
        if !Self::is_available() {
            return Err(MapError::LibraryUnavailable);
        }

        let js_options = options_object(&options)?;
        MaplibreMap::new(&js_options).map_err(|e| MapError::Construction(describe(&e)))
    }

    fn destroy(&self, instance: MaplibreMap) {
        instance.remove();
    }
}

/// Objeto JS `{ container, style, center: [lng, lat], zoom }`
pub fn options_object(options: &MapOptions<HtmlElement>) -> Result<Object, MapError> {
    let object = Object::new();
    let center = Array::of2(
        &JsValue::from_f64(options.center[0]),
        &JsValue::from_f64(options.center[1]),
    );

    set(&object, "container", &options.container)?;
    set(&object, "style", &JsValue::from_str(&options.style))?;
    set(&object, "center", &center)?;
    set(&object, "zoom", &JsValue::from_f64(options.zoom))?;

    Ok(object)
}

fn set(object: &Object, key: &str, value: &JsValue) -> Result<(), MapError> {
    Reflect::set(object, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| MapError::Construction(describe(&e)))
}

/// Mensaje legible de una excepción JS
fn describe(error: &JsValue) -> String {
    error
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}
