// ============================================================================
// USE MAP LIFECYCLE HOOK - Monta el mapa con el componente
// ============================================================================
// Efecto sin dependencias: construye al montar, libera en el cleanup.
// El binder vive dentro del cleanup, nadie más lo toca.
// ============================================================================

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::maps::{MapLibrary, MapLibreGl, MapLifecycle};

/// Mapa MapLibre atado al montaje del componente que llama al hook
#[hook]
pub fn use_map_lifecycle(container: NodeRef) {
    use_map_lifecycle_with(container, MapLibreGl);
}

/// Igual que `use_map_lifecycle` pero con la librería de mapas explícita.
///
/// Solo se usa la `library` del primer render de cada montaje.
#[hook]
pub fn use_map_lifecycle_with<L>(container: NodeRef, library: L)
where
    L: MapLibrary<Container = HtmlElement> + 'static,
{
    use_effect_with((), move |_| {
        let mut binder = MapLifecycle::new(library);

        if let Err(e) = binder.attach(container.cast::<HtmlElement>()) {
            // Sin recuperación: el contenedor queda en blanco
            log::error!("❌ No se pudo construir el mapa: {}", e);
        }

        move || {
            binder.detach();
        }
    });
}
