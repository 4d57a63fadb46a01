use yew::prelude::*;

use crate::hooks::use_map_lifecycle;
use crate::utils::constants::CONTAINER_CLASS;

/// Mapa a pantalla completa. El `div` es el ancla del mapa; MapLibre
/// gestiona su contenido.
#[function_component(MapView)]
pub fn map_view() -> Html {
    let container = use_node_ref();
    use_map_lifecycle(container.clone());

    html! {
        <div ref={container} class={CONTAINER_CLASS} />
    }
}
