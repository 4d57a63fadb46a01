use yew::prelude::*;

use super::MapView;

/// Componente raíz
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <MapView />
    }
}
