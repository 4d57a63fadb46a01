// Módulo de mapas: capacidad de la librería, binder de ciclo de vida y
// bindings a MapLibre GL JS

pub mod lifecycle;
pub mod traits;
pub mod web;

pub use lifecycle::{LifecycleState, MapLifecycle};
pub use traits::{MapError, MapLibrary, MapOptions};
pub use web::MapLibreGl;
