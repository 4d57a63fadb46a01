// ============================================================================
// MAP LIFECYCLE - Vida del mapa atada al montaje del componente
// ============================================================================
// attach() al montar, detach() al desmontar. Cualquier host puede usarlo,
// no depende de Yew.
// ============================================================================

use super::traits::{MapError, MapLibrary, MapOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Unmounted,
    Mounted,
}

/// Dueño exclusivo de, como mucho, una instancia de mapa viva.
///
/// La instancia se crea en `attach` y se libera en `detach` o al hacer drop
/// del binder, lo que pase primero. Nunca sale de aquí.
pub struct MapLifecycle<L: MapLibrary> {
    library: L,
    instance: Option<L::Instance>,
}

impl<L: MapLibrary> MapLifecycle<L> {
    pub fn new(library: L) -> Self {
        Self {
            library,
            instance: None,
        }
    }

    /// Construir el mapa sobre el contenedor.
    ///
    /// Sin contenedor no se hace nada. Si ya hay un mapa vivo tampoco: una
    /// activación por montaje.
    pub fn attach(&mut self, container: Option<L::Container>) -> Result<(), MapError> {
        let Some(container) = container else {
            log::debug!("🗺️ Contenedor no disponible, mapa no construido");
            return Ok(());
        };

        if self.instance.is_some() {
            log::warn!("⚠️ attach() con un mapa ya vivo, ignorado");
            return Ok(());
        }

        let options = MapOptions::world(container);
        log::info!(
            "🗺️ Construyendo mapa (style: {}, center: {:?}, zoom: {})",
            options.style,
            options.center,
            options.zoom
        );

        let instance = self.library.construct(options)?;
        self.instance = Some(instance);

        log::info!("✅ Mapa montado");
        Ok(())
    }

    /// Liberar el mapa si hay uno. Devuelve `true` si se liberó algo.
    pub fn detach(&mut self) -> bool {
        match self.instance.take() {
            Some(instance) => {
                self.library.destroy(instance);
                log::info!("🧹 Mapa liberado");
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> LifecycleState {
        if self.instance.is_some() {
            LifecycleState::Mounted
        } else {
            LifecycleState::Unmounted
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.state() == LifecycleState::Mounted
    }

    pub fn instance(&self) -> Option<&L::Instance> {
        self.instance.as_ref()
    }
}

impl<L: MapLibrary> Drop for MapLifecycle<L> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Registro de llamadas a la librería falsa
    #[derive(Default)]
    struct Calls {
        constructed: Vec<MapOptions<&'static str>>,
        destroyed: Vec<u32>,
        next_id: u32,
        fail_with: Option<String>,
    }

    #[derive(Clone, Default)]
    struct FakeLibrary {
        calls: Rc<RefCell<Calls>>,
    }

    impl FakeLibrary {
        fn failing(message: &str) -> Self {
            let lib = Self::default();
            lib.calls.borrow_mut().fail_with = Some(message.to_string());
            lib
        }

        fn constructed(&self) -> usize {
            self.calls.borrow().constructed.len()
        }

        fn destroyed(&self) -> Vec<u32> {
            self.calls.borrow().destroyed.clone()
        }
    }

    impl MapLibrary for FakeLibrary {
        type Container = &'static str;
        type Instance = u32;

        fn construct(&self, options: MapOptions<&'static str>) -> Result<u32, MapError> {
            let mut calls = self.calls.borrow_mut();
            if let Some(message) = calls.fail_with.clone() {
                return Err(MapError::Construction(message));
            }
            calls.constructed.push(options);
            calls.next_id += 1;
            Ok(calls.next_id)
        }

        fn destroy(&self, instance: u32) {
            self.calls.borrow_mut().destroyed.push(instance);
        }
    }

    #[test]
    fn test_attach_constructs_one_instance_with_fixed_options() {
        let lib = FakeLibrary::default();
        let mut binder = MapLifecycle::new(lib.clone());

        binder.attach(Some("map")).unwrap();

        assert!(binder.is_mounted());
        assert_eq!(lib.constructed(), 1);
        let calls = lib.calls.borrow();
        let options = &calls.constructed[0];
        assert_eq!(options.container, "map");
        assert_eq!(options.style, "https://demotiles.maplibre.org/style.json");
        assert_eq!(options.center, [0.0, 0.0]);
        assert_eq!(options.zoom, 2.0);
    }

    #[test]
    fn test_attach_without_container_does_nothing() {
        let lib = FakeLibrary::default();
        let mut binder = MapLifecycle::new(lib.clone());

        binder.attach(None).unwrap();

        assert_eq!(binder.state(), LifecycleState::Unmounted);
        assert_eq!(lib.constructed(), 0);
        assert!(!binder.detach());
        assert!(lib.destroyed().is_empty());
    }

    #[test]
    fn test_second_attach_does_not_construct_again() {
        let lib = FakeLibrary::default();
        let mut binder = MapLifecycle::new(lib.clone());

        binder.attach(Some("map")).unwrap();
        binder.attach(Some("map")).unwrap();

        assert_eq!(lib.constructed(), 1);
        assert_eq!(binder.instance(), Some(&1));
    }

    #[test]
    fn test_detach_destroys_once_and_clears_handle() {
        let lib = FakeLibrary::default();
        let mut binder = MapLifecycle::new(lib.clone());
        binder.attach(Some("map")).unwrap();

        assert!(binder.detach());
        assert!(!binder.detach());

        assert_eq!(lib.destroyed(), vec![1]);
        assert_eq!(binder.instance(), None);
        assert_eq!(binder.state(), LifecycleState::Unmounted);
    }

    #[test]
    fn test_remount_builds_fresh_instance() {
        let lib = FakeLibrary::default();
        let mut binder = MapLifecycle::new(lib.clone());

        binder.attach(Some("map")).unwrap();
        let first = binder.instance().copied();
        binder.detach();
        binder.attach(Some("map")).unwrap();
        let second = binder.instance().copied();

        assert_eq!(first, Some(1));
        assert_eq!(second, Some(2));
        assert_eq!(lib.destroyed(), vec![1]);

        let calls = lib.calls.borrow();
        assert_eq!(calls.constructed.len(), 2);
        assert_eq!(calls.constructed[0], calls.constructed[1]);
    }

    #[test]
    fn test_drop_releases_live_instance() {
        let lib = FakeLibrary::default();
        {
            let mut binder = MapLifecycle::new(lib.clone());
            binder.attach(Some("map")).unwrap();
        }
        assert_eq!(lib.destroyed(), vec![1]);
    }

    #[test]
    fn test_drop_after_detach_does_not_destroy_twice() {
        let lib = FakeLibrary::default();
        {
            let mut binder = MapLifecycle::new(lib.clone());
            binder.attach(Some("map")).unwrap();
            binder.detach();
        }
        assert_eq!(lib.destroyed(), vec![1]);
    }

    #[test]
    fn test_construction_failure_leaves_binder_unmounted() {
        let lib = FakeLibrary::failing("style unreachable");
        let mut binder = MapLifecycle::new(lib.clone());

        let err = binder.attach(Some("map")).unwrap_err();

        assert_eq!(err, MapError::Construction("style unreachable".to_string()));
        assert!(!binder.is_mounted());
        assert!(!binder.detach());
        assert!(lib.destroyed().is_empty());
    }
}
