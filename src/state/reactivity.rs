// ============================================================================
// REACTIVITY - Listeners opcionales inyectados por la página
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Un listener opcional. Si hay uno registrado se invoca, si no, no pasa nada.
/// Los clones comparten el mismo slot.
#[derive(Clone, Default)]
pub struct Hook {
    callback: Rc<RefCell<Option<Callback>>>,
}

impl Hook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registrar (reemplaza al anterior)
    pub fn set<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        *self.callback.borrow_mut() = Some(Rc::new(callback));
    }

    pub fn clear(&self) {
        *self.callback.borrow_mut() = None;
    }

    pub fn is_set(&self) -> bool {
        self.callback.borrow().is_some()
    }

    /// Invocar si está registrado. Devuelve si se invocó.
    pub fn fire(&self) -> bool {
        // Clonar antes de llamar: el callback puede volver a registrar/leer el hook
        let callback = self.callback.borrow().clone();
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}
