use crate::state::reactivity::Hook;

/// Avisos opcionales que la página registra para después de un guardado
/// confirmado (antes: `mostrarAvisoPrecio` / `mostrarAvisoFirestore` globales)
#[derive(Clone, Default)]
pub struct PageHooks {
    pub aviso_precio: Hook,
    pub aviso_firestore: Hook,
}

impl PageHooks {
    pub fn new() -> Self {
        Self::default()
    }
}
