// ============================================================================
// APP - Estado compartido de la página + fábrica de viewmodels
// ============================================================================

use crate::services::ApiClient;
use crate::state::{CartState, PageHooks};
use crate::viewmodels::{
    CartViewModel, FirestoreViewModel, LoginViewModel, PrecioViewModel, TallesViewModel,
};

/// Una instancia por página. Los viewmodels comparten el carrito y los hooks.
#[derive(Clone, Default)]
pub struct App {
    api: ApiClient,
    cart: CartState,
    hooks: PageHooks,
}

impl App {
    pub fn new() -> Self {
        log::info!("🛒 Inicializando editor de tienda");
        Self {
            api: ApiClient::new(),
            cart: CartState::new(),
            hooks: PageHooks::new(),
        }
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn hooks(&self) -> &PageHooks {
        &self.hooks
    }

    pub fn precio(&self) -> PrecioViewModel {
        PrecioViewModel::new(self.api.clone(), self.cart.clone(), self.hooks.clone())
    }

    pub fn talles(&self) -> TallesViewModel {
        TallesViewModel::new(self.api.clone())
    }

    pub fn firestore(&self) -> FirestoreViewModel {
        FirestoreViewModel::new(self.api.clone(), self.hooks.clone())
    }

    pub fn login(&self) -> LoginViewModel {
        LoginViewModel::new(self.api.clone())
    }

    pub fn carrito(&self) -> CartViewModel {
        CartViewModel::new(self.api.clone(), self.cart.clone())
    }
}
