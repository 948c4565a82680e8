// ============================================================================
// CART STATE - Carrito en memoria (reemplaza el `carrito` global)
// ============================================================================
// Lista ordenada de items + listener de re-render (`actualizarCarrito`
// de la página). El listener se invoca siempre fuera del borrow.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::CartItem;
use crate::state::reactivity::Hook;
use crate::utils::{parse_display_price, precio_id_for_item};

#[derive(Clone, Default)]
pub struct CartState {
    items: Rc<RefCell<Vec<CartItem>>>,
    render: Hook,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listener de re-render
    pub fn render_hook(&self) -> &Hook {
        &self.render
    }

    /// Snapshot de los items
    pub fn items(&self) -> Vec<CartItem> {
        self.items.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.borrow().iter().map(CartItem::subtotal).sum()
    }

    /// Agregar item; si ya existe `(id_base, talle)` suma la cantidad
    pub fn add(&self, mut item: CartItem) {
        item.cantidad = item.cantidad.max(1);
        {
            let mut items = self.items.borrow_mut();
            match items.iter_mut().find(|p| p.matches(&item.id_base, &item.talle)) {
                Some(existing) => {
                    existing.cantidad = existing.cantidad.saturating_add(item.cantidad);
                    log::info!("🛒 {} ({}) ya estaba, cantidad: {}", existing.nombre, existing.talle, existing.cantidad);
                }
                None => {
                    log::info!("🛒 Agregado al carrito: {} ({})", item.nombre, item.talle);
                    items.push(item);
                }
            }
        }
        self.render.fire();
    }

    /// Quitar los items `(id_base, talle)`. Devuelve cuántos se quitaron.
    pub fn remove(&self, id_base: &str, talle: &str) -> usize {
        let removed = {
            let mut items = self.items.borrow_mut();
            let before = items.len();
            items.retain(|p| !p.matches(id_base, talle));
            before - items.len()
        };
        log::info!("🗑️ Eliminados {} items ({}, {})", removed, id_base, talle);
        self.render.fire();
        removed
    }

    pub fn clear(&self) {
        self.items.borrow_mut().clear();
        log::info!("🧹 Carrito vaciado");
        self.render.fire();
    }

    /// Actualiza el precio de todos los items con ese nombre.
    /// Re-renderiza solo si algún precio cambió.
    pub fn update_price_by_name(&self, nombre: &str, nuevo_precio: f64) -> bool {
        self.set_price_where(|item| item.nombre == nombre, nuevo_precio)
    }

    /// Empuja un precio confirmado por el backend a los items de ese producto
    pub fn apply_confirmed_price(&self, id_base: &str, precio: f64) -> bool {
        self.set_price_where(|item| item.id_base == id_base, precio)
    }

    fn set_price_where<F>(&self, predicate: F, precio: f64) -> bool
    where
        F: Fn(&CartItem) -> bool,
    {
        let changed = {
            let mut items = self.items.borrow_mut();
            let mut changed = false;
            for item in items.iter_mut().filter(|item| predicate(item)) {
                if item.precio != precio {
                    log::info!("🔄 Actualizando precio en carrito para {}: {} → {}", item.nombre, item.precio, precio);
                    item.precio = precio;
                    changed = true;
                }
            }
            changed
        };
        if changed {
            self.render.fire();
        }
        changed
    }

    /// Copia al carrito los precios mostrados en la página.
    /// `display_text` recibe el id del span (`precio_<id_base>` o
    /// `precio_<nombre_con_guiones>`) y devuelve su texto, si existe.
    /// No re-renderiza. Devuelve cuántos items se actualizaron.
    pub fn sync_prices_from_display<F>(&self, display_text: F) -> usize
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut updated = 0;
        for item in self.items.borrow_mut().iter_mut() {
            let id_precio = precio_id_for_item(&item.id_base, &item.nombre);
            let Some(text) = display_text(&id_precio) else {
                log::warn!("⚠️ No se encontró el span de precio para {}", id_precio);
                continue;
            };
            match parse_display_price(&text) {
                Some(precio) => {
                    item.precio = precio;
                    updated += 1;
                }
                None => log::warn!("⚠️ Precio no numérico en DOM para {}", id_precio),
            }
        }
        updated
    }
}
