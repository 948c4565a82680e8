// ============================================================================
// VIEWS - Solo renderizan nodos del DOM (sin lógica ni red)
// ============================================================================

pub mod precio_view;
pub mod talles_view;

pub use precio_view::*;
pub use talles_view::*;
