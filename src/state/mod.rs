// ============================================================================
// STATE MODULE - Estado con Rc<RefCell> + listeners
// ============================================================================

pub mod reactivity;
pub mod cart_state;
pub mod page_hooks;

pub use reactivity::*;
pub use cart_state::*;
pub use page_hooks::*;
