// Utils compartidos

pub mod constants;
pub mod format;
pub mod messages;

pub use constants::*;
pub use format::*;
