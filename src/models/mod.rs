pub mod cart;
pub mod api;

pub use cart::CartItem;
pub use api::{
    FirestoreRequest, LoginRequest, PagarRequest, PagoResponse, PrecioRequest, StatusResponse,
    TallesCsvRequest, TallesRequest,
};
