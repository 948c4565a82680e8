pub mod transport;
pub mod api_client;

pub use transport::{HttpTransport, Transport};
pub use api_client::ApiClient;
