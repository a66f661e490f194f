pub mod api_client;
pub mod transport;
pub mod session_store;

pub use api_client::{ApiGateway, GatewayError, CONNECTION_ERROR_MESSAGE, NOT_CONFIGURED_MESSAGE};
pub use transport::{GlooTransport, RawResponse, Transport};
pub use session_store::{LocalSessionStore, SessionStore, SessionStoreError};
