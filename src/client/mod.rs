//! HTTP side of the client: authenticated transport, device control and
//! the pre-auth account lookup.

pub mod account;
pub mod control;
pub mod http;
pub mod transport;

pub use account::PreAuthClient;
pub use control::{ModeCommand, ThermostatMode, DEVICE_CONTROL_TIMEOUT, OFF_TEMPERATURE};
pub use http::shared_client;
pub use transport::SenzAuth;
