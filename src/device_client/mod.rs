mod api_types;
mod client;
mod helpers;
mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use api_types::StatusSnapshot;
pub use client::DeviceClient;
pub use transport::{CommandTransport, StatusSource};
