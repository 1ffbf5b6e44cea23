use std::net::SocketAddr;

pub const UNKNOWN_CLIENT_ADDRESS: &str = "unknown";

// The address may come from x-forwarded-for while the port is always the
// transport peer's.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientAddress {
    address: String,
    port: u16,
}

impl ClientAddress {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
        }
    }

    pub fn resolve(forwarded_for: Option<&str>, peer: Option<SocketAddr>) -> Self {
        let address = forwarded_for
            .filter(|value| !value.trim().is_empty())
            .map(str::to_string)
            .or_else(|| peer.map(|peer| peer.ip().to_canonical().to_string()))
            .unwrap_or_else(|| UNKNOWN_CLIENT_ADDRESS.to_string());

        Self {
            address,
            port: peer.map(|peer| peer.port()).unwrap_or(0),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}
