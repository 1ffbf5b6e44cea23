#[derive(Clone, Debug)]
pub struct ResolveGeoLocationQuery {
    address: String,
}

impl ResolveGeoLocationQuery {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}
