#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RecordLocation {
    country: String,
    region: String,
    city: String,
}

impl RecordLocation {
    pub fn new(
        country: impl Into<String>,
        region: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            region: region.into(),
            city: city.into(),
        }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}
