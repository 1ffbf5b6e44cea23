#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GeoLocation {
    country: String,
    region: String,
    city: String,
}

impl GeoLocation {
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

    pub fn is_unknown(&self) -> bool {
        self.country.is_empty() && self.region.is_empty() && self.city.is_empty()
    }
}
