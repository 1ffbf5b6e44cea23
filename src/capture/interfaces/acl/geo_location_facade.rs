use async_trait::async_trait;

use crate::capture::domain::model::value_objects::record_location::RecordLocation;

#[async_trait]
pub trait GeoLocationFacade: Send + Sync {
    async fn locate(&self, address: &str) -> RecordLocation;
}
