use async_trait::async_trait;

use crate::bait_pages::domain::model::enums::{
    bait_page::BaitPage, bait_page_domain_error::BaitPageDomainError,
};

#[async_trait]
pub trait BaitPageRepository: Send + Sync {
    async fn load(&self, page: BaitPage) -> Result<Option<String>, BaitPageDomainError>;
}
