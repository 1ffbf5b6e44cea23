use async_trait::async_trait;
use honeypot_portal::bait_pages::{
    domain::model::enums::{bait_page::BaitPage, bait_page_domain_error::BaitPageDomainError},
    infrastructure::persistence::repositories::bait_page_repository::BaitPageRepository,
};

pub struct FailingBaitPageRepository;

#[async_trait]
impl BaitPageRepository for FailingBaitPageRepository {
    async fn load(&self, _page: BaitPage) -> Result<Option<String>, BaitPageDomainError> {
        Err(BaitPageDomainError::InfrastructureError(
            "permission denied".to_string(),
        ))
    }
}
