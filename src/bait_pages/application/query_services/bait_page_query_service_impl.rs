use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::bait_pages::{
    domain::{
        model::{
            queries::render_bait_page_query::RenderBaitPageQuery,
            value_objects::bait_page_content::BaitPageContent,
        },
        services::bait_page_query_service::BaitPageQueryService,
    },
    infrastructure::persistence::repositories::bait_page_repository::BaitPageRepository,
};

pub struct BaitPageQueryServiceImpl {
    repository: Arc<dyn BaitPageRepository>,
}

impl BaitPageQueryServiceImpl {
    pub fn new(repository: Arc<dyn BaitPageRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl BaitPageQueryService for BaitPageQueryServiceImpl {
    async fn handle_render(&self, query: RenderBaitPageQuery) -> BaitPageContent {
        let page = query.page();

        match self.repository.load(page).await {
            Ok(Some(html)) => BaitPageContent::from_static_file(page, html),
            Ok(None) => BaitPageContent::inline(page),
            Err(error) => {
                warn!(%error, page = page.as_str(), "serving inline bait page");
                BaitPageContent::inline(page)
            }
        }
    }
}
