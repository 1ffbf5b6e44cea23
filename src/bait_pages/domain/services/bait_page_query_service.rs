use async_trait::async_trait;

use crate::bait_pages::domain::model::{
    queries::render_bait_page_query::RenderBaitPageQuery,
    value_objects::bait_page_content::BaitPageContent,
};

#[async_trait]
pub trait BaitPageQueryService: Send + Sync {
    async fn handle_render(&self, query: RenderBaitPageQuery) -> BaitPageContent;
}
