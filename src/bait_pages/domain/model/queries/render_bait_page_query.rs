use crate::bait_pages::domain::model::enums::bait_page::BaitPage;

#[derive(Clone, Copy, Debug)]
pub struct RenderBaitPageQuery {
    page: BaitPage,
}

impl RenderBaitPageQuery {
    pub fn new(page: BaitPage) -> Self {
        Self { page }
    }

    pub fn page(&self) -> BaitPage {
        self.page
    }
}
