use crate::bait_pages::domain::model::enums::bait_page::BaitPage;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BaitPageSource {
    StaticFile,
    Inline,
}

#[derive(Clone, Debug)]
pub struct BaitPageContent {
    page: BaitPage,
    html: String,
    source: BaitPageSource,
}

impl BaitPageContent {
    pub fn from_static_file(page: BaitPage, html: String) -> Self {
        Self {
            page,
            html,
            source: BaitPageSource::StaticFile,
        }
    }

    pub fn inline(page: BaitPage) -> Self {
        Self {
            page,
            html: page.inline_html().to_string(),
            source: BaitPageSource::Inline,
        }
    }

    pub fn page(&self) -> BaitPage {
        self.page
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    pub fn source(&self) -> BaitPageSource {
        self.source
    }
}
