use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;

use crate::bait_pages::{
    domain::model::enums::{bait_page::BaitPage, bait_page_domain_error::BaitPageDomainError},
    infrastructure::persistence::repositories::bait_page_repository::BaitPageRepository,
};

pub struct StaticDirectoryBaitPageRepositoryImpl {
    root: PathBuf,
}

impl StaticDirectoryBaitPageRepositoryImpl {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl BaitPageRepository for StaticDirectoryBaitPageRepositoryImpl {
    async fn load(&self, page: BaitPage) -> Result<Option<String>, BaitPageDomainError> {
        let Some(file_name) = page.static_file_name() else {
            return Ok(None);
        };

        let path = self.root.join(file_name);
        match tokio::fs::read_to_string(&path).await {
            Ok(html) => Ok(Some(html)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(BaitPageDomainError::InfrastructureError(format!(
                "{}: {}",
                path.display(),
                error
            ))),
        }
    }
}
