use std::sync::Arc;

use crate::{
    bait_pages::{
        application::query_services::bait_page_query_service_impl::BaitPageQueryServiceImpl,
        domain::services::bait_page_query_service::BaitPageQueryService,
        infrastructure::persistence::repositories::file::static_directory_bait_page_repository_impl::StaticDirectoryBaitPageRepositoryImpl,
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod infrastructure;

pub fn build_bait_page_query_service(config: &AppConfig) -> Arc<dyn BaitPageQueryService> {
    let repository = Arc::new(StaticDirectoryBaitPageRepositoryImpl::new(
        config.static_dir.clone(),
    ));

    Arc::new(BaitPageQueryServiceImpl::new(repository))
}
