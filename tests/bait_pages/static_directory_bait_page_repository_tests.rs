use honeypot_portal::bait_pages::{
    domain::model::enums::bait_page::BaitPage,
    infrastructure::persistence::repositories::{
        bait_page_repository::BaitPageRepository,
        file::static_directory_bait_page_repository_impl::StaticDirectoryBaitPageRepositoryImpl,
    },
};

#[tokio::test]
async fn load_reads_page_from_static_directory() {
    let directory = tempfile::tempdir().expect("temp dir");
    std::fs::write(directory.path().join("bank.html"), "<p>balance</p>").expect("bank page");
    let repository = StaticDirectoryBaitPageRepositoryImpl::new(directory.path().to_path_buf());

    let html = repository.load(BaitPage::Bank).await.expect("load succeeds");

    assert_eq!(html.as_deref(), Some("<p>balance</p>"));
}

#[tokio::test]
async fn load_returns_none_for_missing_file() {
    let directory = tempfile::tempdir().expect("temp dir");
    let repository = StaticDirectoryBaitPageRepositoryImpl::new(directory.path().join("absent"));

    let html = repository.load(BaitPage::Login).await.expect("load succeeds");

    assert!(html.is_none());
}

#[tokio::test]
async fn load_never_reads_files_for_fragments() {
    let directory = tempfile::tempdir().expect("temp dir");
    std::fs::write(directory.path().join("not_found.html"), "<p>custom</p>").expect("page");
    std::fs::write(directory.path().join("invalid_credentials.html"), "<p>custom</p>")
        .expect("page");
    let repository = StaticDirectoryBaitPageRepositoryImpl::new(directory.path().to_path_buf());

    for page in [BaitPage::NotFound, BaitPage::InvalidCredentials] {
        assert!(repository.load(page).await.expect("load succeeds").is_none());
    }
}

#[tokio::test]
async fn load_reports_unreadable_entries() {
    let directory = tempfile::tempdir().expect("temp dir");
    std::fs::create_dir(directory.path().join("login.html")).expect("directory in place of page");
    let repository = StaticDirectoryBaitPageRepositoryImpl::new(directory.path().to_path_buf());

    assert!(repository.load(BaitPage::Login).await.is_err());
}
