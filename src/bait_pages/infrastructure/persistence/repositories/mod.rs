pub mod bait_page_repository;
pub mod file;
