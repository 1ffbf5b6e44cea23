pub mod captured_record_repository;
pub mod file;
