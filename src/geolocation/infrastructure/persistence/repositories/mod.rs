pub mod file;
pub mod geo_range_repository;
