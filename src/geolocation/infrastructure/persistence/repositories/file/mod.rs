pub mod json_geo_range_repository_impl;
pub mod maxmind_geo_range_repository_impl;
