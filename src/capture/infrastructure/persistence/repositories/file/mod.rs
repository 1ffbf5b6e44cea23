pub mod csv_captured_record_repository_impl;
pub mod json_block_captured_record_repository_impl;
