pub mod static_directory_bait_page_repository_impl;
