pub mod bait_page_query_service;
