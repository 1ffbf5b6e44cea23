pub mod bait_page;
pub mod bait_page_domain_error;
