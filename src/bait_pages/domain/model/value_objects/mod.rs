pub mod bait_page_content;
