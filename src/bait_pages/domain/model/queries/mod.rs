pub mod render_bait_page_query;
