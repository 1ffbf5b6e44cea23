pub mod geo_range_entry;
