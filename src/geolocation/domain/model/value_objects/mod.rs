pub mod geo_location;
