pub mod geo_location_facade;
