pub mod geo_location_domain_error;
