pub mod geo_location_facade_impl;
