pub mod geo_location_query_service_impl;
