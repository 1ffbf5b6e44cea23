pub mod resolve_geo_location_query;
