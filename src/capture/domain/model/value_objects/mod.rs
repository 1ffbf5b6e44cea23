pub mod captured_headers;
pub mod client_address;
pub mod record_location;
pub mod submitted_credentials;
