pub mod login_request_resource;
