pub mod capture_domain_error;
pub mod capture_kind;
pub mod login_response_mode;
