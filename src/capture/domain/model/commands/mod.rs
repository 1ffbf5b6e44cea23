pub mod capture_request_command;
