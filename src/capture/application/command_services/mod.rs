pub mod request_capture_command_service_impl;
