pub mod access_log_middleware;
