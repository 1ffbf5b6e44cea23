pub mod access_log_writer;
