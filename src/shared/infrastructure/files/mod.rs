pub mod append_only_file;
