pub mod captured_record;
