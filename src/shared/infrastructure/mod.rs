pub mod files;
pub mod logging;
