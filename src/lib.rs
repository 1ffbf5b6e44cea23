pub mod bait_pages;
pub mod capture;
pub mod config;
pub mod geolocation;
pub mod shared;
