pub mod honeypot_rest_controller;
