pub mod models;
pub mod moodle;
pub mod ports;
pub mod services;
