pub mod moodle;
pub mod question;
