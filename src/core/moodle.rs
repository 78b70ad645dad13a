pub mod exporter;
pub mod parser;
pub mod text;
