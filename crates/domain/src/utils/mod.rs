//! Domain utilities

pub mod date_parser;
