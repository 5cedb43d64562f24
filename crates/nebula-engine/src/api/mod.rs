pub mod backdrop;
pub mod config;
