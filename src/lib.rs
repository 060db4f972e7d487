pub mod config;
pub mod error;
pub mod geometry;
pub mod layouts;
