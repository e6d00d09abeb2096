//! Artwork catalog browser (CLI)

pub mod browse;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
