pub mod commands;
pub mod config;
pub mod input;
pub mod render;

pub use commands::{run_decode, run_encode};
