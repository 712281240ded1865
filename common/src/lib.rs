#![no_std]

extern crate alloc;

pub mod codec;
pub mod constants;
pub mod error;
pub mod parse;
pub mod secret;

pub use error::KeyError;
pub use parse::KeyFormat;
pub use secret::SecretKey;
