pub mod config;
pub mod error;
pub mod registry;
pub mod sha256;
pub mod verify;

pub use error::{Error, Result};
