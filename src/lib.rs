//! Echo text to stdout with optional case transformations

pub mod cli;
pub mod error;
pub mod transform;
pub mod usage;

pub use error::{RechoError, Result};
pub use transform::{transform, EchoOptions};
