#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

//!
//! Environment of the drop-in crates: logger, basic config, its environment awareness.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod config;
pub mod env;
pub mod logger;

pub use once_cell;
pub use tracing;

#[doc(inline)]
pub use self::{
    config::{Config, StorageBackend, StorageSettings},
    env::*,
    logger::{setup, TelemetryGuard},
};
