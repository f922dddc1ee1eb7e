// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod acquire;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod runner;
pub mod specs;
pub mod store;

pub use acquire::{acquire, RawDocument};
pub use error::{Error, Result};
pub use pipeline::{process, Programme};
