//! A small demonstration HTTP API: greetings, a fixed summation, a bubble
//! sort demo, Fibonacci calculators and basic statistics.

pub mod config;
pub mod error;
pub mod fibonacci;
pub mod logging;
pub mod routes;
pub mod server;
pub mod sort;
pub mod stats;

pub use config::{Cli, ServerConfig};
pub use error::{Error, Result};
pub use fibonacci::{compute, FibonacciError, MAX_INDEX};
