//! Scout Core Library
//!
//! Domain model and the simulated multi-model research operation.

pub mod error;
pub mod research;

pub use error::{ScoutError, ScoutResult};
