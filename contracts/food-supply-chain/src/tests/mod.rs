#![cfg(test)]

/// Shared setup and helpers
pub mod utils;
