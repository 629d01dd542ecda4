//! Eatery library exports for the binary and integration tests

pub mod core;
pub mod tui;

#[cfg(test)]
mod test_support;
