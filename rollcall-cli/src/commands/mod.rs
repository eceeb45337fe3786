//! Command implementations for rollcall CLI

pub mod serve;

pub use serve::run_serve;
