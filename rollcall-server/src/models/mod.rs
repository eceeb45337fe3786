//! Domain models
//!
//! Request bodies are decoded straight into these types; there is no
//! validation beyond what serde enforces.

pub mod student;

pub use student::{Student, StudentFields, StudentId};
