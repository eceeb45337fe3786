//! rollcall-server: student directory over HTTP
//!
//! Five routes, each mapped to a single SQL statement against the
//! `students` table, with results rendered as JSON.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::Config;
pub use db::{MemoryStudentStore, PgStudentStore, StoreError, StudentStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Student, StudentFields, StudentId};
