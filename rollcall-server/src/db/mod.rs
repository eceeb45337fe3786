//! Database layer - connection pool and student store
//!
//! - Connection pool, shared by cloning; no Arc<Mutex<Connection>>
//! - One parameterized statement per operation
//! - No transactions; each statement is atomic on its own

pub mod memory;
pub mod pool;
pub mod store;
pub mod students;

pub use memory::MemoryStudentStore;
pub use pool::{create_pool, ping};
pub use store::{StoreError, StudentStore};
pub use students::PgStudentStore;
