//! [`EmployeeStore`](roster_core::store::EmployeeStore) implementations.

mod memory;
mod pg;

pub use memory::MemoryEmployeeStore;
pub use pg::PgEmployeeStore;
