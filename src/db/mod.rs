//! The record store: where employee rows live.
//!
//! Handlers only talk to [`EmployeeStore`]; production wires in
//! [`PgEmployeeStore`], tests use the in-memory store.

#[cfg(test)]
mod memory;
mod postgres;

#[cfg(test)]
pub use memory::MemoryEmployeeStore;
pub use postgres::PgEmployeeStore;

use thiserror::Error;

use crate::models::employee::Employee;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The first name is taken at creation, or the `public_id` collides.
    #[error("duplicate employee")]
    Duplicate,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Single-row lookups and mutations over the `employee` table.
///
/// Each call is its own unit of work and is committed before it returns.
#[allow(async_fn_in_trait)]
pub trait EmployeeStore: Send + Sync + 'static {
    async fn find_by_first_name(&self, first_name: &str) -> StoreResult<Option<Employee>>;

    async fn find_by_public_id(&self, public_id: &str) -> StoreResult<Option<Employee>>;

    /// Persist a new row and return it with its assigned `id`.
    ///
    /// The first-name check and the write are atomic: of two creates with
    /// the same `first_name`, one gets [`StoreError::Duplicate`].
    async fn insert(&self, employee: &Employee) -> StoreResult<Employee>;

    /// No ordering is promised to callers.
    async fn list_all(&self) -> StoreResult<Vec<Employee>>;

    /// Overwrites the mutable fields. First names are not checked here.
    async fn update(&self, employee: &Employee) -> StoreResult<()>;

    async fn delete(&self, employee: &Employee) -> StoreResult<()>;
}
