use std::sync::{Mutex, MutexGuard};

use super::{EmployeeStore, StoreError, StoreResult};
use crate::models::employee::Employee;

#[derive(Default)]
struct Table {
    rows: Vec<Employee>,
    next_id: i32,
}

/// In-memory store with the same create-time rules as the Postgres store.
///
/// Used by the handler tests so they run without a database.
#[derive(Default)]
pub struct MemoryEmployeeStore {
    table: Mutex<Table>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().rows.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Table> {
        // A poisoned lock only means another test thread panicked mid-write.
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EmployeeStore for MemoryEmployeeStore {
    async fn find_by_first_name(&self, first_name: &str) -> StoreResult<Option<Employee>> {
        Ok(self
            .lock()
            .rows
            .iter()
            .find(|row| row.first_name == first_name)
            .cloned())
    }

    async fn find_by_public_id(&self, public_id: &str) -> StoreResult<Option<Employee>> {
        Ok(self
            .lock()
            .rows
            .iter()
            .find(|row| row.public_id == public_id)
            .cloned())
    }

    async fn insert(&self, employee: &Employee) -> StoreResult<Employee> {
        let mut table = self.lock();
        if table.rows.iter().any(|row| {
            row.first_name == employee.first_name || row.public_id == employee.public_id
        }) {
            return Err(StoreError::Duplicate);
        }
        table.next_id += 1;
        let mut stored = employee.clone();
        stored.id = table.next_id;
        table.rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> StoreResult<Vec<Employee>> {
        Ok(self.lock().rows.clone())
    }

    async fn update(&self, employee: &Employee) -> StoreResult<()> {
        let mut table = self.lock();
        if let Some(row) = table.rows.iter_mut().find(|row| row.id == employee.id) {
            row.first_name = employee.first_name.clone();
            row.last_name = employee.last_name.clone();
            row.email = employee.email.clone();
            row.home_address = employee.home_address.clone();
        }
        Ok(())
    }

    async fn delete(&self, employee: &Employee) -> StoreResult<()> {
        self.lock().rows.retain(|row| row.id != employee.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::dates::parse_date_time;

    fn employee(public_id: &str, first_name: &str) -> Employee {
        Employee {
            id: 0,
            public_id: public_id.to_string(),
            first_name: first_name.to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            home_address: "1 Analytical Way".to_string(),
            date_of_birth: parse_date_time("1815-12-10").unwrap(),
            date_of_employment: parse_date_time("1843-01-01").unwrap(),
        }
    }

    #[actix_web::test]
    async fn test_insert_assigns_ids() {
        let store = MemoryEmployeeStore::new();
        let first = store.insert(&employee("a", "Ada")).await.unwrap();
        let second = store.insert(&employee("b", "Grace")).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 2);
    }

    #[actix_web::test]
    async fn test_insert_rejects_duplicate_first_name() {
        let store = MemoryEmployeeStore::new();
        store.insert(&employee("a", "Ada")).await.unwrap();
        let err = store.insert(&employee("b", "Ada")).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate));
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_lookups_return_none_when_absent() {
        let store = MemoryEmployeeStore::new();
        assert!(store.find_by_public_id("missing").await.unwrap().is_none());
        assert!(store.find_by_first_name("Nobody").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_update_may_share_first_name() {
        let store = MemoryEmployeeStore::new();
        let mut stored = store.insert(&employee("a", "Ada")).await.unwrap();
        store.insert(&employee("b", "Grace")).await.unwrap();

        stored.first_name = "Grace".to_string();
        store.update(&stored).await.unwrap();

        let rows = store.list_all().await.unwrap();
        assert!(rows.iter().all(|row| row.first_name == "Grace"));

        // Creation still refuses the shared name.
        let err = store.insert(&employee("c", "Grace")).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate));
    }

    #[actix_web::test]
    async fn test_update_and_delete() {
        let store = MemoryEmployeeStore::new();
        let mut stored = store.insert(&employee("a", "Ada")).await.unwrap();
        store.insert(&employee("b", "Grace")).await.unwrap();

        stored.first_name = "Augusta".to_string();
        store.update(&stored).await.unwrap();
        let found = store.find_by_public_id("a").await.unwrap().unwrap();
        assert_eq!(found.first_name, "Augusta");

        store.delete(&found).await.unwrap();
        assert!(store.find_by_public_id("a").await.unwrap().is_none());
        assert_eq!(store.len(), 1);

        let remaining = store.find_by_public_id("b").await.unwrap().unwrap();
        store.delete(&remaining).await.unwrap();
        assert!(store.is_empty());
    }
}
