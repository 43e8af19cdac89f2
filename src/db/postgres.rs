use log::warn;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::{EmployeeStore, StoreError, StoreResult};
use crate::config::Config;
use crate::models::employee::Employee;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS employee (
        id SERIAL PRIMARY KEY,
        public_id TEXT NOT NULL UNIQUE,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL,
        home_address TEXT NOT NULL,
        date_of_birth TIMESTAMP NOT NULL,
        date_of_employment TIMESTAMP NOT NULL
    )
"#;

const NULLABLE_COLUMNS: &str = "SELECT column_name::TEXT FROM information_schema.columns \
     WHERE table_schema = current_schema() AND table_name = 'employee' AND is_nullable = 'YES' \
     ORDER BY ordinal_position";

const SELECT_COLUMNS: &str = "SELECT id, public_id, first_name, last_name, email, home_address, \
     date_of_birth, date_of_employment FROM employee";

pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &Config) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Create the `employee` table if it is not there yet.
    ///
    /// A table created by an older deployment is left as it is; nullable
    /// columns in it are reported, since a NULL cell cannot be read back.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;

        let nullable: Vec<String> = sqlx::query_scalar(NULLABLE_COLUMNS)
            .fetch_all(&self.pool)
            .await?;
        if let Some(message) = nullable_columns_warning(&nullable) {
            warn!("{}", message);
        }
        Ok(())
    }
}

pub(crate) fn nullable_columns_warning(columns: &[String]) -> Option<String> {
    if columns.is_empty() {
        return None;
    }
    Some(format!(
        "employee table has nullable columns ({}); rows with NULL values will fail to load",
        columns.join(", ")
    ))
}

fn map_write_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::Duplicate,
        _ => StoreError::Database(err),
    }
}

impl EmployeeStore for PgEmployeeStore {
    async fn find_by_first_name(&self, first_name: &str) -> StoreResult<Option<Employee>> {
        let sql = format!("{} WHERE first_name = $1 LIMIT 1", SELECT_COLUMNS);
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(first_name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    async fn find_by_public_id(&self, public_id: &str) -> StoreResult<Option<Employee>> {
        let sql = format!("{} WHERE public_id = $1 LIMIT 1", SELECT_COLUMNS);
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(public_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    async fn insert(&self, employee: &Employee) -> StoreResult<Employee> {
        let mut tx = self.pool.begin().await?;

        // Creates sharing a first name run one at a time; edits never take this lock.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(&employee.first_name)
            .execute(&mut *tx)
            .await?;

        let taken: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employee WHERE first_name = $1)")
                .bind(&employee.first_name)
                .fetch_one(&mut *tx)
                .await?;
        if taken {
            return Err(StoreError::Duplicate);
        }

        let stored = sqlx::query_as::<_, Employee>(
            "INSERT INTO employee (public_id, first_name, last_name, email, home_address, date_of_birth, date_of_employment) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id, public_id, first_name, last_name, email, home_address, date_of_birth, date_of_employment",
        )
        .bind(&employee.public_id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.home_address)
        .bind(employee.date_of_birth)
        .bind(employee.date_of_employment)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_write_error)?;

        tx.commit().await?;
        Ok(stored)
    }

    async fn list_all(&self) -> StoreResult<Vec<Employee>> {
        let sql = format!("{} ORDER BY id", SELECT_COLUMNS);
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    async fn update(&self, employee: &Employee) -> StoreResult<()> {
        sqlx::query(
            "UPDATE employee SET first_name = $1, last_name = $2, email = $3, home_address = $4 \
             WHERE id = $5",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.home_address)
        .bind(employee.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, employee: &Employee) -> StoreResult<()> {
        sqlx::query("DELETE FROM employee WHERE id = $1")
            .bind(employee.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
