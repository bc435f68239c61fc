use std::path::Path;

use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

use crate::error::StoreError;
use crate::users::repo_types::{UserRecord, Zip};
use crate::users::schema::{
    self, COLUMNS, CREATE_USERS_TABLE, DELETE_ALL_USERS, DELETE_USER_BY_ID, INSERT_USER,
    SELECT_ALL_USERS,
};

/// Owns the single connection to the users database.
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    /// Open the database at `location`, creating the file if it is missing.
    #[instrument]
    pub async fn open(location: &Path) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(location)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|source| StoreError::Connection {
                location: location.to_path_buf(),
                source,
            })?;
        info!(location = %location.display(), "database opened");
        Ok(Self { pool })
    }

    /// Create the users table unless it already exists.
    #[instrument(skip(self))]
    pub async fn create_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_USERS_TABLE).execute(&self.pool).await?;
        info!("users table ready");
        Ok(())
    }

    /// Insert every row in one transaction. Each row must hold exactly one
    /// value per schema column, in schema order.
    #[instrument(skip(self, rows), fields(count = rows.len()))]
    pub async fn insert(&self, rows: &[Vec<String>]) -> Result<u64, StoreError> {
        if let Some(bad) = rows.iter().find(|r| r.len() != COLUMNS.len()) {
            return Err(StoreError::FieldCount {
                expected: COLUMNS.len(),
                found: bad.len(),
            });
        }
        if rows.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;
        for row in rows {
            let query = row
                .iter()
                .fold(sqlx::query(INSERT_USER), |q, value| q.bind(value.as_str()));
            inserted += query.execute(&mut *tx).await?.rows_affected();
        }
        tx.commit().await?;

        info!(inserted, "users inserted");
        Ok(inserted)
    }

    /// Stream every row in store order.
    pub fn select_all(&self) -> BoxStream<'_, Result<UserRecord, StoreError>> {
        debug!("selecting all users");
        sqlx::query_as::<_, UserRecord>(SELECT_ALL_USERS)
            .fetch(&self.pool)
            .map_err(StoreError::from)
            .boxed()
    }

    /// Set one column of the row with `id`. `column` must be one of the
    /// schema columns; a missing id affects zero rows and is not an error.
    #[instrument(skip(self, value))]
    pub async fn update_column(
        &self,
        column: &str,
        id: i64,
        value: &str,
    ) -> Result<u64, StoreError> {
        let column = schema::column(column)?;
        let sql = schema::update_column_sql(column);
        let affected = sqlx::query(&sql)
            .bind(value)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        info!(affected, "user updated");
        Ok(affected)
    }

    /// Delete the row with `id`, if any.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, StoreError> {
        let affected = sqlx::query(DELETE_USER_BY_ID)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        info!(affected, "user deleted");
        Ok(affected)
    }

    /// Delete every row.
    #[instrument(skip(self))]
    pub async fn delete_all(&self) -> Result<u64, StoreError> {
        let affected = sqlx::query(DELETE_ALL_USERS)
            .execute(&self.pool)
            .await?
            .rows_affected();
        info!(affected, "all users deleted");
        Ok(affected)
    }

    /// Close the connection. Dropping the store also releases it.
    pub async fn close(self) {
        self.pool.close().await;
        debug!("database closed");
    }
}
