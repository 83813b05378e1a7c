//! PostgreSQL implementation of AliasStore.
//!
//! Key uniqueness is enforced by the unique index on `aliases.alias_key`;
//! a unique violation on insert or update is reported as `DuplicateKey`.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::alias::{AliasField, AliasKey, AliasRecord, Destination, NewAlias};
use crate::domain::foundation::{AliasId, DomainError, ErrorCode, Timestamp};
use crate::ports::AliasStore;

const SELECT_COLUMNS: &str = "id, alias_key, destination, owner_email, owner_display_name, created_at, updated_at";

/// PostgreSQL implementation of AliasStore.
#[derive(Clone)]
pub struct PostgresAliasStore {
    pool: PgPool,
}

impl PostgresAliasStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AliasStore for PostgresAliasStore {
    async fn insert(&self, alias: NewAlias) -> Result<AliasRecord, DomainError> {
        let record = AliasRecord::from_new(AliasId::new(), alias);

        sqlx::query(
            r#"
            INSERT INTO aliases (
                id, alias_key, destination, owner_email, owner_display_name, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.key().as_str())
        .bind(record.destination().as_str())
        .bind(record.owner_email())
        .bind(record.owner_display_name())
        .bind(record.created_at().as_datetime())
        .bind(record.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, record.key(), "insert"))?;

        Ok(record)
    }

    async fn update(&self, record: &AliasRecord) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE aliases SET
                alias_key = $2,
                destination = $3,
                updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.key().as_str())
        .bind(record.destination().as_str())
        .bind(record.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, record.key(), "update"))?;

        if result.rows_affected() == 0 {
            return Err(not_found(record.id()));
        }

        Ok(())
    }

    async fn delete(&self, id: &AliasId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM aliases WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete alias: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &AliasId) -> Result<Option<AliasRecord>, DomainError> {
        let sql = format!("SELECT {} FROM aliases WHERE id = $1", SELECT_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch alias: {}", e),
                )
            })?;

        row.map(row_to_alias).transpose()
    }

    async fn query_equals(
        &self,
        field: AliasField,
        value: &str,
    ) -> Result<Vec<AliasRecord>, DomainError> {
        let sql = format!(
            "SELECT {} FROM aliases WHERE {} = $1 ORDER BY created_at, id",
            SELECT_COLUMNS,
            column_for(field)
        );

        let rows = sqlx::query(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to query aliases by {}: {}", field.as_str(), e),
                )
            })?;

        rows.into_iter().map(row_to_alias).collect()
    }

    async fn all(&self) -> Result<Vec<AliasRecord>, DomainError> {
        let sql = format!("SELECT {} FROM aliases ORDER BY created_at, id", SELECT_COLUMNS);
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch aliases: {}", e),
                )
            })?;

        rows.into_iter().map(row_to_alias).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn column_for(field: AliasField) -> &'static str {
    match field {
        AliasField::Key => "alias_key",
        AliasField::Destination => "destination",
        AliasField::OwnerEmail => "owner_email",
        AliasField::OwnerDisplayName => "owner_display_name",
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

fn write_error(err: sqlx::Error, key: &AliasKey, action: &str) -> DomainError {
    if is_unique_violation(&err) {
        return DomainError::new(ErrorCode::DuplicateKey, "Key already exists")
            .with_detail("key", key.as_str());
    }
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to {} alias: {}", action, err),
    )
}

fn not_found(id: &AliasId) -> DomainError {
    DomainError::new(ErrorCode::AliasNotFound, format!("Alias not found: {}", id))
        .with_detail("id", id.to_string())
}

fn column_error(column: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to get {}: {}", column, err),
    )
}

fn row_to_alias(row: sqlx::postgres::PgRow) -> Result<AliasRecord, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_error("id", e))?;
    let key: String = row
        .try_get("alias_key")
        .map_err(|e| column_error("alias_key", e))?;
    let destination: String = row
        .try_get("destination")
        .map_err(|e| column_error("destination", e))?;
    let owner_email: String = row
        .try_get("owner_email")
        .map_err(|e| column_error("owner_email", e))?;
    let owner_display_name: String = row
        .try_get("owner_display_name")
        .map_err(|e| column_error("owner_display_name", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| column_error("updated_at", e))?;

    Ok(AliasRecord::reconstitute(
        AliasId::from_uuid(id),
        AliasKey::from_stored(key),
        Destination::from_stored(destination),
        owner_email,
        owner_display_name,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
