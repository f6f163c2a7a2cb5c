//! PostgreSQL implementation of MoodRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

use crate::domain::foundation::{DomainError, ErrorCode, MoodEntryId, Timestamp};
use crate::domain::mood::{Intensity, MoodEntry, MoodLabel, Notes};
use crate::ports::{MoodFilter, MoodRepository};

const SELECT_COLUMNS: &str =
    "SELECT id, entry_date, mood, intensity, notes, created_at, updated_at FROM mood_entries";

/// PostgreSQL implementation of MoodRepository.
#[derive(Clone)]
pub struct PostgresMoodRepository {
    pool: PgPool,
}

impl PostgresMoodRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MoodRepository for PostgresMoodRepository {
    async fn save(&self, entry: &MoodEntry) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO mood_entries (
                id, entry_date, mood, intensity, notes, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(entry.id().as_uuid())
        .bind(entry.entry_date())
        .bind(entry.mood().as_str())
        .bind(i16::from(entry.intensity().value()))
        .bind(entry.notes())
        .bind(entry.created_at().as_datetime())
        .bind(entry.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("insert mood entry", e))?;

        Ok(())
    }

    async fn update(&self, entry: &MoodEntry) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE mood_entries SET
                entry_date = $2,
                mood = $3,
                intensity = $4,
                notes = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(entry.id().as_uuid())
        .bind(entry.entry_date())
        .bind(entry.mood().as_str())
        .bind(i16::from(entry.intensity().value()))
        .bind(entry.notes())
        .bind(entry.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("update mood entry", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::mood_entry_not_found(entry.id()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &MoodEntryId) -> Result<Option<MoodEntry>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch mood entry", e))?;

        row.map(row_to_entry).transpose()
    }

    async fn list(&self, filter: &MoodFilter) -> Result<Vec<MoodEntry>, DomainError> {
        let mut builder = list_query(filter);

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("list mood entries", e))?;

        rows.into_iter().map(row_to_entry).collect()
    }

    async fn delete(&self, id: &MoodEntryId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM mood_entries WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete mood entry", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::mood_entry_not_found(id));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn list_query(filter: &MoodFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new(SELECT_COLUMNS);
    builder.push(" WHERE TRUE");

    if let Some(from) = filter.from {
        builder.push(" AND entry_date >= ").push_bind(from);
    }
    if let Some(to) = filter.to {
        builder.push(" AND entry_date <= ").push_bind(to);
    }
    if let Some(mood) = filter.mood {
        builder.push(" AND mood = ").push_bind(mood.as_str());
    }

    builder.push(" ORDER BY entry_date DESC, created_at DESC");

    if let Some(limit) = filter.limit {
        builder.push(" LIMIT ").push_bind(i64::from(limit));
    }
    if filter.offset > 0 {
        builder.push(" OFFSET ").push_bind(i64::from(filter.offset));
    }

    builder
}

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}

fn row_to_entry(row: PgRow) -> Result<MoodEntry, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let entry_date: NaiveDate = column(&row, "entry_date")?;
    let mood: String = column(&row, "mood")?;
    let intensity: i16 = column(&row, "intensity")?;
    let notes: Option<String> = column(&row, "notes")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;
    let updated_at: DateTime<Utc> = column(&row, "updated_at")?;

    let corrupt = |e: crate::domain::foundation::ValidationError| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid stored mood entry {}: {}", id, e),
        )
    };

    Ok(MoodEntry::reconstitute(
        MoodEntryId::from_uuid(id),
        entry_date,
        mood.parse::<MoodLabel>().map_err(corrupt)?,
        Intensity::try_new(i64::from(intensity)).map_err(corrupt)?,
        Notes::parse(notes).map_err(corrupt)?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
