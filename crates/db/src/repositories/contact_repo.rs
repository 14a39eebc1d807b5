//! Repository for the `contacts` table.

use sqlx::PgPool;
use wardbook_core::pagination::{clamp_page, clamp_page_size, Pagination};
use wardbook_core::types::DbId;

use crate::models::contact::{Contact, CreateContact, UpdateContact};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email, phone, address1, address2, \
     city, state, zip_code, division, created_at, updated_at";

/// Provides CRUD operations for contacts.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact, returning the created row.
    ///
    /// `created_at` and `updated_at` are stamped in UTC by the database.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts
                (first_name, last_name, email, phone, address1, address2,
                 city, state, zip_code, division)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address1)
            .bind(&input.address2)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.zip_code)
            .bind(&input.division)
            .fetch_one(pool)
            .await
    }

    /// Find a contact by its internal ID.
    ///
    /// A non-positive ID can never match a BIGSERIAL key, so it returns
    /// `Ok(None)` without touching the database.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        if id <= 0 {
            return Ok(None);
        }
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all contacts ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }

    /// Count all contacts.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contacts")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Fetch one page of contacts plus the navigation state for it.
    ///
    /// `page` and `page_size` are clamped to valid bounds before the count,
    /// and the requested page is clamped again against the last page, so
    /// the window never runs past the data.
    pub async fn list_page(
        pool: &PgPool,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<(Vec<Contact>, Pagination), sqlx::Error> {
        let page = clamp_page(page);
        let page_size = clamp_page_size(page_size);

        let total = Self::count(pool).await?;
        let pagination = Pagination::compute(total, page_size, page);

        let query = format!(
            "SELECT {COLUMNS} FROM contacts
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Contact>(&query)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(pool)
            .await?;

        Ok((rows, pagination))
    }

    /// Update a contact. Only non-`None` fields in `input` are applied, and
    /// `updated_at` is stamped in UTC.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContact,
    ) -> Result<Option<Contact>, sqlx::Error> {
        if id <= 0 {
            return Ok(None);
        }
        let query = format!(
            "UPDATE contacts SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                address1 = COALESCE($6, address1),
                address2 = COALESCE($7, address2),
                city = COALESCE($8, city),
                state = COALESCE($9, state),
                zip_code = COALESCE($10, zip_code),
                division = COALESCE($11, division),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address1)
            .bind(&input.address2)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.zip_code)
            .bind(&input.division)
            .fetch_optional(pool)
            .await
    }

    /// Delete a contact by ID. Returns `true` if a row was removed.
    ///
    /// Non-positive IDs return `Ok(false)` without querying.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        if id <= 0 {
            return Ok(false);
        }
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every contact. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts").execute(pool).await?;
        tracing::warn!(rows = result.rows_affected(), "Deleted all contacts");
        Ok(result.rows_affected())
    }
}
