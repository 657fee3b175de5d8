//! Contact store backed by `SQLite`.

use sqlx::SqlitePool;

use super::ContactStore;
use crate::{Contact, Error, Result};

const COLUMNS: &str = "id, firstname, lastname, gender, email, phone, address, city, state, \
                       country, pincode, picture";

#[derive(Debug, sqlx::FromRow)]
struct ContactRow {
    id: String,
    firstname: Option<String>,
    lastname: Option<String>,
    gender: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    pincode: Option<String>,
    picture: Option<String>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Self {
            id: row.id,
            firstname: row.firstname,
            lastname: row.lastname,
            gender: row.gender,
            email: row.email,
            phone: row.phone,
            address: row.address,
            city: row.city,
            state: row.state,
            country: row.country,
            pincode: row.pincode,
            picture: row.picture,
        }
    }
}

/// A contact store backed by a `SQLite` pool.
///
/// Pagination follows insertion order (`rowid`); upserts keep the original
/// row so a replaced contact stays in place.
#[derive(Debug, Clone)]
pub struct SqliteContactStore {
    db: SqlitePool,
}

impl SqliteContactStore {
    /// Create a store over the given pool.
    ///
    /// Creates the contacts table if it does not exist.
    pub async fn new(db: SqlitePool) -> Result<Self> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS contacts (
                id TEXT PRIMARY KEY NOT NULL,
                firstname TEXT,
                lastname TEXT,
                gender TEXT,
                email TEXT,
                phone TEXT,
                address TEXT,
                city TEXT,
                state TEXT,
                country TEXT,
                pincode TEXT,
                picture TEXT
            )",
        )
        .execute(&db)
        .await
        .map_err(|e| Error::DatabaseError(format!("Failed to create contacts table: {e}")))?;

        Ok(Self { db })
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait::async_trait]
impl ContactStore for SqliteContactStore {
    async fn list_page(&self, offset: u64, limit: u64) -> Result<(Vec<Contact>, u64)> {
        let rows: Vec<ContactRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM contacts ORDER BY rowid LIMIT ?1 OFFSET ?2"
        ))
        .bind(to_i64(limit))
        .bind(to_i64(offset))
        .fetch_all(&self.db)
        .await
        .map_err(|e| Error::DatabaseError(format!("Failed to list contacts: {e}")))?;

        let total = self.count().await?;
        Ok((rows.into_iter().map(Contact::from).collect(), total))
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Contact>> {
        let row: Option<ContactRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM contacts WHERE id = ?1"))
                .bind(id)
                .fetch_optional(&self.db)
                .await
                .map_err(|e| Error::DatabaseError(format!("Failed to get contact: {e}")))?;

        Ok(row.map(Contact::from))
    }

    async fn save(&self, contact: &Contact) -> Result<Contact> {
        let query = sqlx::query(
            "INSERT INTO contacts (id, firstname, lastname, gender, email, phone, address,
                                   city, state, country, pincode, picture)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
             ON CONFLICT(id) DO UPDATE SET
                 firstname = excluded.firstname,
                 lastname = excluded.lastname,
                 gender = excluded.gender,
                 email = excluded.email,
                 phone = excluded.phone,
                 address = excluded.address,
                 city = excluded.city,
                 state = excluded.state,
                 country = excluded.country,
                 pincode = excluded.pincode,
                 picture = excluded.picture",
        )
        .bind(&contact.id);

        contact
            .attributes()
            .into_iter()
            .fold(query, |query, (_, value)| query.bind(value))
            .execute(&self.db)
            .await
            .map_err(|e| Error::DatabaseError(format!("Failed to save contact: {e}")))?;

        Ok(contact.clone())
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool> {
        let existing: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM contacts WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| Error::DatabaseError(format!("Failed to check contact: {e}")))?;

        Ok(existing.is_some())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| Error::DatabaseError(format!("Failed to delete contact: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.db)
            .await
            .map_err(|e| Error::DatabaseError(format!("Failed to count contacts: {e}")))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    async fn test_store() -> Result<SqliteContactStore> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| Error::DatabaseError(format!("Failed to create test pool: {e}")))?;
        SqliteContactStore::new(pool).await
    }

    fn jane() -> Contact {
        Contact {
            firstname: Some("Jane".to_string()),
            lastname: Some("Smith".to_string()),
            email: Some("jane.smith@example.com".to_string()),
            ..Contact::with_id("c-jane")
        }
    }

    #[tokio::test]
    async fn test_save_and_get() -> Result<()> {
        let store = test_store().await?;
        store.save(&jane()).await?;

        assert_eq!(store.get_by_id("c-jane").await?, Some(jane()));
        assert_eq!(store.get_by_id("missing").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_save_replaces_every_field() -> Result<()> {
        let store = test_store().await?;
        store.save(&jane()).await?;

        let replacement = Contact {
            city: Some("San Francisco".to_string()),
            ..Contact::with_id("c-jane")
        };
        store.save(&replacement).await?;

        assert_eq!(store.get_by_id("c-jane").await?, Some(replacement));
        assert_eq!(store.count().await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_page_in_insertion_order() -> Result<()> {
        let store = test_store().await?;
        for id in ["z", "a", "m"] {
            store.save(&Contact::with_id(id)).await?;
        }
        // Updating keeps the row in its original position.
        store.save(&Contact::with_id("z")).await?;

        let (first, total) = store.list_page(0, 2).await?;
        assert_eq!(total, 3);
        let ids: Vec<&str> = first.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a"]);

        let (second, _) = store.list_page(2, 2).await?;
        assert_eq!(second, vec![Contact::with_id("m")]);
        Ok(())
    }

    #[tokio::test]
    async fn test_exists_and_delete() -> Result<()> {
        let store = test_store().await?;
        store.save(&jane()).await?;

        assert!(store.exists_by_id("c-jane").await?);
        assert!(store.delete_by_id("c-jane").await?);
        assert!(!store.delete_by_id("c-jane").await?);
        assert!(!store.exists_by_id("c-jane").await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_new_is_idempotent_over_existing_table() -> Result<()> {
        let store = test_store().await?;
        store.save(&jane()).await?;

        let reopened = SqliteContactStore::new(store.db.clone()).await?;
        assert_eq!(reopened.count().await?, 1);
        Ok(())
    }
}
