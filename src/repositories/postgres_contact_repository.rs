use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::domain::{ContactId, Sort};
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactPayload, NewContact};
use crate::repositories::traits::ContactRepository;

const COLUMNS: &str = "id, first_name, last_name, email, phone, company, job_title";

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS contacts (
    seq        BIGSERIAL NOT NULL,
    id         TEXT PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name  TEXT NOT NULL,
    email      TEXT NOT NULL,
    phone      TEXT NOT NULL,
    company    TEXT NOT NULL,
    job_title  TEXT NOT NULL
)
"#;

#[derive(Debug, sqlx::FromRow)]
struct ContactRow {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    company: String,
    job_title: String,
}

impl TryFrom<ContactRow> for Contact {
    type Error = StoreError;

    fn try_from(row: ContactRow) -> Result<Self, Self::Error> {
        let id = ContactId::new(row.id).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        Ok(Contact {
            id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            company: row.company,
            job_title: row.job_title,
        })
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Contact store backed by a single Postgres table.
///
/// The table is created on connect if it does not exist. Text columns are
/// ordered with the `C` collation so sorting is byte-wise, matching the
/// in-memory store.
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    /// Connect, then make sure the `contacts` table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        let repo = Self::from_pool(pool);
        repo.ensure_schema().await?;
        Ok(repo)
    }

    /// Wrap an existing pool without touching the schema.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        tracing::debug!("contacts table ready");
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn insert(&self, contact: &NewContact) -> StoreResult<Contact> {
        let sql = format!(
            "INSERT INTO contacts ({COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {COLUMNS}"
        );

        let row: ContactRow = sqlx::query_as(&sql)
            .bind(ContactId::generate().into_inner())
            .bind(&contact.first_name)
            .bind(&contact.last_name)
            .bind(&contact.email)
            .bind(&contact.phone)
            .bind(&contact.company)
            .bind(&contact.job_title)
            .fetch_one(&self.pool)
            .await?;

        row.try_into()
    }

    async fn find(&self, sort: Sort, skip: u64, limit: u64) -> StoreResult<Vec<Contact>> {
        // Column and direction come from closed enums, never from request text.
        let sql = format!(
            "SELECT {COLUMNS} FROM contacts ORDER BY {} COLLATE \"C\" {}, seq ASC LIMIT $1 OFFSET $2",
            sort.field.column(),
            sort.order.sql()
        );

        let rows: Vec<ContactRow> = sqlx::query_as(&sql)
            .bind(to_i64(limit))
            .bind(to_i64(skip))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Contact::try_from).collect()
    }

    async fn get(&self, id: &ContactId) -> StoreResult<Option<Contact>> {
        let sql = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");

        let row: Option<ContactRow> = sqlx::query_as(&sql)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Contact::try_from).transpose()
    }

    async fn update(
        &self,
        id: &ContactId,
        changes: &ContactPayload,
    ) -> StoreResult<Option<Contact>> {
        let sql = format!(
            "UPDATE contacts SET \
                first_name = COALESCE($2, first_name), \
                last_name = COALESCE($3, last_name), \
                email = COALESCE($4, email), \
                phone = COALESCE($5, phone), \
                company = COALESCE($6, company), \
                job_title = COALESCE($7, job_title) \
             WHERE id = $1 RETURNING {COLUMNS}"
        );

        let row: Option<ContactRow> = sqlx::query_as(&sql)
            .bind(id.as_str())
            .bind(changes.first_name.as_deref())
            .bind(changes.last_name.as_deref())
            .bind(changes.email.as_deref())
            .bind(changes.phone.as_deref())
            .bind(changes.company.as_deref())
            .bind(changes.job_title.as_deref())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Contact::try_from).transpose()
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
