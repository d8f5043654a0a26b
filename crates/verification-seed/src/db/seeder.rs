//! Database seeding utilities.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::SeedConfig;
use crate::generators::GeneratedVerificationCode;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A stored `VerificationCode` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[sqlx(rename_all = "camelCase")]
pub struct VerificationCode {
    pub id: String,
    pub code_hash: String,
    pub security_hash: String,
    #[sqlx(rename = "codeLast4")]
    pub code_last4: String,
    #[sqlx(rename = "securityLast4")]
    pub security_last4: String,
    pub code_value: String,
    pub security_code_value: String,
    pub batch: Option<String>,
    pub product_id: Option<String>,
}

/// Result of a seed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// A new row was inserted with this id.
    Inserted(Uuid),
    /// A row with the same code hash already existed.
    Present(String),
}

impl SeedOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, SeedOutcome::Inserted(_))
    }
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedOutcome::Inserted(_) => f.write_str("inserted"),
            SeedOutcome::Present(_) => f.write_str("present"),
        }
    }
}

/// Database seeder for the `VerificationCode` table.
pub struct Seeder {
    pool: SqlitePool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a single-connection pool to the configured database.
    ///
    /// The database file must already exist; the schema is never created here.
    pub async fn connect(config: &SeedConfig) -> Result<Self, SeedError> {
        let options =
            SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        info!("Connected to database at {}", config.database_url);
        Ok(Self::new(pool))
    }

    /// Ensures the admin verification code exists.
    pub async fn ensure_seeded(&self) -> Result<SeedOutcome, SeedError> {
        self.seed_code(&GeneratedVerificationCode::admin()).await
    }

    /// Inserts `code` unless a row with the same code hash already exists.
    ///
    /// Lookup and insert share one transaction; an early return rolls it back.
    pub async fn seed_code(
        &self,
        code: &GeneratedVerificationCode,
    ) -> Result<SeedOutcome, SeedError> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<String> =
            sqlx::query_scalar(r#"SELECT id FROM VerificationCode WHERE codeHash = ?"#)
                .bind(&code.code_hash)
                .fetch_optional(&mut *tx)
                .await?;

        if let Some(id) = existing {
            debug!("Verification code {} already present as {}", code.code_last4, id);
            return Ok(SeedOutcome::Present(id));
        }

        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO VerificationCode
                (id, codeHash, securityHash, codeLast4, securityLast4, codeValue, securityCodeValue, batch, productId)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&code.code_hash)
        .bind(&code.security_hash)
        .bind(&code.code_last4)
        .bind(&code.security_last4)
        .bind(&code.code_value)
        .bind(&code.security_code_value)
        .bind(&code.batch)
        .bind(&code.product_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Inserted verification code {} as {}", code.code_last4, id);
        Ok(SeedOutcome::Inserted(id))
    }

    /// Seeds a batch of codes, skipping those already present.
    pub async fn seed_codes(
        &self,
        codes: &[GeneratedVerificationCode],
    ) -> Result<Vec<SeedOutcome>, SeedError> {
        info!("Seeding {} verification codes...", codes.len());

        let mut outcomes = Vec::with_capacity(codes.len());
        for code in codes {
            outcomes.push(self.seed_code(code).await?);
        }

        let inserted = outcomes.iter().filter(|o| o.is_inserted()).count();
        info!(
            "Seeded {} verification codes ({} already present)",
            inserted,
            codes.len() - inserted
        );
        Ok(outcomes)
    }

    /// Looks up a stored row by its code hash.
    pub async fn find_by_code_hash(
        &self,
        code_hash: &str,
    ) -> Result<Option<VerificationCode>, SeedError> {
        let row = sqlx::query_as::<_, VerificationCode>(
            r#"
            SELECT id, codeHash, securityHash, codeLast4, securityLast4, codeValue, securityCodeValue, batch, productId
            FROM VerificationCode
            WHERE codeHash = ?
            "#,
        )
        .bind(code_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Counts rows sharing a code hash.
    pub async fn count_by_code_hash(&self, code_hash: &str) -> Result<i64, SeedError> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM VerificationCode WHERE codeHash = ?"#)
                .bind(code_hash)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes the pool, releasing the connection.
    pub async fn close(self) {
        self.pool.close().await;
    }
}

/// Seeds the admin code into the configured database and writes the outcome
/// word to `out`.
///
/// The connection is closed before returning, whether or not seeding
/// succeeded. Nothing is written on failure.
pub async fn run<W: Write>(config: &SeedConfig, mut out: W) -> Result<SeedOutcome, SeedError> {
    let seeder = Seeder::connect(config).await?;

    let outcome = seeder.ensure_seeded().await;
    seeder.close().await;

    let outcome = outcome?;
    writeln!(out, "{outcome}")?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(SeedOutcome::Inserted(Uuid::new_v4()).to_string(), "inserted");
        assert_eq!(SeedOutcome::Present("abc".to_string()).to_string(), "present");
    }

    #[test]
    fn test_outcome_is_inserted() {
        assert!(SeedOutcome::Inserted(Uuid::nil()).is_inserted());
        assert!(!SeedOutcome::Present(String::new()).is_inserted());
    }
}
