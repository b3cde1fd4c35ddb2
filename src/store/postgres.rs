//! PostgreSQL store backed by sqlx
//!
//! sqlx is async-only, so the store owns a current-thread tokio runtime and
//! blocks on every statement. The pool holds a single connection: the import
//! never has more than one statement in flight.

use log::{debug, info, warn};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::runtime::{Builder, Runtime};

use crate::config::DatabaseConfig;
use crate::error::{ImportError, Result};
use crate::record::PersonRecord;
use crate::store::PersonStore;

/// [`PersonStore`] writing to a PostgreSQL table
pub struct PgPersonStore {
    runtime: Runtime,
    pool: PgPool,
    count_sql: String,
    insert_sql: String,
}

impl PgPersonStore {
    /// Open the pool and ping the database
    ///
    /// Any failure here is reported as [`ImportError::Connection`].
    pub fn connect(config: &DatabaseConfig) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ImportError::connection("Failed to start database runtime", e))?;

        info!("Connecting to database: {}", config.masked_url());

        let pool = runtime
            .block_on(
                PgPoolOptions::new()
                    .max_connections(1)
                    .acquire_timeout(config.connection_timeout)
                    .connect(&config.database_url),
            )
            .map_err(|e| {
                warn!("Failed to connect to database: {e}");
                ImportError::connection("Failed to connect to database", e)
            })?;

        let mut store = Self {
            runtime,
            pool,
            count_sql: count_statement(&config.table),
            insert_sql: insert_statement(&config.table),
        };
        store.ping()?;

        Ok(store)
    }
}

impl PersonStore for PgPersonStore {
    fn ping(&mut self) -> Result<()> {
        self.runtime
            .block_on(sqlx::query("SELECT 1").execute(&self.pool))
            .map(|_| ())
            .map_err(|e| ImportError::connection("Failed to ping database", e))
    }

    fn count_rows(&mut self) -> Result<u64> {
        let count: i64 = self
            .runtime
            .block_on(sqlx::query_scalar(&self.count_sql).fetch_one(&self.pool))
            .map_err(|e| ImportError::query("Failed to count existing rows", e))?;

        u64::try_from(count)
            .map_err(|e| ImportError::query("Row count out of range", e))
    }

    fn insert(&mut self, record: &PersonRecord) -> Result<u64> {
        debug!("Inserting person record {}", record.person_document);

        let result = self
            .runtime
            .block_on(
                sqlx::query(&self.insert_sql)
                    .bind(record.person_document.as_str())
                    .bind(record.is_private.as_str())
                    .bind(record.is_incomplete.as_str())
                    .bind(record.last_purchase_date.as_str())
                    .bind(record.avg_ticket_value)
                    .bind(record.last_ticket_value)
                    .bind(record.most_frequent_store_document.as_str())
                    .bind(record.last_purchase_store_document.as_str())
                    .execute(&self.pool),
            )
            .map_err(|e| ImportError::query("Failed to insert person record", e))?;

        Ok(result.rows_affected())
    }
}

fn count_statement(table: &str) -> String {
    format!("SELECT COUNT(id_pessoa) AS total_registros FROM {table}")
}

// The ninth value, the creation timestamp, is assigned by the server.
fn insert_statement(table: &str) -> String {
    format!(
        r"INSERT INTO {table}
            (
                cod_cpf_pessoa,
                flg_private,
                flg_incompleto,
                dat_ultima_compra,
                vlr_ticket_medio,
                vlr_ticket_ultima_compra,
                cod_cnpj_loja_mais_frequente,
                cod_cnpj_loja_ultima_compra,
                dat_criacao_registro
            )
            VALUES ($1, $2, $3, $4::date, $5, $6, $7, $8, NOW())"
    )
}
