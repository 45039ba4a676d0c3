use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::{debug, info};

use crate::Error;

pub const IN_MEMORY: &str = ":memory:";

pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Opens (creating if needed) the SQLite database at `database_path`.
    /// `":memory:"` gives a private in-memory database, used by the tests.
    pub async fn new(database_path: &str) -> Result<Self, Error> {
        let pool = if database_path == IN_MEMORY {
            // A single connection that never idles out, otherwise the data goes with it.
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
                .await?
        } else {
            let path = std::env::current_dir()?.join(database_path);
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    debug!("Creating database directory {:?}", parent);
                    std::fs::create_dir_all(parent)?;
                }
            }

            info!("Opening SQLite database at {:?}", path);
            let options = SqliteConnectOptions::new()
                .filename(&path)
                .create_if_missing(true);
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect_with(options)
                .await?
        };

        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), Error> {
        debug!("Applying migrations...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        debug!("Migrations applied.");
        Ok(())
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}
