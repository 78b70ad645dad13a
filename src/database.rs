pub mod models;
pub mod schema;
pub mod sqlx;

use crate::error::Error;
use ::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use ::sqlx::SqlitePool;
use log::info;
use std::str::FromStr;

/// Opens a pool on `url` with foreign keys enforced and makes sure the schema exists.
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, Error> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(Error::persistence("parse database url", None))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(Error::persistence("connect to database", None))?;
    info!("connected to {url} (max {max_connections} connections)");
    schema::migrate(&pool).await?;
    Ok(pool)
}
