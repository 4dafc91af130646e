//! Durable storage for the activity key-value entries.
//!
//! Connections come from [`open_db`] / [`open_db_in_memory`] only; both run
//! [`migrations::apply_migrations`] before handing the connection out, so the
//! `kv_entries` table always exists for callers. A database stamped with a
//! schema newer than this build knows is rejected with
//! [`DbError::SchemaTooNew`] and left untouched.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening or migrating the activity database.
#[derive(Debug)]
pub enum DbError {
    /// The SQLite driver reported an error.
    Sqlite(rusqlite::Error),
    /// `user_version` is ahead of the newest known migration.
    SchemaTooNew { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "activity db is at schema v{found}, this build supports up to v{supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        if let Self::Sqlite(err) = self {
            Some(err)
        } else {
            None
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Sqlite(err)
    }
}
