use crate::libs::tags::TagSet;
use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use thiserror::Error;

/// Name of the SQL function `has_any_tag(tags, wanted)`.
///
/// Both arguments are comma-joined tag lists; the result is true when they
/// share a whole tag, ignoring case.
pub const HAS_ANY_TAG: &str = "has_any_tag";

/// Prepared (never run) right after opening so a non-Hamster file fails early.
const PROBE_SCHEMA: &str = "SELECT 1 FROM facts, activities, categories, tags, fact_tags LIMIT 1";

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database connection error ({path}): {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },
}

/// Read-only connection to a Hamster database.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn open(path: &Path) -> Result<Db, DbError> {
        let connection_error = |source| DbError::Open {
            path: path.display().to_string(),
            source,
        };

        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX)
            .map_err(connection_error)?;
        register_functions(&conn).map_err(connection_error)?;
        conn.prepare(PROBE_SCHEMA).map_err(connection_error)?;

        Ok(Db { conn })
    }
}

/// Installs the query-time functions the fact queries rely on.
pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        HAS_ANY_TAG,
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let tags: Option<String> = ctx.get(0)?;
            let wanted: Option<String> = ctx.get(1)?;
            Ok(match (tags, wanted) {
                (Some(tags), Some(wanted)) => TagSet::parse(&tags).intersects(&TagSet::parse(&wanted)),
                _ => false,
            })
        },
    )
}
