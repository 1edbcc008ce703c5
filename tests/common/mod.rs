#![allow(dead_code)]

use rusqlite::{params, Connection};
use std::path::PathBuf;
use tempfile::TempDir;

const HAMSTER_SCHEMA: &str = "
CREATE TABLE categories (
    id INTEGER PRIMARY KEY,
    name VARCHAR(500),
    search_name VARCHAR(500)
);
CREATE TABLE activities (
    id INTEGER PRIMARY KEY,
    name VARCHAR(500),
    deleted BOOL DEFAULT FALSE,
    category_id INTEGER REFERENCES categories(id),
    search_name VARCHAR(500)
);
CREATE TABLE facts (
    id INTEGER PRIMARY KEY,
    activity_id INTEGER REFERENCES activities(id),
    start_time TIMESTAMP,
    end_time TIMESTAMP,
    description VARCHAR(500)
);
CREATE TABLE tags (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    autocomplete BOOL DEFAULT TRUE
);
CREATE TABLE fact_tags (
    fact_id INTEGER REFERENCES facts(id),
    tag_id INTEGER REFERENCES tags(id)
);
";

/// Hamster database in a temporary directory, writable by the test.
pub struct HamsterDb {
    _temp_dir: TempDir,
    pub path: PathBuf,
    conn: Connection,
}

impl HamsterDb {
    pub fn create() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("hamster.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(HAMSTER_SCHEMA).unwrap();
        HamsterDb {
            _temp_dir: temp_dir,
            path,
            conn,
        }
    }

    pub fn category(&self, name: &str) -> i64 {
        self.conn
            .execute("INSERT INTO categories (name, search_name) VALUES (?1, lower(?1))", params![name])
            .unwrap();
        self.conn.last_insert_rowid()
    }

    pub fn activity(&self, name: &str, category_id: Option<i64>) -> i64 {
        self.conn
            .execute(
                "INSERT INTO activities (name, category_id, search_name) VALUES (?1, ?2, lower(?1))",
                params![name, category_id],
            )
            .unwrap();
        self.conn.last_insert_rowid()
    }

    /// Timestamps use Hamster's `YYYY-MM-DD HH:MM:SS` format; `end = None` is a running fact.
    pub fn fact(&self, activity_id: i64, start: &str, end: Option<&str>, description: &str, tags: &[&str]) -> i64 {
        self.conn
            .execute(
                "INSERT INTO facts (activity_id, start_time, end_time, description) VALUES (?1, ?2, ?3, ?4)",
                params![activity_id, start, end, description],
            )
            .unwrap();
        let fact_id = self.conn.last_insert_rowid();

        for tag in tags {
            self.conn.execute("INSERT OR IGNORE INTO tags (name) VALUES (?1)", params![tag]).unwrap();
            self.conn
                .execute(
                    "INSERT INTO fact_tags (fact_id, tag_id) SELECT ?1, id FROM tags WHERE name = ?2",
                    params![fact_id, tag],
                )
                .unwrap();
        }
        fact_id
    }
}
