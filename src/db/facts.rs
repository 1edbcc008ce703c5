use super::db::{Db, DbError};
use crate::libs::entry::ActivityRow;
use crate::libs::query::Filter;
use crate::libs::sync::FactSource;
use crate::libs::tags::TagSet;
use chrono::{Duration, NaiveDateTime};
use rusqlite::{named_params, Connection, Result};
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Facts without an end time are still running and are left out. The single
// MIN() makes SQLite take the bare columns (activity, tags) from the earliest
// fact of each group.
const SELECT_DAY_TOTALS: &str = "
WITH day_facts AS (
    SELECT f.start_time AS start_time,
           a.name AS activity,
           c.name AS category,
           f.description AS description,
           CAST(strftime('%s', f.end_time) - strftime('%s', f.start_time) AS REAL) / 3600 AS hours,
           lower((
               SELECT GROUP_CONCAT(t.name, ',')
               FROM fact_tags AS ft
               JOIN tags AS t ON ft.tag_id = t.id
               WHERE ft.fact_id = f.id
           )) AS tags
    FROM facts AS f
    LEFT JOIN activities AS a ON f.activity_id = a.id
    LEFT JOIN categories AS c ON a.category_id = c.id
    WHERE f.start_time >= :from AND f.start_time < :to AND f.end_time IS NOT NULL
)
SELECT MIN(start_time) AS first_start,
       activity,
       description,
       ROUND(SUM(hours), 2) AS total_hours,
       tags
FROM day_facts
WHERE (:project IS NULL OR category = :project)
  AND (:tags IS NULL OR has_any_tag(tags, :tags))
GROUP BY description
ORDER BY first_start";

/// Per-day task totals read from a Hamster database.
pub struct Facts {
    pub conn: Connection,
}

impl Facts {
    pub fn open(path: &Path) -> std::result::Result<Facts, DbError> {
        let db = Db::open(path)?;

        Ok(Facts { conn: db.conn })
    }

    /// Rows for facts starting within `[day, day + 24h)`, grouped by description.
    pub fn fetch(&self, day: NaiveDateTime, filter: &Filter) -> Result<Vec<ActivityRow>> {
        let from = day.format(TIMESTAMP_FORMAT).to_string();
        let to = (day + Duration::hours(24)).format(TIMESTAMP_FORMAT).to_string();
        let tags = filter.tags.as_ref().map(TagSet::to_string);

        let mut stmt = self.conn.prepare_cached(SELECT_DAY_TOTALS)?;
        let row_iter = stmt.query_map(
            named_params! {
                ":from": from,
                ":to": to,
                ":project": filter.project,
                ":tags": tags,
            },
            |row| {
                let tags: Option<String> = row.get(4)?;
                Ok(ActivityRow {
                    activity: row.get(1)?,
                    description: row.get(2)?,
                    hours: row.get(3)?,
                    tags: TagSet::parse(&tags.unwrap_or_default()),
                })
            },
        )?;

        let mut rows = Vec::new();
        for row in row_iter {
            rows.push(row?);
        }
        Ok(rows)
    }
}

impl FactSource for Facts {
    fn day_rows(&mut self, day: NaiveDateTime, filter: &Filter) -> Result<Vec<ActivityRow>> {
        self.fetch(day, filter)
    }
}
