use chrono::Utc;
use rusqlite::params;

use super::{Database, DbError};

// ---------------------------------------------------------------------------
// Settings queries — key/value rows holding JSON snapshots
// ---------------------------------------------------------------------------

pub fn set_setting(db: &Database, key: &str, value_json: &str) -> Result<(), DbError> {
    let conn = db.conn();
    conn.execute(
        "INSERT INTO settings (key, value_json, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key)
         DO UPDATE SET value_json = excluded.value_json, updated_at = excluded.updated_at",
        params![key, value_json, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn get_setting(db: &Database, key: &str) -> Result<Option<String>, DbError> {
    let conn = db.conn();
    let mut stmt = conn.prepare("SELECT value_json FROM settings WHERE key = ?1")?;
    let mut rows = stmt.query_map(params![key], |row| row.get(0))?;
    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn settings_roundtrip_and_upsert() {
        let db = Database::open_in_memory().expect("in-memory DB");

        assert_eq!(get_setting(&db, "missing").unwrap(), None);

        set_setting(&db, "snapshot", r#"{"a":1}"#).unwrap();
        assert_eq!(
            get_setting(&db, "snapshot").unwrap().as_deref(),
            Some(r#"{"a":1}"#)
        );

        // Same key overwrites rather than duplicating.
        set_setting(&db, "snapshot", r#"{"a":2}"#).unwrap();
        assert_eq!(
            get_setting(&db, "snapshot").unwrap().as_deref(),
            Some(r#"{"a":2}"#)
        );
    }
}
