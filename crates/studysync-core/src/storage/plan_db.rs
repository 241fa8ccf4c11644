//! SQLite-backed storage for the profile and the generated schedule.
//!
//! Both are stored as JSON documents in a small key-value table, so a
//! profile or schedule comes back exactly as it was saved.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::data_dir;
use crate::error::{DatabaseError, Result};
use crate::profile::Profile;
use crate::schedule::Schedule;

const PROFILE_KEY: &str = "profile";
const SCHEDULE_KEY: &str = "schedule";

/// SQLite database holding the current profile and schedule.
pub struct PlanDb {
    conn: Connection,
}

impl PlanDb {
    /// Open the database at `<data dir>/studysync.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("studysync.db");
        Self::open_at(&path)
    }

    /// Open (or create) a database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS kv (
                    key        TEXT PRIMARY KEY,
                    value      TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );",
            )
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Remove a value from the kv store.
    pub fn kv_delete(&self, key: &str) -> Result<(), DatabaseError> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.kv_get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.kv_set(key, &serde_json::to_string(value)?)?;
        Ok(())
    }

    pub fn save_profile(&self, profile: &Profile) -> Result<()> {
        self.save_json(PROFILE_KEY, profile)
    }

    pub fn load_profile(&self) -> Result<Option<Profile>> {
        self.load_json(PROFILE_KEY)
    }

    pub fn save_schedule(&self, schedule: &Schedule) -> Result<()> {
        self.save_json(SCHEDULE_KEY, schedule)
    }

    pub fn load_schedule(&self) -> Result<Option<Schedule>> {
        self.load_json(SCHEDULE_KEY)
    }

    /// Store a profile together with the schedule generated from it.
    ///
    /// Both rows are written in one transaction.
    pub fn save_plan(&self, profile: &Profile, schedule: &Schedule) -> Result<()> {
        let tx = self.conn.unchecked_transaction().map_err(DatabaseError::from)?;
        self.save_profile(profile)?;
        self.save_schedule(schedule)?;
        tx.commit().map_err(DatabaseError::from)?;
        debug!("stored profile and schedule");
        Ok(())
    }

    /// Forget the stored profile and schedule.
    ///
    /// Both rows are removed in one transaction.
    pub fn reset(&self) -> Result<()> {
        let tx = self.conn.unchecked_transaction().map_err(DatabaseError::from)?;
        self.kv_delete(PROFILE_KEY)?;
        self.kv_delete(SCHEDULE_KEY)?;
        tx.commit().map_err(DatabaseError::from)?;
        debug!("removed stored profile and schedule");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::StudyPlanner;

    #[test]
    fn kv_store() {
        let db = PlanDb::open_memory().unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
        db.kv_set("test", "hello").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "hello");
        db.kv_set("test", "again").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "again");
        db.kv_delete("test").unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
    }

    #[test]
    fn empty_database_has_no_plan() {
        let db = PlanDb::open_memory().unwrap();
        assert!(db.load_profile().unwrap().is_none());
        assert!(db.load_schedule().unwrap().is_none());
    }

    #[test]
    fn plan_roundtrip_and_reset() {
        let db = PlanDb::open_memory().unwrap();
        let profile = Profile::sample();
        let schedule = StudyPlanner::with_seed(8).generate(&profile).unwrap();

        db.save_plan(&profile, &schedule).unwrap();
        assert_eq!(db.load_profile().unwrap(), Some(profile));
        assert_eq!(db.load_schedule().unwrap(), Some(schedule));

        db.reset().unwrap();
        assert!(db.load_profile().unwrap().is_none());
        assert!(db.load_schedule().unwrap().is_none());
    }

    #[test]
    fn reset_is_committed_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.db");
        let profile = Profile::sample();
        let schedule = StudyPlanner::with_seed(8).generate(&profile).unwrap();

        let db = PlanDb::open_at(&path).unwrap();
        db.save_plan(&profile, &schedule).unwrap();
        db.kv_set("note", "keep me").unwrap();
        db.reset().unwrap();
        drop(db);

        let reopened = PlanDb::open_at(&path).unwrap();
        assert!(reopened.load_profile().unwrap().is_none());
        assert!(reopened.load_schedule().unwrap().is_none());
        assert_eq!(reopened.kv_get("note").unwrap().as_deref(), Some("keep me"));
        // a second reset on an empty store is a no-op
        reopened.reset().unwrap();
    }

    #[test]
    fn file_database_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.db");
        let profile = Profile::sample();

        PlanDb::open_at(&path).unwrap().save_profile(&profile).unwrap();
        let reopened = PlanDb::open_at(&path).unwrap();
        assert_eq!(reopened.load_profile().unwrap(), Some(profile));
    }
}
