use crate::dates::{day_key, today};
use crate::emoji::suggest_emoji;
use crate::models::Habit;
use crate::storage::Storage;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

/// The one key the whole collection is stored under. Kept from the browser
/// version of this app so its exported localStorage blobs load as-is.
pub const STORAGE_KEY: &str = "ag-habit-tracker-data";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("a habit named \"{0}\" already exists")]
    DuplicateName(String),
}

/// Owns the habit collection and the injected storage backend. Every
/// successful mutation ends with a `save` call; rejected or no-op calls
/// leave both memory and storage untouched.
pub struct HabitStore {
    storage: Box<dyn Storage>,
    habits: Vec<Habit>,
}

impl HabitStore {
    /// Loads the persisted collection. Anything missing, unreadable or
    /// unparseable becomes an empty collection rather than an error; this
    /// runs once per session.
    pub fn open(storage: Box<dyn Storage>) -> Self {
        let habits = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(habits) => habits,
                Err(err) => {
                    error!("failed to parse stored habits: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                error!("failed to read stored habits: {err}");
                Vec::new()
            }
        };
        Self { storage, habits }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Appends a new habit. A name that is empty after trimming is a silent
    /// no-op; a name already used by any habit (case-insensitively) is a
    /// conflict.
    pub fn add(&mut self, name: &str) -> Result<Option<&Habit>, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        if self.name_taken(name, None) {
            return Err(StoreError::DuplicateName(name.to_string()));
        }

        self.habits.push(Habit {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            emoji: suggest_emoji(name).to_string(),
            created_day: day_key(today()),
            completed_dates: BTreeSet::new(),
        });
        self.save();
        Ok(self.habits.last())
    }

    /// Marks `day` done for the habit, or un-marks it if it already was.
    /// Unknown ids are tolerated and change nothing.
    pub fn toggle_date(&mut self, habit_id: &str, day: NaiveDate) -> Option<&Habit> {
        let pos = self.habits.iter().position(|habit| habit.id == habit_id)?;
        let key = day_key(day);
        let dates = &mut self.habits[pos].completed_dates;
        if !dates.remove(&key) {
            dates.insert(key);
        }
        self.save();
        Some(&self.habits[pos])
    }

    /// Removes the habit if present; returns whether anything was removed.
    pub fn delete(&mut self, habit_id: &str) -> bool {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != habit_id);
        if self.habits.len() == before {
            return false;
        }
        self.save();
        true
    }

    /// Replaces the habit's name in place, keeping its emoji and creation
    /// day. Conflicts with another habit's name are rejected; an unknown id
    /// or a name that trims to empty changes nothing.
    pub fn rename(&mut self, habit_id: &str, new_name: &str) -> Result<Option<&Habit>, StoreError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Ok(None);
        }
        if self.name_taken(new_name, Some(habit_id)) {
            return Err(StoreError::DuplicateName(new_name.to_string()));
        }
        let Some(pos) = self.habits.iter().position(|habit| habit.id == habit_id) else {
            return Ok(None);
        };

        self.habits[pos].name = new_name.to_string();
        self.save();
        Ok(Some(&self.habits[pos]))
    }

    fn name_taken(&self, name: &str, excluded_id: Option<&str>) -> bool {
        let needle = name.to_lowercase();
        self.habits
            .iter()
            .filter(|habit| excluded_id != Some(habit.id.as_str()))
            .any(|habit| habit.name.to_lowercase() == needle)
    }

    /// Persists the whole collection as one JSON blob under the fixed key.
    /// Best-effort: a failed write is logged and the in-memory collection
    /// stays authoritative for the session.
    fn save(&self) {
        let payload = match serde_json::to_string(&self.habits) {
            Ok(payload) => payload,
            Err(err) => {
                error!("failed to serialize habits: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.set(STORAGE_KEY, &payload) {
            error!("failed to persist habits: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageError};

    fn open_store() -> (HabitStore, MemoryStorage) {
        let storage = MemoryStorage::default();
        let store = HabitStore::open(Box::new(storage.clone()));
        (store, storage)
    }

    fn persisted(storage: &MemoryStorage) -> Option<String> {
        storage.get(STORAGE_KEY).unwrap()
    }

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
    }

    #[test]
    fn add_trims_name_and_stamps_creation_fields() {
        let (mut store, _) = open_store();

        let habit = store.add("  Morning run  ").unwrap().unwrap().clone();
        assert_eq!(habit.name, "Morning run");
        assert_eq!(habit.emoji, "🏃");
        assert_eq!(habit.created_day, day_key(today()));
        assert!(habit.completed_dates.is_empty());
        assert!(!habit.id.is_empty());
        assert_eq!(store.habits().len(), 1);
    }

    #[test]
    fn add_assigns_a_fresh_id_to_each_habit() {
        let (mut store, _) = open_store();
        let first = store.add("Journal").unwrap().unwrap().clone();
        let second = store.add("Cook dinner").unwrap().unwrap().clone();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn add_with_blank_name_is_a_silent_no_op() {
        let (mut store, storage) = open_store();

        assert_eq!(store.add("   ").unwrap(), None);
        assert!(store.habits().is_empty());
        assert_eq!(persisted(&storage), None);
    }

    #[test]
    fn add_rejects_duplicate_names_case_insensitively() {
        let (mut store, _) = open_store();

        store.add("Run").unwrap();
        assert_eq!(
            store.add("run"),
            Err(StoreError::DuplicateName("run".to_string()))
        );
        assert_eq!(
            store.add("  RUN  "),
            Err(StoreError::DuplicateName("RUN".to_string()))
        );
        assert_eq!(store.habits().len(), 1);
    }

    #[test]
    fn toggle_marks_and_unmarks_a_day() {
        let (mut store, _) = open_store();
        let id = store.add("Read").unwrap().unwrap().id.clone();

        let habit = store.toggle_date(&id, jan(5)).unwrap();
        assert!(habit.completed_dates.contains("2026-01-05"));

        let habit = store.toggle_date(&id, jan(5)).unwrap();
        assert!(habit.completed_dates.is_empty());
    }

    #[test]
    fn double_toggle_restores_the_prior_dates() {
        let (mut store, _) = open_store();
        let id = store.add("Read").unwrap().unwrap().id.clone();
        store.toggle_date(&id, jan(3));
        let before = store.habits()[0].completed_dates.clone();

        store.toggle_date(&id, jan(7));
        store.toggle_date(&id, jan(7));

        assert_eq!(store.habits()[0].completed_dates, before);
    }

    #[test]
    fn toggle_persists_each_change() {
        let (mut store, storage) = open_store();
        let id = store.add("Read").unwrap().unwrap().id.clone();

        store.toggle_date(&id, jan(5));
        assert!(persisted(&storage).unwrap().contains("2026-01-05"));

        store.toggle_date(&id, jan(5));
        assert!(!persisted(&storage).unwrap().contains("2026-01-05"));
    }

    #[test]
    fn toggle_with_unknown_id_changes_nothing() {
        let (mut store, storage) = open_store();

        assert!(store.toggle_date("missing", jan(5)).is_none());
        assert_eq!(persisted(&storage), None);
    }

    #[test]
    fn delete_removes_only_the_matching_habit() {
        let (mut store, _) = open_store();
        let first = store.add("Read").unwrap().unwrap().id.clone();
        store.add("Walk").unwrap();

        assert!(store.delete(&first));
        assert_eq!(store.habits().len(), 1);
        assert_eq!(store.habits()[0].name, "Walk");
    }

    #[test]
    fn delete_with_unknown_id_is_tolerated() {
        let (mut store, storage) = open_store();
        store.add("Read").unwrap();
        let blob_before = persisted(&storage);

        assert!(!store.delete("missing"));
        assert_eq!(store.habits().len(), 1);
        assert_eq!(persisted(&storage), blob_before);
    }

    #[test]
    fn rename_replaces_name_and_keeps_emoji() {
        let (mut store, _) = open_store();
        let id = store.add("Read books").unwrap().unwrap().id.clone();

        let habit = store.rename(&id, "  Evening pages  ").unwrap().unwrap();
        assert_eq!(habit.name, "Evening pages");
        assert_eq!(habit.emoji, "📚");
    }

    #[test]
    fn rename_to_another_habits_name_conflicts() {
        let (mut store, _) = open_store();
        store.add("Run").unwrap();
        let id = store.add("Walk").unwrap().unwrap().id.clone();

        assert_eq!(
            store.rename(&id, "RUN"),
            Err(StoreError::DuplicateName("RUN".to_string()))
        );
        assert_eq!(store.habits()[1].name, "Walk");
    }

    #[test]
    fn rename_to_own_name_with_different_case_is_allowed() {
        let (mut store, _) = open_store();
        let id = store.add("run").unwrap().unwrap().id.clone();

        let habit = store.rename(&id, "Run").unwrap().unwrap();
        assert_eq!(habit.name, "Run");
    }

    #[test]
    fn rename_with_unknown_id_or_blank_name_is_a_no_op() {
        let (mut store, _) = open_store();
        let id = store.add("Run").unwrap().unwrap().id.clone();

        assert_eq!(store.rename("missing", "Swim").unwrap(), None);
        assert_eq!(store.rename(&id, "   ").unwrap(), None);
        assert_eq!(store.habits()[0].name, "Run");
    }

    #[test]
    fn open_restores_persisted_habits() {
        let storage = MemoryStorage::default();
        let mut store = HabitStore::open(Box::new(storage.clone()));
        let id = store.add("Drink water").unwrap().unwrap().id.clone();
        store.add("Meditate").unwrap();
        store.toggle_date(&id, jan(4));
        store.toggle_date(&id, jan(5));

        let reopened = HabitStore::open(Box::new(storage));
        assert_eq!(reopened.habits().len(), 2);
        let habit = &reopened.habits()[0];
        assert_eq!(habit.id, id);
        assert_eq!(habit.name, "Drink water");
        assert_eq!(habit.emoji, "💧");
        assert_eq!(habit.created_day, day_key(today()));
        assert_eq!(
            habit.completed_dates,
            BTreeSet::from(["2026-01-04".to_string(), "2026-01-05".to_string()])
        );
        assert_eq!(reopened.habits()[1].name, "Meditate");
    }

    #[test]
    fn open_falls_back_to_empty_on_corrupt_blob() {
        let storage = MemoryStorage::default();
        storage.set(STORAGE_KEY, "not json at all").unwrap();

        let store = HabitStore::open(Box::new(storage));
        assert!(store.habits().is_empty());
    }

    #[test]
    fn open_accepts_the_browser_format_and_dedups_dates() {
        let storage = MemoryStorage::default();
        storage
            .set(
                STORAGE_KEY,
                r#"[{"id":"b9f7","name":"Stretch","emoji":"✨","createdDay":"2025-11-02","completedDates":["2025-11-03","2025-11-03"]}]"#,
            )
            .unwrap();

        let store = HabitStore::open(Box::new(storage));
        let habit = &store.habits()[0];
        assert_eq!(habit.id, "b9f7");
        assert_eq!(habit.created_day, "2025-11-02");
        assert_eq!(habit.completed_dates.len(), 1);
    }

    #[test]
    fn failed_writes_keep_the_in_memory_state() {
        struct FailingStorage;

        impl Storage for FailingStorage {
            fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
                Ok(None)
            }

            fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
                Err(StorageError::Write {
                    path: std::path::PathBuf::from(key),
                    source: std::io::Error::other("disk on fire"),
                })
            }
        }

        let mut store = HabitStore::open(Box::new(FailingStorage));
        let id = store.add("Walk").unwrap().unwrap().id.clone();
        store.toggle_date(&id, jan(5));

        assert_eq!(store.habits().len(), 1);
        assert!(store.habits()[0].completed_dates.contains("2026-01-05"));
    }
}
