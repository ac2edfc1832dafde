use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One tracked habit. Serialized field names match the JSON blob the
/// original browser version of this app kept in localStorage, so existing
/// exports load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub created_day: String,
    #[serde(default)]
    pub completed_dates: BTreeSet<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddHabitRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameHabitRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleDateRequest {
    pub date: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitResponse {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub created_day: String,
    pub completed_dates: BTreeSet<String>,
    pub streak: u32,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct HabitListResponse {
    pub today: String,
    pub habits: Vec<HabitResponse>,
}
