use crate::dates::{day_key, parse_day_key, today};
use crate::errors::AppError;
use crate::models::{
    AddHabitRequest, Habit, HabitListResponse, HabitResponse, RenameHabitRequest,
    ToggleDateRequest,
};
use crate::state::AppState;
use crate::streak::current_streak;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_index(&day_key(today()), store.habits().len()))
}

pub async fn list_habits(State(state): State<AppState>) -> Json<HabitListResponse> {
    let store = state.store.lock().await;
    Json(HabitListResponse {
        today: day_key(today()),
        habits: store.habits().iter().map(to_response).collect(),
    })
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<AddHabitRequest>,
) -> Result<Json<HabitResponse>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::bad_request("habit name must not be empty"));
    }

    let mut store = state.store.lock().await;
    let habit = store
        .add(&payload.name)?
        .ok_or_else(|| AppError::bad_request("habit name must not be empty"))?;
    Ok(Json(to_response(habit)))
}

// No-JS fallback for the add form; an empty name just redirects back.
pub async fn add_habit_form(
    State(state): State<AppState>,
    Form(payload): Form<AddHabitRequest>,
) -> Result<Redirect, AppError> {
    let mut store = state.store.lock().await;
    store.add(&payload.name)?;
    Ok(Redirect::to("/"))
}

pub async fn toggle_date(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ToggleDateRequest>,
) -> Result<Json<HabitResponse>, AppError> {
    let day = parse_day_key(&payload.date)
        .ok_or_else(|| AppError::bad_request("date must be a YYYY-MM-DD day"))?;

    let mut store = state.store.lock().await;
    let habit = store
        .toggle_date(&id, day)
        .ok_or_else(|| AppError::not_found("no habit with that id"))?;
    Ok(Json(to_response(habit)))
}

pub async fn rename_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<RenameHabitRequest>,
) -> Result<Json<HabitResponse>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::bad_request("habit name must not be empty"));
    }

    let mut store = state.store.lock().await;
    let habit = store
        .rename(&id, &payload.name)?
        .ok_or_else(|| AppError::not_found("no habit with that id"))?;
    Ok(Json(to_response(habit)))
}

pub async fn delete_habit(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    let mut store = state.store.lock().await;
    store.delete(&id);
    StatusCode::NO_CONTENT
}

fn to_response(habit: &Habit) -> HabitResponse {
    HabitResponse {
        id: habit.id.clone(),
        name: habit.name.clone(),
        emoji: habit.emoji.clone(),
        created_day: habit.created_day.clone(),
        completed_dates: habit.completed_dates.clone(),
        streak: current_streak(&habit.completed_dates),
        total: habit.completed_dates.len(),
    }
}
