pub mod app;
pub mod dates;
pub mod emoji;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod store;
pub mod streak;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{resolve_data_dir, FileStorage};
pub use store::HabitStore;
