use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::preferences::{get_preferences, update_preferences};

pub fn router() -> Router<AppState> {
    Router::new().route("/preferences", get(get_preferences).put(update_preferences))
}
