use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::root::health;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
