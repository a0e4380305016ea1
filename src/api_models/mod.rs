pub mod envelope;
pub mod gold;
pub mod preferences;
pub mod sentiment;

pub use envelope::{ApiResponse, HealthResponse};
