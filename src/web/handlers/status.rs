// GET /api/config — the active scoring configuration.
//
// Lets a front end show which stop list and token length a run will use.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::web::AppState;

pub async fn get_config(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "stop_words": state.config.stop_words,
        "min_token_length": state.config.min_token_length,
        "seeded": state.config.seed.is_some(),
    }))
}
