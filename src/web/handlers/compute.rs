// POST /api/compute — run the pipeline once over the posted text.
//
// Missing fields fall back to the example documents and question.
// Returns 200 with the report, or 422 with a warning message when the
// pipeline refuses the input (no documents, no usable words).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::mnemonic::seeded_rng;
use crate::pipeline::{self, DEFAULT_DOCUMENTS, DEFAULT_QUESTION};
use crate::web::{api_error, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct ComputeRequest {
    pub documents: Option<String>,
    pub question: Option<String>,
    pub seed: Option<u64>,
}

/// POST /api/compute — score the question against the documents.
pub async fn compute(
    State(state): State<AppState>,
    Json(req): Json<ComputeRequest>,
) -> impl IntoResponse {
    let documents = req.documents.as_deref().unwrap_or(DEFAULT_DOCUMENTS);
    let question = req.question.as_deref().unwrap_or(DEFAULT_QUESTION);

    // Fresh vectorizer per request; only the immutable config is shared
    let mut rng = seeded_rng(req.seed.or(state.config.seed));
    match pipeline::run(documents, question, state.config.vectorizer_config(), &mut rng) {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Rejected compute request");
            api_error(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string())
        }
    }
}

/// GET /api/defaults — the example input a fresh form starts with.
pub async fn defaults() -> impl IntoResponse {
    Json(serde_json::json!({
        "documents": DEFAULT_DOCUMENTS,
        "question": DEFAULT_QUESTION,
    }))
}
