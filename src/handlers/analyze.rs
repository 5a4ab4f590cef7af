use axum::{extract::State, Json};
use validator::Validate;

use crate::dto::AnalyzeRequest;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::models::mood::{LogEntry, SentimentResult};
use crate::AppState;

pub async fn analyze_sentiment(
    State(state): State<AppState>,
    AppJson(body): AppJson<AnalyzeRequest>,
) -> AppResult<Json<SentimentResult>> {
    if body.validate().is_err() {
        return Err(AppError::Validation("No message provided".into()));
    }
    let message = body.message.unwrap_or_default();

    let result = state.scorer.score(&message);
    let entry = LogEntry::now(message, &result);
    let total = state.store.append(entry).await?;

    tracing::info!(
        mood = %result.mood,
        compound = result.scores.compound,
        entries = total,
        "Message analyzed"
    );

    Ok(Json(result))
}
