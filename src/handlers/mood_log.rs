use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};

use crate::dto::{MoodLogQuery, MoodSummaryResponse};
use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::models::mood::LogEntry;
use crate::AppState;

const CSV_HEADERS: [&str; 4] = ["timestamp", "message", "mood", "compound_score"];

pub async fn get_mood_log(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<MoodLogQuery>,
) -> AppResult<Json<Vec<LogEntry>>> {
    let mut entries = state.store.read_all().await?;

    if !query.is_empty() {
        entries.retain(|e| query.matches(e));
    }

    Ok(Json(entries))
}

pub async fn get_mood_summary(
    State(state): State<AppState>,
) -> AppResult<Json<MoodSummaryResponse>> {
    let entries = state.store.read_all().await?;
    Ok(Json(MoodSummaryResponse::from_entries(&entries)))
}

pub async fn export_mood_log(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = state.store.read_all().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"mood_log.csv\"",
            ),
        ],
        to_csv(&entries),
    ))
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn to_csv(entries: &[LogEntry]) -> String {
    let mut rows = Vec::with_capacity(entries.len() + 1);
    rows.push(CSV_HEADERS.join(","));

    for e in entries {
        rows.push(
            [
                csv_field(&e.timestamp),
                csv_field(&e.message),
                csv_field(e.mood.as_str()),
                csv_field(&e.compound_score.to_string()),
            ]
            .join(","),
        );
    }

    rows.join("\n")
}
