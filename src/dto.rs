//! # MoodLog: Request/Response DTOs
//!
//! Conventions:
//! - `*Request`  → deserialized from client JSON body or query params
//! - `*Response` → serialized to client JSON
//! - Presence checks are expressed via `validator` derive macros

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::mood::{LogEntry, Mood};

// ============================================================================
// Analyze
// ============================================================================

/// POST /analyze-sentiment
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

// ============================================================================
// Mood log
// ============================================================================

/// GET /mood-log query parameters
#[derive(Debug, Default, Deserialize)]
pub struct MoodLogQuery {
    /// Case-insensitive substring match against the message
    pub keyword: Option<String>,
    pub mood: Option<Mood>,
}

impl MoodLogQuery {
    pub fn is_empty(&self) -> bool {
        self.mood.is_none() && self.keyword.as_deref().map_or(true, str::is_empty)
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        if let Some(mood) = self.mood {
            if entry.mood != mood {
                return false;
            }
        }
        match self.keyword.as_deref() {
            Some(keyword) if !keyword.is_empty() => entry
                .message
                .to_lowercase()
                .contains(&keyword.to_lowercase()),
            _ => true,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct MoodCounts<T> {
    pub positive: T,
    pub negative: T,
    pub neutral: T,
}

/// GET /mood-log/summary
#[derive(Debug, Serialize)]
pub struct MoodSummaryResponse {
    pub total: usize,
    pub counts: MoodCounts<usize>,
    /// Share of each mood in percent, one decimal place
    pub percentages: MoodCounts<f64>,
}

impl MoodSummaryResponse {
    pub fn from_entries(entries: &[LogEntry]) -> Self {
        let mut counts = MoodCounts::<usize>::default();
        for entry in entries {
            match entry.mood {
                Mood::Positive => counts.positive += 1,
                Mood::Negative => counts.negative += 1,
                Mood::Neutral => counts.neutral += 1,
            }
        }

        let total = entries.len();
        let pct = |n: usize| {
            if total == 0 {
                0.0
            } else {
                (n as f64 / total as f64 * 1000.0).round() / 10.0
            }
        };

        Self {
            total,
            percentages: MoodCounts {
                positive: pct(counts.positive),
                negative: pct(counts.negative),
                neutral: pct(counts.neutral),
            },
            counts,
        }
    }
}
