use serde::{Deserialize, Serialize};

/// Compound score at or above which a message reads as positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which a message reads as negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Timestamp layout stored in every log entry (local time, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
}

impl Mood {
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Mood::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            Mood::Negative
        } else {
            Mood::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Positive => "positive",
            Mood::Negative => "negative",
            Mood::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub mood: Mood,
    pub scores: SentimentScores,
}

/// One analyzed message as persisted in the mood log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub message: String,
    pub mood: Mood,
    pub compound_score: f64,
}

impl LogEntry {
    /// Builds an entry stamped with the current local time.
    pub fn now(message: impl Into<String>, result: &SentimentResult) -> Self {
        Self {
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
            message: message.into(),
            mood: result.mood,
            compound_score: result.scores.compound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_thresholds_are_inclusive() {
        assert_eq!(Mood::from_compound(0.05), Mood::Positive);
        assert_eq!(Mood::from_compound(-0.05), Mood::Negative);
        assert_eq!(Mood::from_compound(0.0), Mood::Neutral);
        assert_eq!(Mood::from_compound(0.0499), Mood::Neutral);
        assert_eq!(Mood::from_compound(-0.0499), Mood::Neutral);
        assert_eq!(Mood::from_compound(1.0), Mood::Positive);
        assert_eq!(Mood::from_compound(-1.0), Mood::Negative);
    }

    #[test]
    fn test_mood_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mood::Neutral).unwrap(), "\"neutral\"");
        let m: Mood = serde_json::from_str("\"negative\"").unwrap();
        assert_eq!(m, Mood::Negative);
    }

    #[test]
    fn test_entry_timestamp_layout() {
        let result = SentimentResult {
            mood: Mood::Positive,
            scores: SentimentScores {
                neg: 0.0,
                neu: 0.4,
                pos: 0.6,
                compound: 0.62,
            },
        };
        let entry = LogEntry::now("hello", &result);
        assert!(chrono::NaiveDateTime::parse_from_str(&entry.timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(entry.timestamp.len(), 19);
        assert_eq!(entry.compound_score, 0.62);
        assert_eq!(entry.mood, Mood::Positive);
    }
}
