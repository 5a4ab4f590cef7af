//! Sentiment scoring backed by the VADER lexicon.
//!
//! Scoring itself is delegated to [`vader_sentiment`]; this module only maps the
//! compound score onto a [`Mood`] label.

use std::sync::{Arc, OnceLock};

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::models::mood::{Mood, SentimentResult, SentimentScores};

/// A polarity scorer returning neg/neu/pos proportions plus a compound score.
pub trait PolarityAnalyzer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> SentimentScores;
}

/// VADER lexicon analyzer. The lexicon is compiled into the crate, so there is
/// no data path to load at startup.
#[derive(Debug, Default, Clone, Copy)]
pub struct VaderAnalyzer;

impl VaderAnalyzer {
    /// Process-wide analyzer, built on first use.
    fn shared() -> &'static SentimentIntensityAnalyzer<'static> {
        static ANALYZER: OnceLock<SentimentIntensityAnalyzer<'static>> = OnceLock::new();
        ANALYZER.get_or_init(|| SentimentIntensityAnalyzer::new())
    }
}

impl PolarityAnalyzer for VaderAnalyzer {
    fn polarity_scores(&self, text: &str) -> SentimentScores {
        let scores = Self::shared().polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);

        SentimentScores {
            neg: get("neg"),
            neu: get("neu"),
            pos: get("pos"),
            compound: get("compound"),
        }
    }
}

#[derive(Clone)]
pub struct SentimentScorer {
    analyzer: Arc<dyn PolarityAnalyzer>,
}

impl SentimentScorer {
    pub fn new(analyzer: Arc<dyn PolarityAnalyzer>) -> Self {
        Self { analyzer }
    }

    pub fn vader() -> Self {
        Self::new(Arc::new(VaderAnalyzer))
    }

    /// Scores `text` and classifies the mood. Callers reject empty input first.
    pub fn score(&self, text: &str) -> SentimentResult {
        let scores = self.analyzer.polarity_scores(text);
        SentimentResult {
            mood: Mood::from_compound(scores.compound),
            scores,
        }
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::vader()
    }
}
