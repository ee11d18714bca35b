use serde::{Deserialize, Serialize};

/// Discrete match level derived from a confidence score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    Low,
    Medium,
    High,
    Exact,
}

impl MatchLevel {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 1.0 {
            Self::Exact
        } else if score >= 0.95 {
            Self::High
        } else if score >= 0.80 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

/// Result of comparing a query against one registered reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMatch {
    /// Name the reference was registered under
    pub name: String,

    /// Similarity in `[0, 1]`
    pub confidence: f64,
}

impl TextMatch {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }

    #[must_use]
    pub fn level(&self) -> MatchLevel {
        MatchLevel::from_score(self.confidence)
    }
}
