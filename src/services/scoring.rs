//! Sentiment and Emotion Scoring
//!
//! Lexicon-based scorer producing a polarity score, a normalized compound
//! score in [-1, 1], and an emotion-frequency mapping for a text blob.
//! Deterministic for a given text and lexicon version, with no side effects.
//! Empty or unscorable text yields a neutral result (compound = 0).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Compound threshold above which text is labeled positive (inclusive)
const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound threshold below which text is labeled negative (inclusive)
const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Normalization constant for the compound score (s / sqrt(s^2 + alpha))
const NORMALIZATION_ALPHA: f64 = 15.0;
/// Valence adjustment applied when a token is negated
const NEGATION_SCALAR: f64 = -0.74;
/// Valence boost contributed by an intensifier immediately before a token
const INTENSIFIER_BOOST: f64 = 0.293;
/// How many preceding tokens are inspected for a negation
const NEGATION_WINDOW: usize = 3;

/// Words with positive valence, on a [-4, 4] scale
const POSITIVE_VALENCE: &[(&str, f64)] = &[
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("best", 3.2),
    ("better", 1.9),
    ("brilliant", 2.8),
    ("clear", 1.4),
    ("comfortable", 1.7),
    ("convenient", 1.8),
    ("delight", 2.6),
    ("delighted", 2.9),
    ("easy", 1.9),
    ("effective", 1.9),
    ("efficient", 1.8),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 3.2),
    ("fantastic", 3.0),
    ("fast", 1.3),
    ("favorite", 2.0),
    ("fine", 0.8),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.8),
    ("impressed", 2.2),
    ("impressive", 2.3),
    ("intuitive", 1.6),
    ("like", 1.5),
    ("liked", 1.7),
    ("love", 3.2),
    ("loved", 2.9),
    ("nice", 1.8),
    ("perfect", 3.0),
    ("pleasant", 2.3),
    ("pleased", 2.2),
    ("polite", 1.9),
    ("recommend", 1.6),
    ("reliable", 1.9),
    ("responsive", 1.5),
    ("satisfied", 2.0),
    ("smooth", 1.5),
    ("superb", 3.0),
    ("thanks", 1.9),
    ("useful", 1.9),
    ("valuable", 2.1),
    ("wonderful", 2.7),
    ("works", 1.0),
];

/// Words with negative valence, on a [-4, 4] scale
const NEGATIVE_VALENCE: &[(&str, f64)] = &[
    ("annoying", -1.8),
    ("awful", -2.0),
    ("bad", -2.5),
    ("broken", -1.9),
    ("buggy", -2.0),
    ("complicated", -1.2),
    ("confusing", -1.5),
    ("crash", -2.2),
    ("crashed", -2.2),
    ("disappointed", -2.1),
    ("disappointing", -2.2),
    ("dislike", -1.6),
    ("expensive", -1.0),
    ("fail", -2.3),
    ("failed", -2.2),
    ("failure", -2.4),
    ("frustrated", -2.1),
    ("frustrating", -2.2),
    ("hate", -2.7),
    ("hated", -2.6),
    ("horrible", -2.5),
    ("issue", -1.0),
    ("issues", -1.1),
    ("lack", -1.1),
    ("lacking", -1.3),
    ("mediocre", -0.8),
    ("mess", -1.5),
    ("missing", -1.1),
    ("poor", -2.1),
    ("problem", -1.4),
    ("problems", -1.5),
    ("sad", -2.1),
    ("slow", -1.2),
    ("sucks", -1.5),
    ("terrible", -2.1),
    ("ugly", -2.0),
    ("unacceptable", -2.3),
    ("unhappy", -1.8),
    ("unreliable", -1.9),
    ("unusable", -2.3),
    ("useless", -1.8),
    ("waste", -1.8),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

/// Tokens that negate a following sentiment-bearing word
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "neither", "nobody", "nothing", "hardly", "barely", "cannot",
    "can't", "don't", "doesn't", "didn't", "isn't", "wasn't", "weren't", "won't", "wouldn't",
    "shouldn't", "couldn't", "ain't",
];

/// Tokens that amplify the valence of the next word
const INTENSIFIERS: &[&str] = &[
    "very", "really", "extremely", "absolutely", "incredibly", "totally", "completely", "so",
    "highly", "especially",
];

/// Emotion categories, NRC-style word associations. A word may carry
/// several categories; frequencies are relative to total affect hits.
const EMOTION_LEXICON: &[(&str, &[&str])] = &[
    ("amazing", &["joy", "surprise", "positive"]),
    ("angry", &["anger", "negative"]),
    ("anger", &["anger", "negative"]),
    ("anxious", &["fear", "anticipation", "negative"]),
    ("awful", &["disgust", "negative"]),
    ("bad", &["negative"]),
    ("broken", &["sadness", "negative"]),
    ("calm", &["trust", "positive"]),
    ("crash", &["fear", "surprise", "negative"]),
    ("delighted", &["joy", "positive"]),
    ("disappointed", &["sadness", "negative"]),
    ("disappointing", &["sadness", "negative"]),
    ("disgusting", &["disgust", "negative"]),
    ("excellent", &["joy", "trust", "positive"]),
    ("excited", &["joy", "anticipation", "positive"]),
    ("fail", &["sadness", "negative"]),
    ("failed", &["sadness", "negative"]),
    ("fantastic", &["joy", "positive"]),
    ("fear", &["fear", "negative"]),
    ("friendly", &["joy", "trust", "positive"]),
    ("frustrated", &["anger", "negative"]),
    ("frustrating", &["anger", "negative"]),
    ("fun", &["joy", "positive"]),
    ("glad", &["joy", "positive"]),
    ("good", &["joy", "trust", "positive"]),
    ("great", &["joy", "positive"]),
    ("happy", &["joy", "positive"]),
    ("hate", &["anger", "disgust", "negative"]),
    ("helpful", &["trust", "positive"]),
    ("hope", &["anticipation", "trust", "positive"]),
    ("horrible", &["fear", "disgust", "negative"]),
    ("impressed", &["surprise", "joy", "positive"]),
    ("love", &["joy", "trust", "positive"]),
    ("loved", &["joy", "positive"]),
    ("mess", &["disgust", "negative"]),
    ("perfect", &["joy", "trust", "positive"]),
    ("pleased", &["joy", "positive"]),
    ("poor", &["sadness", "negative"]),
    ("problem", &["fear", "negative"]),
    ("reliable", &["trust", "positive"]),
    ("sad", &["sadness", "negative"]),
    ("scared", &["fear", "negative"]),
    ("slow", &["negative"]),
    ("surprise", &["surprise"]),
    ("surprised", &["surprise"]),
    ("terrible", &["fear", "disgust", "negative"]),
    ("trust", &["trust", "positive"]),
    ("unhappy", &["sadness", "negative"]),
    ("unreliable", &["negative"]),
    ("useless", &["sadness", "negative"]),
    ("waste", &["disgust", "negative"]),
    ("wonderful", &["joy", "surprise", "positive"]),
    ("worried", &["fear", "negative"]),
    ("worst", &["anger", "disgust", "negative"]),
    ("wrong", &["negative"]),
];

/// Result of scoring a text blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Mean valence of sentiment-bearing words, scaled to [-1, 1]
    pub polarity: f64,
    /// Normalized compound sentiment score in [-1, 1]
    pub compound: f64,
    /// Relative frequency per emotion category, summing to <= 1
    pub emotion_frequencies: HashMap<String, f64>,
}

impl ScoreResult {
    /// Neutral result for empty or unscorable text
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            compound: 0.0,
            emotion_frequencies: HashMap::new(),
        }
    }
}

/// Sentiment label derived from a compound score. Bucket boundaries are
/// shared by live analysis and aggregation and must stay in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Derive the label from a compound score: positive iff c >= 0.05,
    /// negative iff c <= -0.05, neutral otherwise. Boundaries inclusive,
    /// positive side checked first.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Canonical lowercase label string
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lexicon-based sentiment and emotion scorer.
///
/// Built once at startup and shared read-only across requests.
pub struct SentimentScorer {
    valence: HashMap<&'static str, f64>,
    emotions: HashMap<&'static str, &'static [&'static str]>,
}

impl SentimentScorer {
    /// Create a new scorer with the built-in lexicons
    pub fn new() -> Self {
        let mut valence = HashMap::new();
        for (word, v) in POSITIVE_VALENCE.iter().chain(NEGATIVE_VALENCE) {
            valence.insert(*word, *v);
        }

        let emotions = EMOTION_LEXICON.iter().copied().collect();

        Self { valence, emotions }
    }

    /// Score a text blob.
    ///
    /// The valence of each lexicon word is summed (with negation and
    /// intensifier adjustments) and normalized to a compound score via
    /// `s / sqrt(s^2 + alpha)`.
    pub fn score(&self, text: &str) -> ScoreResult {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return ScoreResult::neutral();
        }

        let mut valence_sum = 0.0;
        let mut scored_words = 0usize;
        let mut emotion_counts: HashMap<&'static str, usize> = HashMap::new();
        let mut affect_hits = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            if let Some(&base) = self.valence.get(token.as_str()) {
                let mut v = base;

                if i > 0 && INTENSIFIERS.contains(&tokens[i - 1].as_str()) {
                    v += INTENSIFIER_BOOST * v.signum();
                }
                if is_negated(&tokens, i) {
                    v *= NEGATION_SCALAR;
                }

                valence_sum += v;
                scored_words += 1;
            }

            if let Some(categories) = self.emotions.get(token.as_str()) {
                for category in *categories {
                    *emotion_counts.entry(category).or_insert(0) += 1;
                    affect_hits += 1;
                }
            }
        }

        let compound = normalize(valence_sum);
        let polarity = if scored_words > 0 {
            (valence_sum / scored_words as f64 / 4.0).clamp(-1.0, 1.0)
        } else {
            0.0
        };

        let emotion_frequencies = emotion_counts
            .into_iter()
            .map(|(category, count)| (category.to_string(), count as f64 / affect_hits as f64))
            .collect();

        ScoreResult {
            polarity,
            compound,
            emotion_frequencies,
        }
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a raw valence sum into [-1, 1]
fn normalize(sum: f64) -> f64 {
    let norm = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

/// Check whether any of the preceding tokens within the window is a negation
fn is_negated(tokens: &[String], index: usize) -> bool {
    let start = index.saturating_sub(NEGATION_WINDOW);
    tokens[start..index]
        .iter()
        .any(|t| NEGATIONS.contains(&t.as_str()))
}

/// Lowercase tokens stripped of surrounding punctuation; inner apostrophes
/// are kept so contractions match the negation list.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .trim_matches('\'')
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}
