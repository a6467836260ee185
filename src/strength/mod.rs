// src/strength/mod.rs
use serde::Serialize;

use crate::i18n::Translator;

pub const MAX_SUGGESTIONS: usize = 3;

/// Seven ordered bands, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
    Excellent,
}

impl StrengthTier {
    pub const ALL: [StrengthTier; 7] = [
        StrengthTier::VeryWeak,
        StrengthTier::Weak,
        StrengthTier::Fair,
        StrengthTier::Good,
        StrengthTier::Strong,
        StrengthTier::VeryStrong,
        StrengthTier::Excellent,
    ];

    /// Scores above the top tier map to `Excellent`.
    pub fn from_score(score: u8) -> Self {
        Self::ALL[usize::from(score).min(Self::ALL.len() - 1)]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label_key(self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "strength.levels.veryWeak",
            StrengthTier::Weak => "strength.levels.weak",
            StrengthTier::Fair => "strength.levels.fair",
            StrengthTier::Good => "strength.levels.good",
            StrengthTier::Strong => "strength.levels.strong",
            StrengthTier::VeryStrong => "strength.levels.veryStrong",
            StrengthTier::Excellent => "strength.levels.excellent",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "#ef4444",
            StrengthTier::Weak => "#f97316",
            StrengthTier::Fair => "#eab308",
            StrengthTier::Good => "#22c55e",
            StrengthTier::Strong => "#16a34a",
            StrengthTier::VeryStrong => "#15803d",
            StrengthTier::Excellent => "#166534",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuggestionKey {
    MinLength,
    RecommendLength,
    IncludeLowercase,
    IncludeUppercase,
    IncludeNumbers,
    IncludeSymbols,
}

impl SuggestionKey {
    pub fn key(self) -> &'static str {
        match self {
            SuggestionKey::MinLength => "strength.suggestions.minLength",
            SuggestionKey::RecommendLength => "strength.suggestions.recommendLength",
            SuggestionKey::IncludeLowercase => "strength.suggestions.includeLowercase",
            SuggestionKey::IncludeUppercase => "strength.suggestions.includeUppercase",
            SuggestionKey::IncludeNumbers => "strength.suggestions.includeNumbers",
            SuggestionKey::IncludeSymbols => "strength.suggestions.includeSymbols",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthResult {
    /// Raw sum of passed checks, 0 to 7.
    pub score: u8,
    pub tier: StrengthTier,
    pub suggestions: Vec<SuggestionKey>,
}

/// Display-ready form of a `StrengthResult`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedStrength {
    pub score: u8,
    pub label: String,
    pub color: &'static str,
    pub suggestions: Vec<String>,
}

impl StrengthResult {
    pub fn label_key(&self) -> &'static str {
        self.tier.label_key()
    }

    pub fn color(&self) -> &'static str {
        self.tier.color()
    }

    pub fn localize(&self, translator: &dyn Translator) -> LocalizedStrength {
        LocalizedStrength {
            score: self.score,
            label: translator.translate(self.label_key()),
            color: self.color(),
            suggestions: self
                .suggestions
                .iter()
                .map(|suggestion| translator.translate(suggestion.key()))
                .collect(),
        }
    }
}

// Analyze password strength
pub fn evaluate(password: &str) -> StrengthResult {
    let length = password.chars().count();
    let mut score = 0u8;
    let mut suggestions = Vec::new();

    if length >= 8 {
        score += 1;
    } else {
        suggestions.push(SuggestionKey::MinLength);
    }

    // Only one length hint when the password is already under 8
    if length >= 12 {
        score += 1;
    } else if length >= 8 {
        suggestions.push(SuggestionKey::RecommendLength);
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    } else {
        suggestions.push(SuggestionKey::IncludeLowercase);
    }

    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    } else {
        suggestions.push(SuggestionKey::IncludeUppercase);
    }

    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    } else {
        suggestions.push(SuggestionKey::IncludeNumbers);
    }

    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    } else {
        suggestions.push(SuggestionKey::IncludeSymbols);
    }

    if length >= 16 {
        score += 1;
    }

    suggestions.truncate(MAX_SUGGESTIONS);

    StrengthResult {
        score,
        tier: StrengthTier::from_score(score),
        suggestions,
    }
}
