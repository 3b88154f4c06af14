//! Threshold and weight resolution with a three-level fallback chain.
//!
//! Operators tune behavior per creditor category (banks held to a stricter
//! minimum than informal collection agencies) without a deployment; the
//! engine stays functional with no configuration at all. Resolution order:
//! exact category, the reserved "default" category, hardcoded constants.

use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::types::errors::{MatchError, MatchResult};

/// Reserved category consulted when the requested one has no entry.
pub const DEFAULT_CATEGORY: &str = "default";

/// Hardcoded fallbacks, used when neither the category nor "default" is
/// configured. Documented here, never invented at call time.
pub const DEFAULT_MIN_SCORE: f64 = 0.70;
pub const DEFAULT_AMBIGUITY_GAP: f64 = 0.15;
pub const DEFAULT_NAME_WEIGHT: f64 = 0.40;
pub const DEFAULT_REFERENCE_WEIGHT: f64 = 0.60;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// The two reserved threshold kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdKind {
    /// Minimum acceptable total score for auto-matching.
    MinScore,
    /// Minimum lead of rank 1 over rank 2 for an unambiguous decision.
    AmbiguityGap,
}

/// Per-signal weights for the weighted total. Must sum to 1.0; validated
/// at resolution time, never silently renormalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalWeights {
    pub name: f64,
    pub reference: f64,
}

impl SignalWeights {
    pub fn sum(&self) -> f64 {
        self.name + self.reference
    }

    pub fn is_valid(&self) -> bool {
        (self.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME_WEIGHT,
            reference: DEFAULT_REFERENCE_WEIGHT,
        }
    }
}

/// Configuration for one category. Every field optional; absent fields
/// fall through to the next resolution level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub min_score: Option<f64>,
    pub ambiguity_gap: Option<f64>,
    pub weights: Option<SignalWeights>,
}

/// The configuration store: category tag to per-category values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub categories: HashMap<String, CategoryConfig>,
}

impl ThresholdConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_category(&mut self, category: impl Into<String>, config: CategoryConfig) {
        self.categories.insert(category.into(), config);
    }
}

/// Resolves thresholds and weights against a [`ThresholdConfig`].
///
/// Intended to be consulted once per orchestration run, not cached across
/// runs, so configuration changes take effect without a restart.
#[derive(Debug, Clone, Default)]
pub struct ThresholdProvider {
    config: ThresholdConfig,
}

impl ThresholdProvider {
    pub fn new(config: ThresholdConfig) -> Self {
        Self { config }
    }

    /// Resolve a numeric threshold. Infallible: the fallback chain bottoms
    /// out at the hardcoded constants.
    pub fn resolve(&self, category: &str, kind: ThresholdKind) -> f64 {
        self.category_value(category, kind)
            .or_else(|| self.category_value(DEFAULT_CATEGORY, kind))
            .unwrap_or(match kind {
                ThresholdKind::MinScore => DEFAULT_MIN_SCORE,
                ThresholdKind::AmbiguityGap => DEFAULT_AMBIGUITY_GAP,
            })
    }

    /// Resolve signal weights. Fails loudly on a configured set that does
    /// not sum to 1.0: renormalizing here would make threshold behavior
    /// non-reproducible for calibration.
    pub fn resolve_weights(&self, category: &str) -> MatchResult<SignalWeights> {
        let (source, weights) = match self.category_weights(category) {
            Some(weights) => (category, weights),
            None => match self.category_weights(DEFAULT_CATEGORY) {
                Some(weights) => (DEFAULT_CATEGORY, weights),
                None => return Ok(SignalWeights::default()),
            },
        };

        if !weights.is_valid() {
            warn!(
                "[MATCH_ENGINE] rejected weights for category '{}': name={} reference={} sum={}",
                source,
                weights.name,
                weights.reference,
                weights.sum()
            );
            return Err(MatchError::InvalidWeights {
                category: source.to_string(),
                sum: weights.sum(),
            });
        }
        Ok(weights)
    }

    fn category_value(&self, category: &str, kind: ThresholdKind) -> Option<f64> {
        let config = self.config.categories.get(category)?;
        match kind {
            ThresholdKind::MinScore => config.min_score,
            ThresholdKind::AmbiguityGap => config.ambiguity_gap,
        }
    }

    fn category_weights(&self, category: &str) -> Option<SignalWeights> {
        self.config.categories.get(category)?.weights
    }
}

#[cfg(test)]
#[path = "tests/thresholds_tests.rs"]
mod tests;
